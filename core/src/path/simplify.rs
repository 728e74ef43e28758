//! Douglas-Peucker reduction of freehand input.

use crate::geo::{GeoPoint, Path};

/// Distance from `point` to the infinite line through `line_start` and
/// `line_end`, measured on raw degree deltas.
///
/// Tolerances handed to [`simplify`] are tuned against this measure, so it
/// must stay planar.
pub(crate) fn perpendicular_distance(point: GeoPoint, line_start: GeoPoint, line_end: GeoPoint) -> f64 {
    let start = line_start.planar();
    let dir = line_end.planar() - start;
    let offset = point.planar() - start;

    let len_sq = dir.norm_squared();
    if len_sq == 0.0 {
        return offset.norm();
    }

    let t = offset.dot(&dir) / len_sq;
    (offset - dir * t).norm()
}

/// Reduces `points` to the smallest vertex set that stays within `tolerance`
/// of the original shape.
///
/// The first and last points are always kept verbatim and the output is never
/// longer than the input. Equal distances resolve to the lowest index, so the
/// result is fully reproducible and simplifying twice changes nothing.
pub fn simplify(points: &[GeoPoint], tolerance: f64) -> Path {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut kept = Vec::with_capacity(points.len());
    simplify_span(points, tolerance, &mut kept);
    kept.push(points[points.len() - 1]);
    kept
}

/// Appends the kept points of `span` to `kept`, excluding its final point so
/// adjacent spans can be concatenated without duplicating the junction.
fn simplify_span(span: &[GeoPoint], tolerance: f64, kept: &mut Path) {
    let first = span[0];
    if span.len() <= 2 {
        kept.push(first);
        return;
    }

    let last = span[span.len() - 1];
    let mut max_idx = 1;
    let mut max_dist = perpendicular_distance(span[1], first, last);
    for (i, p) in span.iter().enumerate().take(span.len() - 1).skip(2) {
        let dist = perpendicular_distance(*p, first, last);
        if dist > max_dist {
            max_dist = dist;
            max_idx = i;
        }
    }

    if max_dist > tolerance {
        simplify_span(&span[..=max_idx], tolerance, kept);
        simplify_span(&span[max_idx..], tolerance, kept);
    } else {
        kept.push(first);
    }
}
