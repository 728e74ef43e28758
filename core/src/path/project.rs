//! Snapping arbitrary points onto a drawn path.

use crate::geo::{distance, GeoPoint};
use serde::{Deserialize, Serialize};

/// Where a point lands when snapped onto a path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathSnap {
    /// The location on the path.
    pub position: GeoPoint,
    /// Index of the segment's start vertex. Zero for single-point paths.
    pub segment: usize,
    /// Geodesic distance from the query point, in meters.
    pub distance_m: f64,
}

/// Orthogonal projection of `point` onto the segment, clamped to its ends.
pub fn nearest_point_on_segment(point: GeoPoint, seg_start: GeoPoint, seg_end: GeoPoint) -> GeoPoint {
    let start = seg_start.planar();
    let dir = seg_end.planar() - start;

    let len_sq = dir.norm_squared();
    if len_sq == 0.0 {
        return seg_start;
    }

    let t = ((point.planar() - start).dot(&dir) / len_sq).clamp(0.0, 1.0);
    GeoPoint::from_planar(start + dir * t)
}

/// Closest location on `path` to `point`, with the segment it lies on.
///
/// Returns `None` for an empty path. When two segments are equally close the
/// earlier one wins.
pub fn snap_to_path_detailed(point: GeoPoint, path: &[GeoPoint]) -> Option<PathSnap> {
    match path {
        [] => None,
        [only] => Some(PathSnap {
            position: *only,
            segment: 0,
            distance_m: distance(point, *only),
        }),
        _ => {
            let mut best: Option<PathSnap> = None;
            for (segment, pair) in path.windows(2).enumerate() {
                let position = nearest_point_on_segment(point, pair[0], pair[1]);
                let distance_m = distance(point, position);
                if best.map_or(true, |b| distance_m < b.distance_m) {
                    best = Some(PathSnap {
                        position,
                        segment,
                        distance_m,
                    });
                }
            }
            best
        }
    }
}

/// Closest location on `path` to `point`. An empty path leaves the point
/// where it is.
pub fn snap_to_path(point: GeoPoint, path: &[GeoPoint]) -> GeoPoint {
    snap_to_path_detailed(point, path).map_or(point, |snap| snap.position)
}
