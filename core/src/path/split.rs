//! Cutting a drawn path at the impact point.

use crate::geo::{distance, GeoPoint, Path};
use serde::{Deserialize, Serialize};

/// A path cut in two at the impact point.
///
/// For any input of two or more points, `pre` ends with the impact point and
/// `post` starts with it, bit for bit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitResult {
    pub pre: Path,
    pub post: Path,
}

/// Index of the vertex closest to `target`, first one on ties.
pub fn nearest_vertex(path: &[GeoPoint], target: GeoPoint) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in path.iter().enumerate() {
        let d = distance(*p, target);
        if best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

/// Splits `path` at the vertex nearest to `impact`.
///
/// The chosen vertex is replaced by `impact` at the end of `pre`, and `post`
/// is `impact` followed by everything after that vertex. Paths with fewer than
/// two points are not split: `pre` is the input and `post` is empty.
///
/// Only vertices are considered, not the segments between them, so a path
/// that loops back near the impact can split at a surprising vertex.
pub fn split_at_impact(path: &[GeoPoint], impact: GeoPoint) -> SplitResult {
    if path.len() < 2 {
        return SplitResult {
            pre: path.to_vec(),
            post: Vec::new(),
        };
    }

    let idx = nearest_vertex(path, impact).unwrap_or(0);

    let mut pre = path[..=idx].to_vec();
    if let Some(last) = pre.last_mut() {
        *last = impact;
    }

    let mut post = Vec::with_capacity(path.len() - idx);
    post.push(impact);
    post.extend_from_slice(&path[idx + 1..]);

    SplitResult { pre, post }
}

/// Appends `impact` to an approach path that stops short of it by more than
/// `threshold_m`. Empty paths are returned as-is.
pub fn extend_to_impact(path: &[GeoPoint], impact: GeoPoint, threshold_m: f64) -> Path {
    let mut extended = path.to_vec();
    if let Some(last) = path.last() {
        if distance(*last, impact) > threshold_m {
            extended.push(impact);
        }
    }
    extended
}

/// Makes a departure path start exactly at `impact`, prepending it when the
/// first point is anything else. Empty paths are returned as-is.
pub fn anchor_at_impact(path: &[GeoPoint], impact: GeoPoint) -> Path {
    match path.first() {
        None => Vec::new(),
        Some(first) if *first == impact => path.to_vec(),
        Some(_) => {
            let mut anchored = Vec::with_capacity(path.len() + 1);
            anchored.push(impact);
            anchored.extend_from_slice(path);
            anchored
        }
    }
}
