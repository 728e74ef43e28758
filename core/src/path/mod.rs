//! Polyline processing for hand-drawn paths.
//!
//! All shape decisions in this module (simplification, projection) use the
//! planar lat/lng approximation from [`GeoPoint::planar`](crate::geo::GeoPoint::planar).
//! Only comparisons that pick a "closest" candidate use geodesic distance.

pub mod project;
pub mod simplify;
pub mod split;

pub use project::{nearest_point_on_segment, snap_to_path, snap_to_path_detailed, PathSnap};
pub use simplify::simplify;
pub use split::{anchor_at_impact, extend_to_impact, nearest_vertex, split_at_impact, SplitResult};
