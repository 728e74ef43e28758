//! Spherical bearing and distance primitives.
//!
//! Everything here is a pure function of its arguments. Non-finite input is
//! not detected; NaN goes in, NaN comes out.

use super::{GeoPoint, EARTH_RADIUS_M};

/// Initial compass bearing from `from` to `to`, in degrees clockwise from
/// north, normalised into `[0, 360)`.
///
/// When `from == to` the direction is meaningless and the result is just
/// some value in range.
pub fn bearing(from: GeoPoint, to: GeoPoint) -> f64 {
    let d_lng = (to.lng - from.lng).to_radians();
    let from_lat = from.lat.to_radians();
    let to_lat = to.lat.to_radians();

    let y = d_lng.sin() * to_lat.cos();
    let x = from_lat.cos() * to_lat.sin() - from_lat.sin() * to_lat.cos() * d_lng.cos();

    // rem_euclid would round tiny negative angles up to exactly 360.0
    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Great-circle distance in meters (haversine).
pub fn distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_M * c
}

/// Unsigned difference between two bearings, folded into `[0, 180]`.
pub fn approach_angle(bearing1: f64, bearing2: f64) -> f64 {
    let angle = (bearing1 - bearing2).abs();
    if angle > 180.0 {
        360.0 - angle
    } else {
        angle
    }
}

/// Signed turn from `before` to `after`, in `(-180, 180]`. Positive is a
/// clockwise turn.
pub fn heading_change(before: f64, after: f64) -> f64 {
    let delta = (after - before) % 360.0;
    if delta > 180.0 {
        delta - 360.0
    } else if delta <= -180.0 {
        delta + 360.0
    } else {
        delta
    }
}

/// Direction of the first segment of a path.
pub fn path_start_bearing(path: &[GeoPoint]) -> Option<f64> {
    match path {
        [first, second, ..] => Some(bearing(*first, *second)),
        _ => None,
    }
}

/// Direction of the last segment of a path.
pub fn path_end_bearing(path: &[GeoPoint]) -> Option<f64> {
    match path {
        [.., second_last, last] => Some(bearing(*second_last, *last)),
        _ => None,
    }
}

pub fn is_within_threshold(a: GeoPoint, b: GeoPoint, threshold_m: f64) -> bool {
    distance(a, b) <= threshold_m
}
