//! Geographic primitives shared by the path and classification code.
//!
//! Coordinates are plain latitude/longitude degrees with no datum correction.
//! Spherical quantities (bearing, distance) live in [`math`]; the planar
//! view returned by [`GeoPoint::planar`] treats raw degree deltas as a flat
//! plane and is only meant for the shape heuristics in `crate::path`.

use nalgebra as na;
use serde::{Deserialize, Serialize};

pub mod math;
pub use math::*;

#[cfg(test)]
pub(crate) use approx::ApproxEq;

#[cfg(test)]
mod tests_math;

/// Raw (lat, lng) degree deltas viewed as a 2D vector.
pub type Planar = na::Vector2<f64>;

/// Ordered sequence of points in traversal order.
pub type Path = Vec<GeoPoint>;

/// Mean Earth radius used by the haversine formula, in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    #[inline]
    pub fn planar(&self) -> Planar {
        Planar::new(self.lat, self.lng)
    }

    #[inline]
    pub fn from_planar(v: Planar) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from(p: [f64; 2]) -> Self {
        Self::new(p[0], p[1])
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}
