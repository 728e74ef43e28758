//! Collision labels derived from an approach angle.
//!
//! These are coarse buckets for a witness summary, not a reconstruction of
//! the impact forces.

use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(test)]
mod tests_classify;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollisionClassification {
    #[serde(rename = "Rear-end")]
    RearEnd,
    #[serde(rename = "T-bone")]
    TBone,
    #[serde(rename = "Sideswipe")]
    Sideswipe,
}

impl fmt::Display for CollisionClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RearEnd => write!(f, "Rear-end"),
            Self::TBone => write!(f, "T-bone"),
            Self::Sideswipe => write!(f, "Sideswipe"),
        }
    }
}

/// Principal direction of force as a clock position, always in `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PdofClock(u8);

impl PdofClock {
    pub fn new(hour: u8) -> Option<Self> {
        (1..=12).contains(&hour).then_some(Self(hour))
    }

    pub fn hour(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for PdofClock {
    type Error = String;

    fn try_from(hour: u8) -> Result<Self, Self::Error> {
        Self::new(hour).ok_or_else(|| format!("clock position {} is outside 1..=12", hour))
    }
}

impl From<PdofClock> for u8 {
    fn from(clock: PdofClock) -> Self {
        clock.0
    }
}

impl fmt::Display for PdofClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Buckets an approach angle in degrees.
///
/// Near-parallel travel (`<= 30` or `>= 150`) is a rear-end, `60..=120` is a
/// T-bone and the two gaps in between are sideswipes. The rear-end bands
/// claim 30 and 150; the T-bone band claims 60 and 120.
pub fn classify(approach_angle: f64) -> CollisionClassification {
    if approach_angle <= 30.0 || approach_angle >= 150.0 {
        CollisionClassification::RearEnd
    } else if (60.0..=120.0).contains(&approach_angle) {
        CollisionClassification::TBone
    } else {
        CollisionClassification::Sideswipe
    }
}

/// Rounds an angle to the nearest of twelve 30° clock positions, with 0
/// reported as 12.
pub fn to_clock_approximation(approach_angle: f64) -> PdofClock {
    let hour = ((approach_angle / 30.0).round() as i64).rem_euclid(12);
    PdofClock(if hour == 0 { 12 } else { hour as u8 })
}

/// Everything derived from a single approach angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionGeometry {
    pub approach_angle: f64,
    pub classification: CollisionClassification,
    pub pdof_clock: PdofClock,
}

impl CollisionGeometry {
    pub fn from_approach_angle(approach_angle: f64) -> Self {
        Self {
            approach_angle,
            classification: classify(approach_angle),
            pdof_clock: to_clock_approximation(approach_angle),
        }
    }

    /// Geometry for two vehicles travelling at the given bearings.
    pub fn from_bearings(bearing1: f64, bearing2: f64) -> Self {
        Self::from_approach_angle(crate::geo::approach_angle(bearing1, bearing2))
    }
}
