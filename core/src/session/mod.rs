//! A single witness reconstruction: what has been placed and drawn so far,
//! and the record derived from it.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub mod config;
pub use config::DrawingConfig;

pub mod participant;
pub use participant::{
    ApproachDrawing, CollisionEntityType, MovementType, OtherEntity, OtherEntityKind, Participant, ParticipantRole,
    SpeedTrend, VehicleTrack,
};

pub mod derive;
pub use derive::{derive, DerivedData, VehicleDerived};

pub mod stroke;
pub use stroke::StrokeRecorder;

pub mod state;
pub use state::{Derivation, ReconstructionSession, SessionError, SessionPhase};

#[cfg(test)]
mod tests_stroke;
#[cfg(test)]
mod tests_derive;

/// Identifies one reconstruction to whatever stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Same seed, same id. Used when replaying a recorded session.
    pub fn new_deterministic(seed: &str) -> Self {
        Self(Uuid::new_v5(&Uuid::NAMESPACE_OID, seed.as_bytes()))
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
