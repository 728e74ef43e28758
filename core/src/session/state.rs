use super::config::DrawingConfig;
use super::derive::{derive, DerivedData};
use super::participant::{
    ApproachDrawing, CollisionEntityType, MovementType, Participant, ParticipantRole, SpeedTrend, VehicleTrack,
};
use super::SessionId;
use crate::geo::{GeoPoint, Path};
use crate::path::anchor_at_impact;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionError {
    #[error("No impact point has been placed")]
    NoImpactPoint,
    #[error("The other party is not a vehicle")]
    NotAVehicle,
    #[error("The other party is a vehicle and has no fixed position")]
    OtherIsVehicle,
    #[error("Path has {got} points, at least {needed} required")]
    PathTooShort { needed: usize, got: usize },
    #[error("Your own path must be drawn before the other vehicle's")]
    OwnPathMissing,
    #[error("No stroke is in progress")]
    NoActiveStroke,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Derivation {
    /// Both vehicles have approach bearings; the collision is classified.
    Full,
    /// Something is derived but there is no classification.
    Partial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    NoImpactPoint,
    ImpactPointSet,
    /// Waiting for the other vehicle's path.
    OwnPathCaptured,
    Derived(Derivation),
}

/// One witness's reconstruction.
///
/// Every mutation goes through a method that ends by rebuilding the derived
/// record, so [`derived`](Self::derived) always reflects the latest committed
/// impact point and paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconstructionSession {
    id: SessionId,
    config: DrawingConfig,
    impact: Option<GeoPoint>,
    own: VehicleTrack,
    other: Participant,
    derived: DerivedData,
}

impl ReconstructionSession {
    pub fn new(other: CollisionEntityType, config: DrawingConfig) -> Self {
        Self::with_id(SessionId::new(), other, config)
    }

    pub fn with_id(id: SessionId, other: CollisionEntityType, config: DrawingConfig) -> Self {
        let own = VehicleTrack::new("Your vehicle");
        let other = Participant::new(other);
        let derived = derive(id, None, &own, &other);
        Self {
            id,
            config,
            impact: None,
            own,
            other,
            derived,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn config(&self) -> &DrawingConfig {
        &self.config
    }

    pub fn impact(&self) -> Option<GeoPoint> {
        self.impact
    }

    pub fn own(&self) -> &VehicleTrack {
        &self.own
    }

    pub fn other(&self) -> &Participant {
        &self.other
    }

    pub fn derived(&self) -> &DerivedData {
        &self.derived
    }

    pub fn track(&self, role: ParticipantRole) -> Option<&VehicleTrack> {
        match role {
            ParticipantRole::Own => Some(&self.own),
            ParticipantRole::Other => self.other.as_vehicle(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.impact.is_none() {
            return SessionPhase::NoImpactPoint;
        }
        if !self.own.has_approach() {
            return SessionPhase::ImpactPointSet;
        }
        if let Participant::Vehicle(other) = &self.other {
            if !other.has_approach() {
                return SessionPhase::OwnPathCaptured;
            }
        }
        if self.derived.is_classified() {
            SessionPhase::Derived(Derivation::Full)
        } else {
            SessionPhase::Derived(Derivation::Partial)
        }
    }

    /// Changes what the witness collided with. Anything recorded about the
    /// previous other party is dropped.
    pub fn choose_other(&mut self, entity_type: CollisionEntityType) {
        if self.other.entity_type() != entity_type {
            self.other = Participant::new(entity_type);
            debug!(?entity_type, "other party changed");
            self.recompute();
        }
    }

    /// Places or replaces the impact point. Every committed stroke is split
    /// or anchored again at the new location.
    pub fn place_impact(&mut self, at: GeoPoint) {
        self.impact = Some(at);
        debug!(lat = at.lat, lng = at.lng, "impact point placed");
        self.reanchor();
        self.recompute();
    }

    /// Removes the impact point. Committed strokes are kept but have no
    /// pre- or post-impact paths until a new impact point is placed.
    pub fn clear_impact(&mut self) {
        self.impact = None;
        self.reanchor();
        self.recompute();
    }

    /// Commits one continuous path drawn through the impact point and splits
    /// it into approach and departure. Replaces any separate departure.
    pub fn commit_drawn_path(&mut self, role: ParticipantRole, path: Path) -> Result<(), SessionError> {
        let impact = self.impact.ok_or(SessionError::NoImpactPoint)?;
        self.check_path_len(path.len())?;
        self.check_approach_order(role)?;

        let threshold = self.config.auto_extend_threshold_m;
        let track = self.track_mut(role)?;
        track.drawn = path;
        track.drawn_as = Some(ApproachDrawing::Through);
        track.departure_drawn.clear();
        track.anchor_to(Some(impact), threshold);
        debug!(
            ?role,
            pre = track.pre_impact.len(),
            post = track.post_impact.len(),
            "path split at impact"
        );
        self.recompute();
        Ok(())
    }

    /// Commits a path drawn up to the impact only. It is extended to the
    /// impact point when it stops short.
    pub fn commit_approach_path(&mut self, role: ParticipantRole, path: Path) -> Result<(), SessionError> {
        let impact = self.impact.ok_or(SessionError::NoImpactPoint)?;
        self.check_path_len(path.len())?;
        self.check_approach_order(role)?;

        let threshold = self.config.auto_extend_threshold_m;
        let track = self.track_mut(role)?;
        track.drawn = path;
        track.drawn_as = Some(ApproachDrawing::Approach);
        track.anchor_to(Some(impact), threshold);
        debug!(?role, extended = track.pre_impact.len() > track.drawn.len(), "approach path committed");
        self.recompute();
        Ok(())
    }

    /// Commits a path drawn away from the impact only.
    pub fn commit_departure_path(&mut self, role: ParticipantRole, path: Path) -> Result<(), SessionError> {
        let impact = self.impact.ok_or(SessionError::NoImpactPoint)?;
        self.check_path_len(anchor_at_impact(&path, impact).len())?;

        let threshold = self.config.auto_extend_threshold_m;
        let track = self.track_mut(role)?;
        track.departure_drawn = path;
        track.anchor_to(Some(impact), threshold);
        debug!(?role, "departure path committed");
        self.recompute();
        Ok(())
    }

    pub fn place_rest_position(&mut self, role: ParticipantRole, at: GeoPoint) -> Result<(), SessionError> {
        self.track_mut(role)?.rest_position = Some(at);
        self.recompute();
        Ok(())
    }

    pub fn clear_rest_position(&mut self, role: ParticipantRole) -> Result<(), SessionError> {
        self.track_mut(role)?.rest_position = None;
        self.recompute();
        Ok(())
    }

    /// Places the non-vehicle party on the map.
    pub fn place_other_entity(&mut self, at: Option<GeoPoint>) -> Result<(), SessionError> {
        match &mut self.other {
            Participant::NonVehicle(entity) => entity.position = at,
            Participant::Vehicle(_) => return Err(SessionError::OtherIsVehicle),
        }
        self.recompute();
        Ok(())
    }

    pub fn describe_other_entity(
        &mut self,
        sub_type: Option<String>,
        description: String,
    ) -> Result<(), SessionError> {
        match &mut self.other {
            Participant::NonVehicle(entity) => {
                entity.sub_type = sub_type;
                entity.description = description;
                Ok(())
            }
            Participant::Vehicle(_) => Err(SessionError::OtherIsVehicle),
        }
    }

    /// Records how a vehicle was moving. A stopped vehicle has no speed.
    pub fn set_movement(
        &mut self,
        role: ParticipantRole,
        movement: MovementType,
        speed_estimate_mph: Option<u32>,
    ) -> Result<(), SessionError> {
        let track = self.track_mut(role)?;
        track.movement = Some(movement);
        track.speed_estimate_mph = match movement {
            MovementType::Stopped => None,
            _ => speed_estimate_mph,
        };
        Ok(())
    }

    pub fn set_speed_trend(&mut self, role: ParticipantRole, trend: SpeedTrend) -> Result<(), SessionError> {
        self.track_mut(role)?.speed_trend = Some(trend);
        Ok(())
    }

    fn track_mut(&mut self, role: ParticipantRole) -> Result<&mut VehicleTrack, SessionError> {
        match role {
            ParticipantRole::Own => Ok(&mut self.own),
            ParticipantRole::Other => self.other.as_vehicle_mut().ok_or(SessionError::NotAVehicle),
        }
    }

    fn check_path_len(&self, len: usize) -> Result<(), SessionError> {
        let needed = self.config.min_path_points;
        if len < needed {
            return Err(SessionError::PathTooShort { needed, got: len });
        }
        Ok(())
    }

    fn check_approach_order(&self, role: ParticipantRole) -> Result<(), SessionError> {
        match role {
            ParticipantRole::Other if self.other.as_vehicle().is_none() => Err(SessionError::NotAVehicle),
            ParticipantRole::Other if !self.own.has_approach() => Err(SessionError::OwnPathMissing),
            _ => Ok(()),
        }
    }

    fn reanchor(&mut self) {
        let threshold = self.config.auto_extend_threshold_m;
        self.own.anchor_to(self.impact, threshold);
        if let Some(other) = self.other.as_vehicle_mut() {
            other.anchor_to(self.impact, threshold);
        }
    }

    fn recompute(&mut self) {
        self.derived = derive(self.id, self.impact, &self.own, &self.other);
        debug!(
            phase = ?self.phase(),
            approach_angle = ?self.derived.approach_angle,
            "derived data recomputed"
        );
    }
}
