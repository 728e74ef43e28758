//! The derived-data record shown on the summary.
//!
//! Nothing in here is stored incrementally: [`derive`] rebuilds the whole
//! record from the current impact point and tracks every time it is called.
//! Any value that cannot be computed stays `None`; the summary must show it
//! as undetermined rather than substitute a default.

use super::participant::{Participant, VehicleTrack};
use super::SessionId;
use crate::classify::{CollisionClassification, CollisionGeometry, PdofClock};
use crate::geo::{self, approach_angle, path_end_bearing, GeoPoint};
use crate::path::snap_to_path_detailed;
use serde::{Deserialize, Serialize};

/// Per-vehicle values read off its own paths.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleDerived {
    /// Direction of travel going into the impact.
    pub approach_bearing: Option<f64>,
    /// Direction of travel at the end of the post-impact path.
    pub separation_bearing: Option<f64>,
    /// Signed turn from approach to separation, in `(-180, 180]`.
    pub heading_change: Option<f64>,
    /// How far the drawn path passes from the impact point, in meters.
    pub impact_offset_m: Option<f64>,
}

impl VehicleDerived {
    pub fn from_track(track: &VehicleTrack, impact: Option<GeoPoint>) -> Self {
        let approach_bearing = path_end_bearing(&track.pre_impact);
        let separation_bearing = path_end_bearing(&track.post_impact);
        let heading_change = match (approach_bearing, separation_bearing) {
            (Some(before), Some(after)) => Some(geo::heading_change(before, after)),
            _ => None,
        };
        let impact_offset_m = impact
            .and_then(|impact| snap_to_path_detailed(impact, &track.drawn))
            .map(|snap| snap.distance_m);

        Self {
            approach_bearing,
            separation_bearing,
            heading_change,
            impact_offset_m,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedData {
    pub session: SessionId,
    pub own: VehicleDerived,
    /// Present only when the other party is a vehicle.
    pub other: Option<VehicleDerived>,
    pub approach_angle: Option<f64>,
    pub separation_angle: Option<f64>,
    pub collision_type: Option<CollisionClassification>,
    pub pdof_clock: Option<PdofClock>,
}

impl DerivedData {
    pub fn geometry(&self) -> Option<CollisionGeometry> {
        Some(CollisionGeometry {
            approach_angle: self.approach_angle?,
            classification: self.collision_type?,
            pdof_clock: self.pdof_clock?,
        })
    }

    pub fn is_classified(&self) -> bool {
        self.collision_type.is_some()
    }
}

/// Collision geometry between two vehicles, from the final segment of each
/// pre-impact path. `None` until both paths have at least two points.
pub fn classify_vehicles(own: &VehicleTrack, other: &VehicleTrack) -> Option<CollisionGeometry> {
    let own_bearing = path_end_bearing(&own.pre_impact)?;
    let other_bearing = path_end_bearing(&other.pre_impact)?;
    Some(CollisionGeometry::from_bearings(own_bearing, other_bearing))
}

/// Rebuilds the derived record from scratch.
pub fn derive(
    session: SessionId,
    impact: Option<GeoPoint>,
    own: &VehicleTrack,
    other: &Participant,
) -> DerivedData {
    let own_derived = VehicleDerived::from_track(own, impact);

    let (other_derived, geometry) = match other {
        Participant::Vehicle(other_track) => (
            Some(VehicleDerived::from_track(other_track, impact)),
            classify_vehicles(own, other_track),
        ),
        Participant::NonVehicle(_) => (None, None),
    };

    let separation_angle = other_derived.as_ref().and_then(|other| {
        Some(approach_angle(
            own_derived.separation_bearing?,
            other.separation_bearing?,
        ))
    });

    DerivedData {
        session,
        own: own_derived,
        other: other_derived,
        approach_angle: geometry.map(|g| g.approach_angle),
        separation_angle,
        collision_type: geometry.map(|g| g.classification),
        pdof_clock: geometry.map(|g| g.pdof_clock),
    }
}
