//! Plain-text summary of a session.
//!
//! Any value the core could not derive is printed as "unable to determine"
//! so a reader never mistakes a missing value for a measured one.

use collision_core::geo::GeoPoint;
use collision_core::session::{
    CollisionEntityType, Participant, ReconstructionSession, VehicleDerived, VehicleTrack,
};
use std::fmt;

const UNDETERMINED: &str = "unable to determine";

fn degrees(value: Option<f64>) -> String {
    value.map_or_else(|| UNDETERMINED.to_string(), |v| format!("{:.1}\u{b0}", v))
}

fn position(value: Option<GeoPoint>) -> String {
    value.map_or_else(
        || "not placed".to_string(),
        |p| format!("{:.6}, {:.6}", p.lat, p.lng),
    )
}

fn describe_entity_type(entity_type: CollisionEntityType) -> &'static str {
    match entity_type {
        CollisionEntityType::Vehicle => "Another vehicle",
        CollisionEntityType::Object => "An object",
        CollisionEntityType::Animal => "An animal",
        CollisionEntityType::Property => "Property",
    }
}

fn write_vehicle(f: &mut fmt::Formatter<'_>, track: &VehicleTrack, derived: &VehicleDerived) -> fmt::Result {
    writeln!(f, "{}:", track.label)?;
    writeln!(f, "  Approach bearing: {}", degrees(derived.approach_bearing))?;
    writeln!(f, "  Separation bearing: {}", degrees(derived.separation_bearing))?;
    writeln!(f, "  Heading change: {}", degrees(derived.heading_change))?;
    if let Some(movement) = track.movement {
        let speed = track
            .speed_estimate_mph
            .map_or_else(|| "speed unknown".to_string(), |mph| format!("{} mph", mph));
        writeln!(f, "  Movement: {:?}, {}", movement, speed)?;
    }
    if let Some(trend) = track.speed_trend {
        writeln!(f, "  Speed trend: {:?}", trend)?;
    }
    writeln!(f, "  Rest: {}", position(track.rest_position))
}

/// Text summary of a session, one fact per line.
pub struct Summary<'a>(pub &'a ReconstructionSession);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        let derived = session.derived();

        writeln!(f, "Session {}", session.id())?;
        writeln!(
            f,
            "Collided with: {}",
            describe_entity_type(session.other().entity_type())
        )?;
        writeln!(f, "Impact point: {}", position(session.impact()))?;

        write_vehicle(f, session.own(), &derived.own)?;

        match session.other() {
            Participant::Vehicle(track) => {
                let other_derived = derived.other.clone().unwrap_or_default();
                write_vehicle(f, track, &other_derived)?;
            }
            Participant::NonVehicle(entity) => {
                writeln!(f, "{}:", entity.label)?;
                if let Some(sub_type) = &entity.sub_type {
                    writeln!(f, "  Type: {}", sub_type)?;
                }
                if !entity.description.is_empty() {
                    writeln!(f, "  Description: {}", entity.description)?;
                }
                writeln!(f, "  Position: {}", position(entity.position))?;
            }
        }

        writeln!(f, "Approach angle: {}", degrees(derived.approach_angle))?;
        writeln!(
            f,
            "Classification: {}",
            derived
                .collision_type
                .map_or_else(|| UNDETERMINED.to_string(), |c| c.to_string())
        )?;
        writeln!(
            f,
            "PDOF clock: {}",
            derived
                .pdof_clock
                .map_or_else(|| UNDETERMINED.to_string(), |c| format!("{} o'clock", c))
        )?;
        writeln!(f, "Separation angle: {}", degrees(derived.separation_angle))
    }
}
