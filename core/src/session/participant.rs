//! The two parties to a collision.
//!
//! The other party is either another vehicle, which has paths and can be
//! classified against ours, or a fixed/animate entity which only has a
//! position. Keeping that as an enum means the classifier simply has no
//! vehicle to read from in the second case.

use crate::geo::{GeoPoint, Path};
use crate::path::{anchor_at_impact, extend_to_impact, split_at_impact};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantRole {
    Own,
    Other,
}

/// What the witness says they collided with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionEntityType {
    Vehicle,
    Object,
    Animal,
    Property,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtherEntityKind {
    Object,
    Animal,
    Property,
}

impl OtherEntityKind {
    pub fn default_label(&self) -> &'static str {
        match self {
            Self::Object => "Object",
            Self::Animal => "Animal",
            Self::Property => "Property",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    Forward,
    Reverse,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedTrend {
    Accelerating,
    Decelerating,
    Constant,
    Unknown,
}

/// How the approach side of a track was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApproachDrawing {
    /// One stroke through the impact, split there.
    Through,
    /// A stroke up to the impact only.
    Approach,
}

/// Everything recorded about one vehicle.
///
/// `drawn` and `departure_drawn` hold the strokes exactly as committed.
/// `pre_impact` and `post_impact` are rebuilt from them by
/// [`anchor_to`](Self::anchor_to) whenever the impact point changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleTrack {
    pub label: String,
    /// The through or approach stroke as committed, before any split or
    /// extension.
    pub drawn: Path,
    pub drawn_as: Option<ApproachDrawing>,
    /// The departure stroke as committed, before anchoring.
    pub departure_drawn: Path,
    pub pre_impact: Path,
    pub post_impact: Path,
    pub rest_position: Option<GeoPoint>,
    pub movement: Option<MovementType>,
    /// Witness estimate in mph. `None` when stopped or unknown.
    pub speed_estimate_mph: Option<u32>,
    pub speed_trend: Option<SpeedTrend>,
}

impl VehicleTrack {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            ..Default::default()
        }
    }

    pub fn has_approach(&self) -> bool {
        !self.pre_impact.is_empty()
    }

    /// Rebuilds the pre- and post-impact paths from the committed strokes.
    /// Without an impact point there is nothing to anchor to and both are
    /// emptied; the strokes themselves are kept.
    pub fn anchor_to(&mut self, impact: Option<GeoPoint>, auto_extend_threshold_m: f64) {
        let Some(impact) = impact else {
            self.pre_impact.clear();
            self.post_impact.clear();
            return;
        };

        let (pre, split_post) = match self.drawn_as {
            Some(ApproachDrawing::Through) => {
                let split = split_at_impact(&self.drawn, impact);
                (split.pre, split.post)
            }
            Some(ApproachDrawing::Approach) => (
                extend_to_impact(&self.drawn, impact, auto_extend_threshold_m),
                Vec::new(),
            ),
            None => (Vec::new(), Vec::new()),
        };

        self.pre_impact = pre;
        self.post_impact = if self.departure_drawn.is_empty() {
            split_post
        } else {
            anchor_at_impact(&self.departure_drawn, impact)
        };
    }
}

/// A non-vehicle the witness collided with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherEntity {
    pub kind: OtherEntityKind,
    /// Free-form refinement such as "deer" or "guardrail".
    pub sub_type: Option<String>,
    pub label: String,
    pub position: Option<GeoPoint>,
    pub description: String,
}

impl OtherEntity {
    pub fn new(kind: OtherEntityKind) -> Self {
        Self {
            kind,
            sub_type: None,
            label: kind.default_label().to_string(),
            position: None,
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Participant {
    Vehicle(VehicleTrack),
    NonVehicle(OtherEntity),
}

impl Participant {
    pub fn new(entity_type: CollisionEntityType) -> Self {
        match entity_type {
            CollisionEntityType::Vehicle => Self::Vehicle(VehicleTrack::new("Other vehicle")),
            CollisionEntityType::Object => Self::NonVehicle(OtherEntity::new(OtherEntityKind::Object)),
            CollisionEntityType::Animal => Self::NonVehicle(OtherEntity::new(OtherEntityKind::Animal)),
            CollisionEntityType::Property => {
                Self::NonVehicle(OtherEntity::new(OtherEntityKind::Property))
            }
        }
    }

    pub fn entity_type(&self) -> CollisionEntityType {
        match self {
            Self::Vehicle(_) => CollisionEntityType::Vehicle,
            Self::NonVehicle(entity) => match entity.kind {
                OtherEntityKind::Object => CollisionEntityType::Object,
                OtherEntityKind::Animal => CollisionEntityType::Animal,
                OtherEntityKind::Property => CollisionEntityType::Property,
            },
        }
    }

    pub fn as_vehicle(&self) -> Option<&VehicleTrack> {
        match self {
            Self::Vehicle(track) => Some(track),
            Self::NonVehicle(_) => None,
        }
    }

    pub fn as_vehicle_mut(&mut self) -> Option<&mut VehicleTrack> {
        match self {
            Self::Vehicle(track) => Some(track),
            Self::NonVehicle(_) => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Vehicle(track) => &track.label,
            Self::NonVehicle(entity) => &entity.label,
        }
    }
}
