//! Recorded wizard input, replayed against a fresh session.

use anyhow::{Context, Result};
use collision_core::geo::GeoPoint;
use collision_core::session::{
    CollisionEntityType, DrawingConfig, MovementType, ParticipantRole, ReconstructionSession,
    SessionError, SessionId, SpeedTrend, StrokeRecorder,
};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    /// Seed for a reproducible session id. A random id is used otherwise.
    #[serde(default)]
    pub seed: Option<String>,
    pub other: CollisionEntityType,
    #[serde(default)]
    pub events: Vec<Event>,
}

/// How a stroke relates to the impact point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrokeMode {
    /// One path through the impact, split there.
    #[default]
    Through,
    /// Drawn up to the impact.
    Approach,
    /// Drawn away from the impact; the stroke starts at it.
    Departure,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    Impact {
        at: GeoPoint,
    },
    ClearImpact,
    Stroke {
        role: ParticipantRole,
        #[serde(default)]
        mode: StrokeMode,
        samples: Vec<GeoPoint>,
    },
    Rest {
        role: ParticipantRole,
        at: GeoPoint,
    },
    ClearRest {
        role: ParticipantRole,
    },
    EntityPosition {
        at: Option<GeoPoint>,
    },
    EntityDetails {
        #[serde(default)]
        sub_type: Option<String>,
        #[serde(default)]
        description: String,
    },
    Movement {
        role: ParticipantRole,
        movement: MovementType,
        #[serde(default)]
        speed_mph: Option<u32>,
    },
    Trend {
        role: ParticipantRole,
        trend: SpeedTrend,
    },
}

pub struct Replay {
    pub session: ReconstructionSession,
    /// Events the session refused, in order.
    pub rejected: Vec<(usize, SessionError)>,
}

impl Script {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("Invalid script {}", path.display()))
    }

    pub fn replay(&self, config: &DrawingConfig) -> Replay {
        let id = match &self.seed {
            Some(seed) => SessionId::new_deterministic(seed),
            None => SessionId::new(),
        };
        let mut session = ReconstructionSession::with_id(id, self.other, config.clone());
        let mut recorder = StrokeRecorder::new(config);
        let mut rejected = Vec::new();

        for (index, event) in self.events.iter().enumerate() {
            info!(index, ?event, "replaying event");
            if let Err(e) = apply(&mut session, &mut recorder, event) {
                warn!(index, error = %e, "event rejected");
                rejected.push((index, e));
            }
        }

        info!(session = %session.id(), phase = ?session.phase(), "replay finished");
        Replay { session, rejected }
    }
}

fn apply(
    session: &mut ReconstructionSession,
    recorder: &mut StrokeRecorder,
    event: &Event,
) -> Result<(), SessionError> {
    match event {
        Event::Impact { at } => session.place_impact(*at),
        Event::ClearImpact => session.clear_impact(),
        Event::Stroke { role, mode, samples } => {
            let seed = match mode {
                StrokeMode::Departure => session.impact(),
                StrokeMode::Through | StrokeMode::Approach => None,
            };
            recorder.begin(seed);
            for sample in samples {
                recorder.push(*sample);
            }
            let path = recorder.finish()?;
            match mode {
                StrokeMode::Through => session.commit_drawn_path(*role, path)?,
                StrokeMode::Approach => session.commit_approach_path(*role, path)?,
                StrokeMode::Departure => session.commit_departure_path(*role, path)?,
            }
        }
        Event::Rest { role, at } => session.place_rest_position(*role, *at)?,
        Event::ClearRest { role } => session.clear_rest_position(*role)?,
        Event::EntityPosition { at } => session.place_other_entity(*at)?,
        Event::EntityDetails { sub_type, description } => {
            session.describe_other_entity(sub_type.clone(), description.clone())?
        }
        Event::Movement { role, movement, speed_mph } => {
            session.set_movement(*role, *movement, *speed_mph)?
        }
        Event::Trend { role, trend } => session.set_speed_trend(*role, *trend)?,
    }
    Ok(())
}
