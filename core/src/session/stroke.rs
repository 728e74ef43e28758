//! In-progress freehand gesture.
//!
//! The drawing surface pushes raw samples while the pointer moves and gets a
//! loosely simplified path back for display after each one. When the gesture
//! ends the raw samples are simplified again at the tighter final tolerance
//! and that is the path that gets committed.

use super::config::DrawingConfig;
use super::state::SessionError;
use crate::geo::{GeoPoint, Path};
use crate::path::simplify;
use tracing::trace;

#[derive(Debug, Clone)]
pub struct StrokeRecorder {
    live_tolerance: f64,
    final_tolerance: f64,
    samples: Vec<GeoPoint>,
    /// Leading samples placed by `begin` rather than drawn.
    seed_len: usize,
    active: bool,
}

impl StrokeRecorder {
    pub fn new(config: &DrawingConfig) -> Self {
        Self {
            live_tolerance: config.live_tolerance,
            final_tolerance: config.final_tolerance,
            samples: Vec::new(),
            seed_len: 0,
            active: false,
        }
    }

    /// Starts a new stroke, discarding any unfinished one. Departure strokes
    /// are seeded with the impact point so they start where the collision
    /// happened.
    pub fn begin(&mut self, seed: Option<GeoPoint>) {
        self.samples.clear();
        self.samples.extend(seed);
        self.seed_len = self.samples.len();
        self.active = true;
        trace!(seeded = seed.is_some(), "stroke started");
    }

    /// Records a sample and returns the live path for display. A sample
    /// arriving with no active stroke starts one.
    pub fn push(&mut self, sample: GeoPoint) -> Path {
        if !self.active {
            self.begin(None);
        }
        self.samples.push(sample);
        let live = self.live_path();
        trace!(samples = self.samples.len(), live = live.len(), "stroke sample");
        live
    }

    /// Drops the most recent drawn sample. The seed is never removed.
    pub fn undo(&mut self) -> Option<GeoPoint> {
        if self.samples.len() <= self.seed_len {
            return None;
        }
        self.samples.pop()
    }

    /// Clears the drawn samples but keeps the seed and the stroke active.
    pub fn reset(&mut self) {
        self.samples.truncate(self.seed_len);
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn samples(&self) -> &[GeoPoint] {
        &self.samples
    }

    pub fn live_path(&self) -> Path {
        simplify(&self.samples, self.live_tolerance)
    }

    /// Ends the stroke and returns the path to commit.
    pub fn finish(&mut self) -> Result<Path, SessionError> {
        if !self.active {
            return Err(SessionError::NoActiveStroke);
        }
        self.active = false;
        self.seed_len = 0;
        let samples = std::mem::take(&mut self.samples);
        let path = simplify(&samples, self.final_tolerance);
        trace!(samples = samples.len(), kept = path.len(), "stroke finished");
        Ok(path)
    }
}
