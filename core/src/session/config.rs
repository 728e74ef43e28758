//! Tuning for the drawing interaction.

use serde::{Deserialize, Serialize};

fn default_live_tolerance() -> f64 {
    0.00005
}

fn default_final_tolerance() -> f64 {
    0.00002
}

fn default_auto_extend_threshold_m() -> f64 {
    5.0
}

fn default_min_path_points() -> usize {
    2
}

/// How strokes are cleaned up and when a drawn path is accepted.
///
/// Tolerances are in raw degrees because the simplifier works on planar
/// lat/lng deltas; they are tuned by eye, not derived from meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Simplification tolerance applied after every sample of an active stroke.
    #[serde(default = "default_live_tolerance")]
    pub live_tolerance: f64,

    /// Simplification tolerance applied once when the stroke ends.
    #[serde(default = "default_final_tolerance")]
    pub final_tolerance: f64,

    /// A separately drawn approach path ending further than this from the
    /// impact point (in meters) gets the impact point appended.
    #[serde(default = "default_auto_extend_threshold_m")]
    pub auto_extend_threshold_m: f64,

    /// Fewest points a committed path may have.
    #[serde(default = "default_min_path_points")]
    pub min_path_points: usize,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            live_tolerance: default_live_tolerance(),
            final_tolerance: default_final_tolerance(),
            auto_extend_threshold_m: default_auto_extend_threshold_m(),
            min_path_points: default_min_path_points(),
        }
    }
}
