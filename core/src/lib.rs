pub mod geo;
pub mod path;
pub mod classify;
pub mod session;

pub use classify::{classify, to_clock_approximation, CollisionClassification, CollisionGeometry, PdofClock};
pub use geo::{approach_angle, bearing, distance, GeoPoint, Path};
pub use path::{simplify, snap_to_path, split_at_impact, SplitResult};
pub use session::{DerivedData, DrawingConfig, ReconstructionSession, SessionError};

pub fn version() -> &'static str {
    "0.1.0"
}
