//! Simulation error taxonomy
//!
//! Nothing here ever escapes a frame step: the session logs the error and
//! skips the offending entity for that frame.

use crate::sim::AsteroidId;

#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// Explosion requested at a non-finite position
    #[error("invalid explosion origin: ({x}, {y}, {z})")]
    InvalidOrigin { x: f32, y: f32, z: f32 },

    /// Visibility toggle for an id that was never spawned
    #[error("unknown asteroid {0}")]
    UnknownAsteroid(AsteroidId),

    /// Tuning values that would break an invariant
    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("tuning parse error: {0}")]
    Json(#[from] serde_json::Error),
}
