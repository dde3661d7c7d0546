//! Astro Burst - An asteroid shooter simulation kernel
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (asteroids, particles, explosions, game state)
//! - `tuning`: Data-driven game balance
//! - `render`: Pre-allocated buffers handed to the rendering collaborator
//! - `error`: Simulation error taxonomy

pub mod error;
pub mod render;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use error::SimError;
pub use render::{Hud, RenderBuffers};
pub use tuning::{ExplosionProfile, Tuning};

/// Game configuration constants
pub mod consts {
    /// Rate at which per-frame tuning values are expressed
    pub const REFERENCE_FPS: f32 = 60.0;
    /// Duration of one reference frame in seconds
    pub const REFERENCE_DT: f32 = 1.0 / REFERENCE_FPS;
    /// Largest frame delta accepted before clamping (tab switches, debugger stalls)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Playfield depth shared by the ship and every asteroid
    pub const PLAYFIELD_DEPTH: f32 = -10.0;

    /// Asteroid spawn band and loop bounds
    pub const ASTEROID_SPAWN_X_MIN: f32 = -5.0;
    pub const ASTEROID_SPAWN_X_MAX: f32 = 10.0;
    pub const ASTEROID_SPAWN_HEIGHT: f32 = 15.0;
    pub const ASTEROID_LOWER_BOUND: f32 = -12.0;
    /// Fall speed per frame at session start
    pub const ASTEROID_BASE_SPEED: f32 = 0.05;
    /// Extra fall speed per frame for every elapsed second
    pub const ASTEROID_SPEED_RAMP: f32 = 0.0002;

    /// Collision radii
    pub const ASTEROID_RADIUS: f32 = 0.5;
    pub const PARTICLE_RADIUS: f32 = 0.1;
    pub const SHIP_HIT_DISTANCE: f32 = 1.4;

    /// Shooter particle pool
    pub const SHOOTER_CAPACITY: usize = 1000;
    pub const SHOOTER_EMIT_OFFSET_Y: f32 = -1.0;

    /// Ship follow model
    pub const SHIP_FOLLOW_SCALE: f32 = 13.0;
    pub const SHIP_DRAG: f32 = 0.02;

    /// Timers (milliseconds of session time)
    pub const SPAWN_INTERVAL_MS: f64 = 2000.0;
    pub const SHIP_RESHOW_DELAY_MS: f64 = 1000.0;

    pub const STARTING_LIVES: u32 = 3;
}

/// Convert a frame delta in seconds to reference frames
#[inline]
pub fn frames_for(dt: f32) -> f32 {
    dt * consts::REFERENCE_FPS
}

/// Clamp a raw frame delta into the range the simulation accepts
#[inline]
pub fn clamp_frame_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt >= 0.0 {
        dt.min(consts::MAX_FRAME_DT)
    } else {
        consts::REFERENCE_DT
    }
}
