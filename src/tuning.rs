//! Game balance values
//!
//! Every constant the kernel consumes lives here so a host page can tweak
//! the feel of a session by handing over a JSON blob.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;

/// Half-open random range `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }
}

/// Shape of a destruction burst
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplosionProfile {
    /// Particles per explosion
    pub particle_count: usize,
    /// Horizontal/depth velocity spread per frame (symmetric around zero)
    pub spread: f32,
    /// Upward velocity per frame
    pub lift: Range,
    /// Lifespan in frames
    pub life: Range,
    /// Life lost per frame
    pub decay: f32,
    /// Downward acceleration per frame at full strength (0 disables gravity)
    pub gravity: f32,
    /// Frames of age before gravity kicks in
    pub gravity_delay: f32,
    /// Age in frames at which gravity reaches full strength
    pub gravity_ramp: f32,
}

impl ExplosionProfile {
    /// Heavy debris cloud that sags under gravity
    pub fn debris() -> Self {
        Self {
            particle_count: 500,
            spread: 1.0,
            lift: Range::new(0.0, 2.0),
            life: Range::new(10.0, 30.0),
            decay: 0.3,
            gravity: 0.05,
            gravity_delay: 60.0,
            gravity_ramp: 180.0,
        }
    }

    /// Light, long-lived spark shower with no gravity
    pub fn sparks() -> Self {
        Self {
            particle_count: 50,
            spread: 1.0,
            lift: Range::new(0.0, 2.0),
            life: Range::new(60.0, 120.0),
            decay: 1.0,
            gravity: 0.0,
            gravity_delay: 0.0,
            gravity_ramp: 1.0,
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "debris" => Some(Self::debris()),
            "sparks" | "spark" => Some(Self::sparks()),
            _ => None,
        }
    }
}

impl Default for ExplosionProfile {
    fn default() -> Self {
        Self::debris()
    }
}

/// Complete balance sheet for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Asteroids ===
    pub spawn_x: Range,
    pub spawn_height: f32,
    pub lower_bound: f32,
    pub depth: f32,
    pub base_speed: f32,
    pub speed_ramp: f32,
    pub asteroid_radius: f32,

    // === Shooter ===
    pub shooter_capacity: usize,
    pub emit_offset_y: f32,
    pub shot_speed: Range,
    pub shot_life: Range,
    pub shot_decay: f32,
    pub particle_radius: f32,

    // === Ship ===
    pub follow_scale: f32,
    pub drag: f32,
    pub ship_hit_distance: f32,
    pub reshow_delay_ms: f64,
    pub starting_lives: u32,

    // === Pacing ===
    pub spawn_interval_ms: f64,

    // === Effects ===
    pub explosion: ExplosionProfile,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spawn_x: Range::new(ASTEROID_SPAWN_X_MIN, ASTEROID_SPAWN_X_MAX),
            spawn_height: ASTEROID_SPAWN_HEIGHT,
            lower_bound: ASTEROID_LOWER_BOUND,
            depth: PLAYFIELD_DEPTH,
            base_speed: ASTEROID_BASE_SPEED,
            speed_ramp: ASTEROID_SPEED_RAMP,
            asteroid_radius: ASTEROID_RADIUS,

            shooter_capacity: SHOOTER_CAPACITY,
            emit_offset_y: SHOOTER_EMIT_OFFSET_Y,
            shot_speed: Range::new(3.0, 33.0),
            shot_life: Range::new(60.0, 90.0),
            shot_decay: 1.0,
            particle_radius: PARTICLE_RADIUS,

            follow_scale: SHIP_FOLLOW_SCALE,
            drag: SHIP_DRAG,
            ship_hit_distance: SHIP_HIT_DISTANCE,
            reshow_delay_ms: SHIP_RESHOW_DELAY_MS,
            starting_lives: STARTING_LIVES,

            spawn_interval_ms: SPAWN_INTERVAL_MS,

            explosion: ExplosionProfile::debris(),
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning blob; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Particle-asteroid hit distance
    #[inline]
    pub fn particle_hit_distance(&self) -> f32 {
        self.asteroid_radius + self.particle_radius
    }

    pub fn validate(&self) -> Result<(), SimError> {
        let fail = |msg: &str| Err(SimError::InvalidTuning(msg.to_string()));

        if self.starting_lives == 0 {
            return fail("starting_lives must be at least 1");
        }
        if self.shooter_capacity == 0 {
            return fail("shooter_capacity must be at least 1");
        }
        if !(self.asteroid_radius > 0.0 && self.particle_radius > 0.0) {
            return fail("collision radii must be positive");
        }
        if !(self.ship_hit_distance > 0.0) {
            return fail("ship_hit_distance must be positive");
        }
        if !(self.lower_bound < self.spawn_height) {
            return fail("lower_bound must sit below spawn_height");
        }
        for (name, range) in [
            ("spawn_x", self.spawn_x),
            ("shot_speed", self.shot_speed),
            ("shot_life", self.shot_life),
            ("explosion.lift", self.explosion.lift),
            ("explosion.life", self.explosion.life),
        ] {
            if !range.is_valid() {
                return Err(SimError::InvalidTuning(format!("{name} is an empty range")));
            }
        }
        if !(self.shot_decay > 0.0 && self.explosion.decay > 0.0) {
            return fail("life decay must be positive");
        }
        if !(self.explosion.gravity_ramp > 0.0) {
            return fail("explosion.gravity_ramp must be positive");
        }
        if !(self.spawn_interval_ms > 0.0) {
            return fail("spawn_interval_ms must be positive");
        }
        if !(self.reshow_delay_ms >= 0.0) {
            return fail("reshow_delay_ms must not be negative");
        }
        Ok(())
    }
}
