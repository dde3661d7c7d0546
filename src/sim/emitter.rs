//! Shooter particle emitter
//!
//! Fixed-size pool sized once at construction. Spent particles are not
//! removed: they stay frozen where they died until the next burst rewrites
//! them.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// A point particle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec3,
    /// Displacement per reference frame
    pub vel: Vec3,
    /// Remaining life in reference frames
    pub life: f32,
}

impl Particle {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            pos: Vec3::ZERO,
            vel: Vec3::new(0.0, 10.0, 0.0),
            life: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleEmitter {
    particles: Vec<Particle>,
}

impl ParticleEmitter {
    /// Pool of `capacity` spent particles parked at the origin
    pub fn new(capacity: usize) -> Self {
        Self {
            particles: vec![Particle::default(); capacity],
        }
    }

    /// Integrate live particles; spent ones stay put
    pub fn advance(&mut self, frames: f32, tuning: &Tuning) {
        for p in self.particles.iter_mut().filter(|p| p.is_alive()) {
            p.pos += p.vel * frames;
            p.life -= tuning.shot_decay * frames;
        }
    }

    /// Rewrite the whole pool as a fresh upward burst from `origin`
    ///
    /// Called once per frame while the trigger is held, so particles travel
    /// for at most one frame before being re-emitted: a continuous stream
    /// rather than discrete rounds.
    pub fn emit_burst<R: Rng>(&mut self, origin: Vec3, rng: &mut R, tuning: &Tuning) {
        let start = origin + Vec3::new(0.0, tuning.emit_offset_y, 0.0);
        for p in &mut self.particles {
            p.pos = start;
            p.vel = Vec3::new(
                0.0,
                rng.random_range(tuning.shot_speed.min..tuning.shot_speed.max),
                0.0,
            );
            p.life = rng.random_range(tuning.shot_life.min..tuning.shot_life.max);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Pool size (fixed for the session)
    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    pub fn live_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_alive()).count()
    }
}
