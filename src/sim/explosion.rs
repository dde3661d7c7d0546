//! Explosion effect pool
//!
//! Each explosion is a short burst of particles that ages independently and
//! drops out of the pool once every particle has burned out.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::tuning::ExplosionProfile;

/// Unique explosion token, never reused within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ExplosionId(pub u32);

/// A debris particle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Debris {
    pub pos: Vec3,
    pub vel: Vec3,
    /// Remaining life in reference frames
    pub life: f32,
    /// Frames since the explosion started
    pub age: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub id: ExplosionId,
    pub origin: Vec3,
    pub particles: Vec<Debris>,
}

impl Explosion {
    /// True once every particle has burned out
    pub fn is_spent(&self) -> bool {
        self.particles.iter().all(|p| p.life <= 0.0)
    }

    fn advance(&mut self, frames: f32, profile: &ExplosionProfile) {
        for p in &mut self.particles {
            if p.life > 0.0 {
                p.life -= profile.decay * frames;
            }
            p.age += frames;

            if profile.gravity > 0.0 && p.age > profile.gravity_delay {
                let ramp = (p.age / profile.gravity_ramp).min(1.0);
                p.vel.y -= profile.gravity * ramp * frames;
            }

            p.pos += p.vel * frames;
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExplosionPool {
    explosions: Vec<Explosion>,
    next_id: u32,
}

impl ExplosionPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new explosion at `origin`
    pub fn create<R: Rng>(
        &mut self,
        origin: Vec3,
        profile: &ExplosionProfile,
        rng: &mut R,
    ) -> Result<ExplosionId, SimError> {
        if !origin.is_finite() {
            return Err(SimError::InvalidOrigin {
                x: origin.x,
                y: origin.y,
                z: origin.z,
            });
        }

        let id = ExplosionId(self.next_id);
        self.next_id += 1;

        let particles = (0..profile.particle_count)
            .map(|_| Debris {
                pos: origin,
                vel: Vec3::new(
                    (rng.random::<f32>() - 0.5) * 2.0 * profile.spread,
                    rng.random_range(profile.lift.min..profile.lift.max),
                    (rng.random::<f32>() - 0.5) * 2.0 * profile.spread,
                ),
                life: rng.random_range(profile.life.min..profile.life.max),
                age: 0.0,
            })
            .collect();

        self.explosions.push(Explosion {
            id,
            origin,
            particles,
        });
        Ok(id)
    }

    /// Age every explosion and drop the spent ones
    ///
    /// Ids of removed explosions are appended to `finished`, each exactly
    /// once.
    pub fn advance(&mut self, frames: f32, profile: &ExplosionProfile, finished: &mut Vec<ExplosionId>) {
        for explosion in &mut self.explosions {
            explosion.advance(frames, profile);
        }
        self.explosions.retain(|e| {
            if e.is_spent() {
                finished.push(e.id);
                false
            } else {
                true
            }
        });
    }

    pub fn get(&self, id: ExplosionId) -> Option<&Explosion> {
        self.explosions.iter().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Explosion> {
        self.explosions.iter()
    }

    pub fn len(&self) -> usize {
        self.explosions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.explosions.is_empty()
    }

    /// Drop every explosion without reporting them
    pub fn clear(&mut self) {
        self.explosions.clear();
    }
}
