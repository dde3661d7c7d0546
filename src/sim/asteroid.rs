//! Asteroid field
//!
//! Append-only: an asteroid keeps its slot for the whole session. Destroyed
//! asteroids stay in the list with `visible == false` and keep looping.

use std::fmt;

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::tuning::Tuning;

/// Stable index of an asteroid, assigned at spawn and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AsteroidId(pub u32);

impl AsteroidId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AsteroidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An asteroid entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub id: AsteroidId,
    pub pos: Vec3,
    pub visible: bool,
}

/// Ordered asteroid collection, indexed by `AsteroidId`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AsteroidField {
    asteroids: Vec<Asteroid>,
}

impl AsteroidField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a visible asteroid at a random point of the spawn band
    pub fn spawn<R: Rng>(&mut self, rng: &mut R, tuning: &Tuning) -> AsteroidId {
        let x = rng.random_range(tuning.spawn_x.min..tuning.spawn_x.max);
        self.spawn_at(Vec3::new(x, tuning.spawn_height, tuning.depth))
    }

    /// Append a visible asteroid at an exact position
    pub fn spawn_at(&mut self, pos: Vec3) -> AsteroidId {
        let id = AsteroidId(self.asteroids.len() as u32);
        self.asteroids.push(Asteroid { id, pos, visible: true });
        id
    }

    /// Move every asteroid down, hidden ones included; loop anything below
    /// the lower bound back to the spawn height with its visibility intact
    ///
    /// `elapsed_secs` is session time, so the fall speed keeps growing for as
    /// long as the session runs.
    pub fn advance(&mut self, frames: f32, elapsed_secs: f32, tuning: &Tuning) {
        let speed = tuning.base_speed + tuning.speed_ramp * elapsed_secs;
        for asteroid in &mut self.asteroids {
            asteroid.pos.y -= speed * frames;
            if asteroid.pos.y < tuning.lower_bound {
                asteroid.pos.y = tuning.spawn_height;
            }
        }
    }

    /// Toggle visibility of a spawned asteroid
    ///
    /// An unknown id is a caller bug: it trips a debug assertion in debug
    /// builds and is reported as an error otherwise.
    pub fn set_visible(&mut self, id: AsteroidId, visible: bool) -> Result<(), SimError> {
        debug_assert!(
            id.index() < self.asteroids.len(),
            "unknown asteroid {id} (field holds {})",
            self.asteroids.len()
        );
        let asteroid = self
            .asteroids
            .get_mut(id.index())
            .ok_or(SimError::UnknownAsteroid(id))?;
        asteroid.visible = visible;
        Ok(())
    }

    pub fn get(&self, id: AsteroidId) -> Option<&Asteroid> {
        self.asteroids.get(id.index())
    }

    pub fn get_mut(&mut self, id: AsteroidId) -> Option<&mut Asteroid> {
        self.asteroids.get_mut(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Asteroid> {
        self.asteroids.iter()
    }

    /// Asteroids that take part in collisions and rendering
    pub fn visible(&self) -> impl Iterator<Item = &Asteroid> {
        self.asteroids.iter().filter(|a| a.visible)
    }

    pub fn as_slice(&self) -> &[Asteroid] {
        &self.asteroids
    }

    pub fn len(&self) -> usize {
        self.asteroids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.asteroids.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }
}
