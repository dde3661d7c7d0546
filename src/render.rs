//! Render handoff
//!
//! Buffers are allocated once and rewritten in place every frame, so the
//! rendering collaborator can hold on to them and upload the raw bytes.

use bytemuck::{Pod, Zeroable};

use crate::sim::{ExplosionId, Session};

/// A point sprite position
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct PointVertex {
    pub position: [f32; 3],
}

/// One asteroid instance; `visible` is 0 or 1
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct AsteroidInstance {
    pub position: [f32; 3],
    pub visible: u32,
}

/// Ship transform for the model renderer
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ShipTransform {
    pub position: [f32; 3],
    pub roll: f32,
    pub visible: u32,
    pub _pad: [u32; 3],
}

/// Slice of `RenderBuffers::debris` belonging to one explosion
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DebrisRange {
    pub id: ExplosionId,
    pub start: usize,
    pub len: usize,
}

/// UI-facing scalars
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Hud {
    pub score: u64,
    pub lives: u32,
    pub game_over: bool,
}

impl Hud {
    pub fn from_session(session: &Session) -> Self {
        Self {
            score: session.state.score,
            lives: session.state.lives,
            game_over: session.state.is_game_over(),
        }
    }
}

#[derive(Debug, Default)]
pub struct RenderBuffers {
    pub ship: ShipTransform,
    pub shots: Vec<PointVertex>,
    pub asteroids: Vec<AsteroidInstance>,
    pub debris: Vec<PointVertex>,
    pub debris_ranges: Vec<DebrisRange>,
    pub hud: Hud,
}

impl RenderBuffers {
    /// Buffers sized for a session's fixed shot pool
    pub fn new(shot_capacity: usize) -> Self {
        Self {
            shots: vec![PointVertex::default(); shot_capacity],
            ..Default::default()
        }
    }

    /// Copy the latest simulation state into the buffers
    pub fn sync(&mut self, session: &Session) {
        let ship = &session.ship;
        self.ship = ShipTransform {
            position: ship.pos.to_array(),
            roll: ship.roll,
            visible: session.state.ship_visible as u32,
            _pad: [0; 3],
        };

        let particles = session.emitter.particles();
        if self.shots.len() != particles.len() {
            self.shots.resize(particles.len(), PointVertex::default());
        }
        for (dst, p) in self.shots.iter_mut().zip(particles) {
            dst.position = p.pos.to_array();
        }

        self.asteroids.clear();
        self.asteroids
            .extend(session.asteroids.iter().map(|a| AsteroidInstance {
                position: a.pos.to_array(),
                visible: a.visible as u32,
            }));

        self.debris.clear();
        self.debris_ranges.clear();
        for explosion in session.explosions.iter() {
            let start = self.debris.len();
            self.debris.extend(explosion.particles.iter().map(|d| PointVertex {
                position: d.pos.to_array(),
            }));
            self.debris_ranges.push(DebrisRange {
                id: explosion.id,
                start,
                len: explosion.particles.len(),
            });
        }

        self.hud = Hud::from_session(session);
    }

    pub fn shot_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.shots)
    }

    pub fn asteroid_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.asteroids)
    }

    pub fn debris_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.debris)
    }

    /// Shot positions as a flat `[x, y, z, x, y, z, ...]` slice
    pub fn shot_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.shots)
    }

    pub fn debris_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.debris)
    }
}
