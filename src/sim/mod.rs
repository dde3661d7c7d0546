//! Frame-driven simulation module
//!
//! All gameplay logic lives here:
//! - Single-threaded, one step per rendered frame
//! - Seeded RNG only
//! - Stable iteration order (by asteroid id)
//! - No rendering or platform dependencies

pub mod asteroid;
pub mod collision;
pub mod emitter;
pub mod explosion;
pub mod ship;
pub mod spawner;
pub mod state;
pub mod tick;

pub use asteroid::{Asteroid, AsteroidField, AsteroidId};
pub use collision::{CollisionReport, HitRadii, ParticleHit, detect};
pub use emitter::{Particle, ParticleEmitter};
pub use explosion::{Debris, Explosion, ExplosionId, ExplosionPool};
pub use ship::Ship;
pub use spawner::SpawnScheduler;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{FrameInput, Session};
