//! Per-frame simulation step
//!
//! `Session` owns every pool and runs them in a fixed order once per
//! rendered frame:
//! spawn drain -> ship -> shooter burst/advance -> asteroid advance ->
//! collision -> game state -> explosions.

use glam::{Vec2, Vec3};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::asteroid::AsteroidField;
use super::collision::{self, CollisionReport, HitRadii};
use super::emitter::ParticleEmitter;
use super::explosion::{ExplosionId, ExplosionPool};
use super::ship::Ship;
use super::spawner::SpawnScheduler;
use super::state::{GameEvent, GamePhase, GameState};
use crate::error::SimError;
use crate::tuning::Tuning;
use crate::{clamp_frame_dt, consts::REFERENCE_DT, frames_for};

/// Input snapshot for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Pointer in normalized device coordinates, `None` when unavailable
    pub pointer: Option<Vec2>,
    /// Fire button held
    pub pointer_down: bool,
}

/// One game session, from first frame to game over
pub struct Session {
    pub seed: u64,
    pub state: GameState,
    pub ship: Ship,
    pub asteroids: AsteroidField,
    pub emitter: ParticleEmitter,
    pub explosions: ExplosionPool,
    tuning: Tuning,
    rng: Pcg32,
    scheduler: SpawnScheduler,
    /// Spawn firings waiting for the next step
    pending_spawns: u32,
    /// Host clock reading of the first step
    start_ms: Option<f64>,
    /// Session time of the previous step
    last_ms: f64,
    frame: u64,
    report: CollisionReport,
    events: Vec<GameEvent>,
    finished: Vec<ExplosionId>,
}

impl Session {
    /// Start a session; rejects tuning that fails `Tuning::validate`
    pub fn new(seed: u64, tuning: Tuning) -> Result<Self, SimError> {
        tuning.validate()?;
        Ok(Self::with_valid_tuning(seed, tuning))
    }

    fn with_valid_tuning(seed: u64, tuning: Tuning) -> Self {
        log::info!("Session starting with seed {seed}");
        Self {
            seed,
            state: GameState::new(tuning.starting_lives),
            ship: Ship::new(tuning.depth),
            asteroids: AsteroidField::new(),
            emitter: ParticleEmitter::new(tuning.shooter_capacity),
            explosions: ExplosionPool::new(),
            rng: Pcg32::seed_from_u64(seed),
            scheduler: SpawnScheduler::new(tuning.spawn_interval_ms, 0.0),
            pending_spawns: 0,
            start_ms: None,
            last_ms: 0.0,
            frame: 0,
            report: CollisionReport::default(),
            events: Vec::new(),
            finished: Vec::new(),
            tuning,
        }
    }

    /// Full reset: cancels every outstanding timer and starts over
    pub fn restart(&mut self, seed: u64) {
        self.shutdown();
        *self = Self::with_valid_tuning(seed, self.tuning.clone());
    }

    /// Cancel the spawn scheduler and pending ship re-shows
    pub fn shutdown(&mut self) {
        self.scheduler.cancel();
        self.state.cancel_timers();
        self.pending_spawns = 0;
    }

    /// Advance the session to host time `now_ms`
    ///
    /// Returns the lifecycle events produced by this frame.
    pub fn step(&mut self, now_ms: f64, input: &FrameInput) -> &[GameEvent] {
        self.events.clear();

        let start = *self.start_ms.get_or_insert(now_ms);
        let now = (now_ms - start).max(self.last_ms);
        let dt = if self.frame == 0 {
            REFERENCE_DT
        } else {
            clamp_frame_dt((now - self.last_ms) as f32 / 1000.0)
        };
        self.last_ms = now;
        self.frame += 1;
        let frames = frames_for(dt);

        // Only explosions still alive at game over keep running
        if self.state.phase == GamePhase::GameOver {
            self.advance_explosions(frames);
            return &self.events;
        }

        self.state.begin_frame(now, &mut self.events);

        self.pending_spawns += self.scheduler.poll(now);
        self.drain_spawns();

        self.ship.follow(input.pointer, &self.tuning);

        if input.pointer_down && self.state.ship_visible {
            self.emitter
                .emit_burst(self.ship.muzzle(), &mut self.rng, &self.tuning);
        }
        self.emitter.advance(frames, &self.tuning);

        self.asteroids
            .advance(frames, (now / 1000.0) as f32, &self.tuning);

        let ship = self.state.ship_visible.then_some(self.ship.pos);
        let radii = HitRadii {
            particle: self.tuning.particle_hit_distance(),
            ship: self.tuning.ship_hit_distance,
        };
        collision::detect(
            ship,
            self.emitter.particles(),
            self.asteroids.as_slice(),
            radii,
            &mut self.report,
        );

        let first_new = self.events.len();
        self.state.apply(
            &self.report,
            &mut self.asteroids,
            now,
            self.tuning.reshow_delay_ms,
            &mut self.events,
        );
        self.spawn_explosions(first_new);

        self.advance_explosions(frames);

        if self.state.phase != GamePhase::Playing {
            self.shutdown();
        }

        &self.events
    }

    fn advance_explosions(&mut self, frames: f32) {
        self.finished.clear();
        self.explosions
            .advance(frames, &self.tuning.explosion, &mut self.finished);
        for &id in &self.finished {
            log::debug!("Explosion {} finished", id.0);
            self.events.push(GameEvent::ExplosionFinished { id });
        }
    }

    fn drain_spawns(&mut self) {
        for _ in 0..std::mem::take(&mut self.pending_spawns) {
            let id = self.asteroids.spawn(&mut self.rng, &self.tuning);
            let pos = self.asteroids.get(id).map_or(Vec3::ZERO, |a| a.pos);
            log::debug!("Asteroid {id} spawned at {pos}");
            self.events.push(GameEvent::AsteroidSpawned { id, pos });
        }
    }

    /// Start an explosion for each destruction reported since `first_new`
    fn spawn_explosions(&mut self, first_new: usize) {
        let origins: Vec<Vec3> = self.events[first_new..]
            .iter()
            .filter_map(|e| match e {
                GameEvent::AsteroidDestroyed { pos, .. } => Some(*pos),
                _ => None,
            })
            .collect();

        for pos in origins {
            match self
                .explosions
                .create(pos, &self.tuning.explosion, &mut self.rng)
            {
                Ok(id) => self.events.push(GameEvent::ExplosionCreated { id, pos }),
                Err(e) => log::error!("Explosion skipped: {e}"),
            }
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Session time of the latest step (ms)
    pub fn elapsed_ms(&self) -> f64 {
        self.last_ms
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn is_spawning(&self) -> bool {
        self.scheduler.is_active()
    }

    /// Collisions found by the latest step
    pub fn last_report(&self) -> &CollisionReport {
        &self.report
    }
}
