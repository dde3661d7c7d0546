//! Game state machine
//!
//! Lives, score, ship visibility and the overall phase. Collision reports
//! come in, lifecycle events go out.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::asteroid::{AsteroidField, AsteroidId};
use super::collision::CollisionReport;
use super::explosion::ExplosionId;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Out of lives; only a full restart leaves this phase
    GameOver,
}

/// Lifecycle notifications for the render collaborator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    AsteroidSpawned { id: AsteroidId, pos: Vec3 },
    /// Shot down; an explosion is requested at `pos`
    AsteroidDestroyed { id: AsteroidId, pos: Vec3 },
    ShipHit { asteroid: AsteroidId, lives_left: u32 },
    ShipRestored,
    ExplosionCreated { id: ExplosionId, pos: Vec3 },
    /// Every particle burned out; release any render-side resources
    ExplosionFinished { id: ExplosionId },
    GameOver { score: u64 },
}

/// Session-wide scoreboard and ship status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub lives: u32,
    /// Asteroids destroyed this session
    pub score: u64,
    pub ship_visible: bool,
    pub phase: GamePhase,
    /// Expiry times (ms) of pending ship re-shows, one per hit
    ///
    /// Hits do not coalesce or cancel earlier re-shows: the earliest expiry
    /// brings the ship back even if a later hit happened in between.
    pending_reshow: Vec<f64>,
    /// Asteroids already destroyed this frame
    destroyed_this_frame: Vec<AsteroidId>,
}

impl GameState {
    pub fn new(lives: u32) -> Self {
        Self {
            lives,
            score: 0,
            ship_visible: true,
            phase: GamePhase::Playing,
            pending_reshow: Vec::new(),
            destroyed_this_frame: Vec::new(),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Start-of-frame housekeeping: forget last frame's destructions and
    /// bring the ship back if a re-show timer expired
    pub fn begin_frame(&mut self, now_ms: f64, events: &mut Vec<GameEvent>) {
        self.destroyed_this_frame.clear();

        let before = self.pending_reshow.len();
        self.pending_reshow.retain(|&expiry| expiry > now_ms);
        if self.pending_reshow.len() < before && !self.ship_visible {
            self.ship_visible = true;
            events.push(GameEvent::ShipRestored);
            log::debug!("Ship visible again");
        }
    }

    /// Apply this frame's collisions
    ///
    /// Shot hits collapse to one destruction per asteroid. Every ship hit
    /// costs a life, so several asteroids touching the ship in the same frame
    /// cost several lives.
    pub fn apply(
        &mut self,
        report: &CollisionReport,
        asteroids: &mut AsteroidField,
        now_ms: f64,
        reshow_delay_ms: f64,
        events: &mut Vec<GameEvent>,
    ) {
        if self.is_game_over() {
            return;
        }

        for hit in &report.particle_hits {
            if self.destroyed_this_frame.contains(&hit.asteroid) {
                continue;
            }
            let Some(pos) = asteroids.get(hit.asteroid).map(|a| a.pos) else {
                log::warn!("Shot hit unknown asteroid {}", hit.asteroid);
                continue;
            };
            self.destroyed_this_frame.push(hit.asteroid);
            hide(asteroids, hit.asteroid);
            self.score += 1;
            events.push(GameEvent::AsteroidDestroyed { id: hit.asteroid, pos });
            log::debug!("Asteroid {} destroyed, score {}", hit.asteroid, self.score);
        }

        for &asteroid in &report.ship_hits {
            self.lives = self.lives.saturating_sub(1);
            self.ship_visible = false;
            self.pending_reshow.push(now_ms + reshow_delay_ms);
            hide(asteroids, asteroid);
            events.push(GameEvent::ShipHit {
                asteroid,
                lives_left: self.lives,
            });
            log::info!("Ship hit by asteroid {}, {} lives left", asteroid, self.lives);
        }

        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            self.pending_reshow.clear();
            events.push(GameEvent::GameOver { score: self.score });
            log::info!("Game over, final score {}", self.score);
        }
    }

    /// Drop every outstanding re-show timer
    pub fn cancel_timers(&mut self) {
        self.pending_reshow.clear();
    }

    pub fn pending_reshows(&self) -> usize {
        self.pending_reshow.len()
    }
}

fn hide(asteroids: &mut AsteroidField, id: AsteroidId) {
    if let Err(e) = asteroids.set_visible(id, false) {
        log::warn!("Ignoring visibility toggle: {e}");
    }
}
