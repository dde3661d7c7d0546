//! Asteroid spawn scheduler
//!
//! Runs on session time rather than frames. Firings are only counted here;
//! the session turns them into asteroids at the start of its next step so
//! the field is never mutated mid-frame.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnScheduler {
    interval_ms: f64,
    /// Session time of the next firing, `None` once cancelled
    next_fire_ms: Option<f64>,
}

impl SpawnScheduler {
    /// First firing happens at `start_ms`
    pub fn new(interval_ms: f64, start_ms: f64) -> Self {
        Self {
            interval_ms,
            next_fire_ms: Some(start_ms),
        }
    }

    /// Number of firings due up to and including `now_ms`
    pub fn poll(&mut self, now_ms: f64) -> u32 {
        let Some(mut next) = self.next_fire_ms else {
            return 0;
        };

        if next > now_ms {
            return 0;
        }
        if !(self.interval_ms > 0.0) {
            log::warn!("Spawn interval {} ms is not positive, firing once", self.interval_ms);
            self.next_fire_ms = None;
            return 1;
        }

        let mut fired = 0;
        while next <= now_ms {
            fired += 1;
            next += self.interval_ms;
        }
        self.next_fire_ms = Some(next);
        fired
    }

    /// Stop firing for good
    pub fn cancel(&mut self) {
        if self.next_fire_ms.take().is_some() {
            log::debug!("Spawn scheduler cancelled");
        }
    }

    pub fn is_active(&self) -> bool {
        self.next_fire_ms.is_some()
    }

    pub fn next_fire_ms(&self) -> Option<f64> {
        self.next_fire_ms
    }
}
