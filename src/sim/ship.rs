//! The player's ship
//!
//! Chases the pointer with a damped spring: the velocity picks up the gap to
//! the target and is then scaled down by the drag coefficient every frame.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec3,
    pub vel: Vec3,
    /// Last point the ship was steered toward
    pub target: Vec3,
    /// Roll around the vertical axis (radians), follows the pointer's x
    pub roll: f32,
}

impl Ship {
    pub fn new(depth: f32) -> Self {
        let start = Vec3::new(0.0, 0.0, depth);
        Self {
            pos: start,
            vel: Vec3::ZERO,
            target: start,
            roll: 0.0,
        }
    }

    /// Steer toward the pointer and integrate one frame
    ///
    /// `pointer` is in normalized device coordinates (`[-1, 1]` on both
    /// axes). `None` keeps the previous target.
    pub fn follow(&mut self, pointer: Option<Vec2>, tuning: &Tuning) {
        if let Some(p) = pointer.filter(|p| p.is_finite()) {
            let p = p.clamp(Vec2::NEG_ONE, Vec2::ONE);
            self.target = Vec3::new(p.x * tuning.follow_scale, p.y * tuning.follow_scale, tuning.depth);
            self.roll = p.x * std::f32::consts::FRAC_PI_2;
        }

        self.vel = (self.vel + (self.target - self.pos)) * tuning.drag;
        self.pos += self.vel;
    }

    /// Where shots leave the hull
    pub fn muzzle(&self) -> Vec3 {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_step_matches_spring() {
        let tuning = Tuning::default();
        let mut ship = Ship::new(tuning.depth);
        ship.follow(Some(Vec2::new(1.0, 0.0)), &tuning);

        // vel = (0 + (13 - 0)) * 0.02
        assert!((ship.vel.x - 0.26).abs() < 1e-6);
        assert!((ship.pos.x - 0.26).abs() < 1e-6);
        assert_eq!(ship.pos.z, tuning.depth);
        assert!((ship.roll - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_converges_on_target() {
        let tuning = Tuning::default();
        let mut ship = Ship::new(tuning.depth);
        for _ in 0..2000 {
            ship.follow(Some(Vec2::new(-0.5, 0.5)), &tuning);
        }
        assert!((ship.pos.x + 6.5).abs() < 0.01);
        assert!((ship.pos.y - 6.5).abs() < 0.01);
    }

    #[test]
    fn test_missing_pointer_holds_target() {
        let tuning = Tuning::default();
        let mut ship = Ship::new(tuning.depth);
        ship.follow(Some(Vec2::new(0.2, 0.2)), &tuning);
        let target = ship.target;

        ship.follow(None, &tuning);
        ship.follow(Some(Vec2::new(f32::NAN, 0.0)), &tuning);
        assert_eq!(ship.target, target);
    }

    #[test]
    fn test_pointer_is_clamped() {
        let tuning = Tuning::default();
        let mut ship = Ship::new(tuning.depth);
        ship.follow(Some(Vec2::new(4.0, -9.0)), &tuning);
        assert_eq!(ship.target, Vec3::new(13.0, -13.0, tuning.depth));
    }
}
