//! Collision detection between shots, the ship and asteroids
//!
//! Everything is a sphere: a hit is a center distance strictly below the
//! sum of radii. Only visible asteroids take part.

use glam::Vec3;

use super::asteroid::{Asteroid, AsteroidId};
use super::emitter::Particle;

/// A shot touching an asteroid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticleHit {
    pub particle: usize,
    pub asteroid: AsteroidId,
}

/// Everything that touched this frame
///
/// `particle_hits` may name the same asteroid several times; the game state
/// collapses those into one destruction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    pub particle_hits: Vec<ParticleHit>,
    pub ship_hits: Vec<AsteroidId>,
}

impl CollisionReport {
    pub fn is_empty(&self) -> bool {
        self.particle_hits.is_empty() && self.ship_hits.is_empty()
    }

    pub fn clear(&mut self) {
        self.particle_hits.clear();
        self.ship_hits.clear();
    }
}

/// Hit distances for one frame
#[derive(Debug, Clone, Copy)]
pub struct HitRadii {
    /// Asteroid radius plus particle radius
    pub particle: f32,
    /// Ship center to asteroid center
    pub ship: f32,
}

/// Sphere overlap test
#[inline]
pub fn within(a: Vec3, b: Vec3, distance: f32) -> bool {
    a.distance(b) < distance
}

/// Test every live particle and the ship against every visible asteroid
///
/// `ship` is `None` while the ship is hidden. Asteroids or particles with
/// non-finite positions are skipped for this frame.
pub fn detect(
    ship: Option<Vec3>,
    particles: &[Particle],
    asteroids: &[Asteroid],
    radii: HitRadii,
    report: &mut CollisionReport,
) {
    report.clear();

    for asteroid in asteroids.iter().filter(|a| a.visible) {
        if !asteroid.pos.is_finite() {
            log::warn!("Skipping asteroid {} with bad position {:?}", asteroid.id, asteroid.pos);
            continue;
        }

        for (index, particle) in particles.iter().enumerate() {
            if !particle.is_alive() || !particle.pos.is_finite() {
                continue;
            }
            if within(particle.pos, asteroid.pos, radii.particle) {
                report.particle_hits.push(ParticleHit {
                    particle: index,
                    asteroid: asteroid.id,
                });
            }
        }

        if let Some(ship_pos) = ship
            && within(ship_pos, asteroid.pos, radii.ship)
        {
            report.ship_hits.push(asteroid.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RADII: HitRadii = HitRadii {
        particle: 0.6,
        ship: 1.4,
    };

    fn asteroid(id: u32, pos: Vec3, visible: bool) -> Asteroid {
        Asteroid {
            id: AsteroidId(id),
            pos,
            visible,
        }
    }

    fn shot(pos: Vec3) -> Particle {
        Particle {
            pos,
            vel: Vec3::Y,
            life: 10.0,
        }
    }

    #[test]
    fn test_particle_hit_threshold() {
        let rocks = [asteroid(0, Vec3::ZERO, true)];
        let mut report = CollisionReport::default();

        detect(None, &[shot(Vec3::new(0.59, 0.0, 0.0))], &rocks, RADII, &mut report);
        assert_eq!(
            report.particle_hits,
            vec![ParticleHit {
                particle: 0,
                asteroid: AsteroidId(0)
            }]
        );

        detect(None, &[shot(Vec3::new(0.61, 0.0, 0.0))], &rocks, RADII, &mut report);
        assert!(report.particle_hits.is_empty());
    }

    #[test]
    fn test_invisible_asteroids_ignored() {
        let rocks = [asteroid(0, Vec3::ZERO, false)];
        let mut report = CollisionReport::default();
        detect(Some(Vec3::ZERO), &[shot(Vec3::ZERO)], &rocks, RADII, &mut report);
        assert!(report.is_empty());
    }

    #[test]
    fn test_spent_particles_do_not_hit() {
        let rocks = [asteroid(0, Vec3::ZERO, true)];
        let mut spent = shot(Vec3::ZERO);
        spent.life = 0.0;
        let mut report = CollisionReport::default();
        detect(None, &[spent], &rocks, RADII, &mut report);
        assert!(report.particle_hits.is_empty());
    }

    #[test]
    fn test_many_particles_on_one_asteroid_all_reported() {
        let rocks = [asteroid(4, Vec3::ZERO, true)];
        let shots = [
            shot(Vec3::new(0.1, 0.0, 0.0)),
            shot(Vec3::new(0.0, 0.2, 0.0)),
            shot(Vec3::new(0.0, 0.0, 0.3)),
        ];
        let mut report = CollisionReport::default();
        detect(None, &shots, &rocks, RADII, &mut report);
        assert_eq!(report.particle_hits.len(), 3);
        assert!(report.particle_hits.iter().all(|h| h.asteroid == AsteroidId(4)));
    }

    #[test]
    fn test_ship_hits_each_reported() {
        let rocks = [
            asteroid(0, Vec3::new(1.0, 0.0, 0.0), true),
            asteroid(1, Vec3::new(-1.0, 0.0, 0.0), true),
            asteroid(2, Vec3::new(5.0, 0.0, 0.0), true),
        ];
        let mut report = CollisionReport::default();
        detect(Some(Vec3::ZERO), &[], &rocks, RADII, &mut report);
        assert_eq!(report.ship_hits, vec![AsteroidId(0), AsteroidId(1)]);
    }

    #[test]
    fn test_hidden_ship_is_not_tested() {
        let rocks = [asteroid(0, Vec3::ZERO, true)];
        let mut report = CollisionReport::default();
        detect(None, &[], &rocks, RADII, &mut report);
        assert!(report.ship_hits.is_empty());
    }

    #[test]
    fn test_non_finite_entities_skipped() {
        let rocks = [
            asteroid(0, Vec3::new(f32::NAN, 0.0, 0.0), true),
            asteroid(1, Vec3::ZERO, true),
        ];
        let shots = [shot(Vec3::new(f32::INFINITY, 0.0, 0.0)), shot(Vec3::ZERO)];
        let mut report = CollisionReport::default();
        detect(None, &shots, &rocks, RADII, &mut report);
        assert_eq!(
            report.particle_hits,
            vec![ParticleHit {
                particle: 1,
                asteroid: AsteroidId(1)
            }]
        );
    }
}
