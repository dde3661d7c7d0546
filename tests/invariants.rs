//! Session-level properties checked over random input scripts

use astro_burst::sim::{FrameInput, GameEvent, Session};
use astro_burst::tuning::Tuning;
use glam::{Vec2, Vec3};
use proptest::prelude::*;

fn input_strategy() -> impl Strategy<Value = FrameInput> {
    (
        prop::option::weighted(0.9, (-1.0f32..=1.0, -1.0f32..=1.0)),
        any::<bool>(),
    )
        .prop_map(|(pointer, pointer_down)| FrameInput {
            pointer: pointer.map(|(x, y)| Vec2::new(x, y)),
            pointer_down,
        })
}

/// Small pools keep each case fast without changing the rules
fn quick_tuning() -> Tuning {
    let mut tuning = Tuning::default();
    tuning.shooter_capacity = 64;
    tuning.explosion.particle_count = 16;
    tuning.spawn_interval_ms = 250.0;
    tuning
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn score_and_lives_stay_consistent(
        seed in any::<u64>(),
        script in prop::collection::vec(input_strategy(), 1..300),
    ) {
        let tuning = quick_tuning();
        let lives = tuning.starting_lives;
        let mut session = Session::new(seed, tuning).unwrap();
        let mut last_score = 0;
        let mut destroyed = 0u64;
        let mut ship_hits = 0u32;
        let mut game_over_events = 0;

        for (i, input) in script.iter().enumerate() {
            let lives_before = session.state.lives;
            let events = session.step(i as f64 * 16.0, input).to_vec();

            let mut hits_this_frame = 0u32;
            let mut destroyed_ids = Vec::new();
            for event in &events {
                match event {
                    GameEvent::AsteroidDestroyed { id, .. } => {
                        prop_assert!(!destroyed_ids.contains(id));
                        destroyed_ids.push(*id);
                        destroyed += 1;
                    }
                    GameEvent::ShipHit { .. } => hits_this_frame += 1,
                    GameEvent::GameOver { .. } => game_over_events += 1,
                    _ => {}
                }
            }
            ship_hits += hits_this_frame;

            prop_assert_eq!(
                session.state.lives,
                lives_before.saturating_sub(hits_this_frame)
            );
            prop_assert!(session.state.score >= last_score);
            last_score = session.state.score;

            for asteroid in session.asteroids.iter() {
                prop_assert_eq!(session.asteroids.get(asteroid.id), Some(asteroid));
            }
        }

        prop_assert_eq!(session.state.score, destroyed);
        prop_assert_eq!(session.state.lives, lives.saturating_sub(ship_hits));
        prop_assert_eq!(session.state.is_game_over(), session.state.lives == 0);
        prop_assert!(game_over_events <= 1);
        prop_assert_eq!(session.emitter.capacity(), 64);
    }

    #[test]
    fn explosions_finish_exactly_once(
        seed in any::<u64>(),
        origins in prop::collection::vec((-10.0f32..10.0, -10.0f32..10.0), 1..6),
    ) {
        let tuning = quick_tuning();
        let mut session = Session::new(seed, tuning).unwrap();
        session.step(0.0, &FrameInput::default());
        session.shutdown();

        let profile = session.tuning().explosion.clone();
        let mut rng = <rand_pcg::Pcg32 as rand::SeedableRng>::seed_from_u64(seed);
        let ids: Vec<_> = origins
            .iter()
            .map(|&(x, y)| session.explosions.create(Vec3::new(x, y, -10.0), &profile, &mut rng).unwrap())
            .collect();

        let mut finished = Vec::new();
        for i in 1..200 {
            for event in session.step(i as f64 * 16.0, &FrameInput::default()) {
                if let GameEvent::ExplosionFinished { id } = event {
                    prop_assert!(ids.contains(id));
                    prop_assert!(!finished.contains(id));
                    finished.push(*id);
                }
            }
        }

        prop_assert_eq!(finished.len(), ids.len());
        prop_assert!(session.explosions.is_empty());
    }

    #[test]
    fn looping_preserves_visibility(
        seed in any::<u64>(),
        hidden in prop::collection::vec(any::<bool>(), 1..20),
    ) {
        let mut session = Session::new(seed, quick_tuning()).unwrap();
        session.step(0.0, &FrameInput::default());
        session.shutdown();

        let base = session.asteroids.len();
        for (i, &hide) in hidden.iter().enumerate() {
            let id = session.asteroids.spawn_at(Vec3::new(i as f32 * 3.0 - 30.0, -11.98, -10.0));
            if hide {
                session.asteroids.set_visible(id, false).unwrap();
            }
        }
        let below: Vec<_> = session.asteroids.iter().skip(base).map(|a| (a.id, a.visible)).collect();
        for (id, _) in &below {
            session.asteroids.get_mut(*id).unwrap().pos.y = -12.1;
        }

        session.step(16.0, &FrameInput::default());

        for (id, visible) in below {
            let a = session.asteroids.get(id).unwrap();
            prop_assert_eq!(a.visible, visible);
            prop_assert!(a.pos.y <= session.tuning().spawn_height);
            prop_assert!(a.pos.y > 14.0);
        }
    }
}
