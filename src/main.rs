//! Astro Burst entry point
//!
//! On the web this only installs logging; the page drives `GameHandle`.
//! Natively it runs a headless scripted session and reports the outcome.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Astro Burst starting...");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use astro_burst::render::{Hud, RenderBuffers};
    use astro_burst::sim::{FrameInput, GameEvent, Session};
    use astro_burst::tuning::{ExplosionProfile, Tuning};
    use glam::Vec2;

    env_logger::init();
    log::info!("Astro Burst (native) starting...");
    log::info!("Running headless - the browser build supplies rendering and input");

    // astro-burst [tuning.json] [debris|sparks]
    let mut tuning = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()))
        {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("Could not load tuning from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };
    if let Some(name) = std::env::args().nth(2) {
        match ExplosionProfile::from_name(&name) {
            Some(profile) => tuning.explosion = profile,
            None => log::warn!("Unknown explosion profile {name:?}, keeping the configured one"),
        }
    }

    let seed = 0x5eed;
    let mut session = match Session::new(seed, tuning) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Could not start session: {e}");
            std::process::exit(1);
        }
    };
    let mut buffers = RenderBuffers::new(session.tuning().shooter_capacity);

    // Two minutes at 60 Hz: sweep the pointer side to side, fire in pulses
    let frame_ms = 1000.0 / 60.0;
    let mut explosions = 0u32;
    for frame in 0..7200u32 {
        let t = frame as f32 / 60.0;
        let input = FrameInput {
            pointer: Some(Vec2::new((t * 0.7).sin() * 0.5, -0.6)),
            pointer_down: (frame / 30) % 2 == 0,
        };
        for event in session.step(frame as f64 * frame_ms, &input) {
            if matches!(event, GameEvent::ExplosionCreated { .. }) {
                explosions += 1;
            }
        }
        buffers.sync(&session);
        if buffers.hud.game_over {
            break;
        }
    }

    let Hud {
        score,
        lives,
        game_over,
    } = buffers.hud;
    println!(
        "frames: {}  asteroids: {}  score: {}  lives: {}  explosions: {}  game over: {}",
        session.frame(),
        session.asteroids.len(),
        score,
        lives,
        explosions,
        game_over
    );
}
