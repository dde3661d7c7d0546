//! Browser bindings
//!
//! The page owns the renderer and the animation frame loop; it feeds pointer
//! state in, calls `step` once per frame and reads the buffers back out.

use glam::Vec2;
use wasm_bindgen::prelude::*;

use crate::render::RenderBuffers;
use crate::sim::{FrameInput, GameEvent, Session};
use crate::tuning::Tuning;

#[wasm_bindgen]
pub struct GameHandle {
    session: Session,
    buffers: RenderBuffers,
    input: FrameInput,
    finished: Vec<u32>,
}

#[wasm_bindgen]
impl GameHandle {
    /// New session; `tuning_json` overrides any subset of the defaults
    #[wasm_bindgen(constructor)]
    pub fn new(seed: f64, tuning_json: Option<String>) -> Result<GameHandle, JsValue> {
        let tuning = match tuning_json {
            Some(json) => Tuning::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => Tuning::default(),
        };
        let buffers = RenderBuffers::new(tuning.shooter_capacity);
        let session =
            Session::new(seed as u64, tuning).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            session,
            buffers,
            input: FrameInput::default(),
            finished: Vec::new(),
        })
    }

    /// Pointer in normalized device coordinates
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.input.pointer = Some(Vec2::new(x, y));
    }

    /// Pointer left the canvas or is otherwise unavailable
    pub fn clear_pointer(&mut self) {
        self.input.pointer = None;
    }

    pub fn set_pointer_down(&mut self, down: bool) {
        self.input.pointer_down = down;
    }

    /// Advance one frame; returns ids of explosions whose meshes can be released
    pub fn step(&mut self, now_ms: f64) -> Vec<u32> {
        self.finished.clear();
        for event in self.session.step(now_ms, &self.input) {
            if let GameEvent::ExplosionFinished { id } = event {
                self.finished.push(id.0);
            }
        }
        self.buffers.sync(&self.session);
        self.finished.clone()
    }

    /// Advance one frame using the page's high-resolution clock
    pub fn tick(&mut self) -> Vec<u32> {
        let now_ms = web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now);
        self.step(now_ms)
    }

    /// Restart with a fresh wall-clock seed
    pub fn restart_now(&mut self) {
        self.restart(js_sys::Date::now());
    }

    pub fn restart(&mut self, seed: f64) {
        self.session.restart(seed as u64);
        self.input = FrameInput::default();
        self.buffers.sync(&self.session);
        log::info!("Game restarted with seed: {}", seed as u64);
    }

    /// Flat `[x, y, z, ...]` shot positions
    pub fn shot_positions(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.buffers.shot_floats())
    }

    /// Flat `[x, y, z, visible, ...]` asteroid instances
    pub fn asteroid_instances(&self) -> js_sys::Float32Array {
        let flat: Vec<f32> = self
            .buffers
            .asteroids
            .iter()
            .flat_map(|a| [a.position[0], a.position[1], a.position[2], a.visible as f32])
            .collect();
        js_sys::Float32Array::from(flat.as_slice())
    }

    /// Flat debris positions of every live explosion
    pub fn debris_positions(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.buffers.debris_floats())
    }

    /// `[id, start, len, ...]` per live explosion, in debris vertices
    pub fn debris_ranges(&self) -> Vec<u32> {
        self.buffers
            .debris_ranges
            .iter()
            .flat_map(|r| [r.id.0, r.start as u32, r.len as u32])
            .collect()
    }

    /// `[x, y, z, roll]`
    pub fn ship_transform(&self) -> Vec<f32> {
        let s = &self.buffers.ship;
        vec![s.position[0], s.position[1], s.position[2], s.roll]
    }

    pub fn ship_visible(&self) -> bool {
        self.buffers.ship.visible != 0
    }

    pub fn score(&self) -> f64 {
        self.buffers.hud.score as f64
    }

    pub fn lives(&self) -> u32 {
        self.buffers.hud.lives
    }

    pub fn game_over(&self) -> bool {
        self.buffers.hud.game_over
    }
}
