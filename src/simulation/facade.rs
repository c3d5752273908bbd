use wasm_bindgen::prelude::*;

use crate::core::error::SimError;
use crate::domain::quantity::TrackedQuantity;
use crate::systems::bodies::{BodyId, KinematicBody};
use crate::systems::scenarios::ScenarioKind;

use super::frame_buffers::{FrameBuffers, BODY_STRIDE};
use super::perf_stats::PerfStats;
use super::plot_buffer::PlotBuffer;
use super::{SimStatus, SimulationCore, StopReason};

fn to_js(err: SimError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn body_id(kind: u8, index: u32) -> Result<BodyId, JsValue> {
    BodyId::from_kind(kind, index as usize)
        .ok_or_else(|| JsValue::from_str(&format!("unknown body kind {kind}")))
}

fn quantity(index: u8) -> Result<TrackedQuantity, JsValue> {
    TrackedQuantity::from_index(index)
        .ok_or_else(|| JsValue::from_str(&format!("unknown quantity index {index}")))
}

/// Browser-facing handle. Owns the core plus the buffers the last frame and
/// pending plot samples are written to.
#[wasm_bindgen]
pub struct Simulator {
    core: SimulationCore,
    frame: FrameBuffers,
    plot: PlotBuffer,
}

#[wasm_bindgen]
impl Simulator {
    /// Create a simulator with scenario `scenario_index` (0..=3) loaded, Idle
    #[wasm_bindgen(constructor)]
    pub fn new(scenario_index: u32) -> Result<Simulator, JsValue> {
        let kind = ScenarioKind::from_index(scenario_index).map_err(to_js)?;
        let core = SimulationCore::new(kind).map_err(to_js)?;
        let mut frame = FrameBuffers::new();
        core.render(&mut frame);
        Ok(Self { core, frame, plot: PlotBuffer::new() })
    }

    // === COMMANDS (applied at the next tick) ===

    pub fn run(&mut self) {
        self.core.run();
    }

    pub fn stop(&mut self) {
        self.core.stop();
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    pub fn select_scenario(&mut self, index: u32) -> Result<(), JsValue> {
        self.core.select_scenario(index).map_err(to_js)
    }

    /// Set mass `index` to `value` (1..=200)
    pub fn adjust_mass(&mut self, index: u32, value: f64) -> Result<(), JsValue> {
        self.core.adjust_mass(index as usize, value).map_err(to_js)
    }

    // === TICKING ===

    /// Process one tick. Returns true if physics advanced.
    pub fn tick(&mut self) -> bool {
        self.core.tick(&mut self.frame, &mut self.plot).advanced
    }

    /// Catch up on `elapsed_ms` of wall-clock time; returns ticks run
    pub fn advance(&mut self, elapsed_ms: f64) -> u32 {
        self.core.advance(elapsed_ms, &mut self.frame, &mut self.plot)
    }

    // === STATE ===

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> String {
        self.core.status().as_str().to_string()
    }

    /// 0 idle, 1 running, 2 stopped
    pub fn status_code(&self) -> u8 {
        match self.core.status() {
            SimStatus::Idle => 0,
            SimStatus::Running => 1,
            SimStatus::Stopped => 2,
        }
    }

    /// True once the run has ended by contact and needs a reset
    pub fn finished(&self) -> bool {
        self.core.stop_reason() == Some(StopReason::Terminal)
    }

    #[wasm_bindgen(getter)]
    pub fn time(&self) -> f64 { self.core.time() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn scenario_index(&self) -> u32 { self.core.scenario().kind().index() }

    pub fn scenario_name(&self) -> String { self.core.scenario().kind().name().to_string() }

    pub fn mass_count(&self) -> usize { self.core.scenario().bodies.masses.len() }

    pub fn pulley_count(&self) -> usize { self.core.scenario().bodies.pulleys.len() }

    /// Current value of mass `index`, or NaN
    pub fn mass_value(&self, index: u32) -> f64 {
        self.core
            .scenario()
            .bodies
            .masses
            .get(index as usize)
            .map_or(f64::NAN, |m| m.mass())
    }

    /// Value of one tracked quantity (see `TrackedQuantity` order), or NaN
    pub fn quantity_of(&self, kind: u8, index: u32, quantity_index: u8) -> f64 {
        let (Some(body), Some(q)) = (
            BodyId::from_kind(kind, index as usize).and_then(|id| self.core.scenario().bodies.get(id)),
            TrackedQuantity::from_index(quantity_index),
        ) else {
            return f64::NAN;
        };
        body.quantity(q)
    }

    // === RENDER BUFFERS (last frame) ===

    pub fn body_stride(&self) -> usize { BODY_STRIDE }

    pub fn body_count(&self) -> usize { self.frame.body_count() }

    pub fn bodies_ptr(&self) -> *const f64 { self.frame.bodies.as_ptr() }

    pub fn bodies_len(&self) -> usize { self.frame.bodies.len() }

    pub fn waypoints_ptr(&self) -> *const f64 { self.frame.waypoints.as_ptr() }

    /// Number of f64 values (three per point)
    pub fn waypoints_len(&self) -> usize { self.frame.waypoints.len() }

    pub fn string_offsets_ptr(&self) -> *const u32 { self.frame.string_offsets.as_ptr() }

    pub fn string_offsets_len(&self) -> usize { self.frame.string_offsets.len() }

    // === PLOTS ===

    /// Samples produced since the last drain, as JSON
    pub fn drain_plot_json(&mut self) -> String {
        self.plot.drain_json()
    }

    pub fn track(&mut self, kind: u8, index: u32, quantity_index: u8) -> Result<(), JsValue> {
        let q = quantity(quantity_index)?;
        self.core.track(body_id(kind, index)?, q).map_err(to_js)
    }

    pub fn untrack(&mut self, kind: u8, index: u32, quantity_index: u8) -> Result<bool, JsValue> {
        let q = quantity(quantity_index)?;
        Ok(self.core.untrack(body_id(kind, index)?, q))
    }

    /// Bodies, masses, strings and plot selection of the live scene
    pub fn scene_json(&self) -> String {
        self.core.scene_manifest().to_json()
    }

    // === SETTINGS ===

    pub fn load_settings_json(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_settings_json(&json).map_err(to_js)
    }

    pub fn set_gravity(&mut self, gravity: f64) -> Result<(), JsValue> {
        self.core.set_gravity(gravity).map_err(to_js)
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }
}
