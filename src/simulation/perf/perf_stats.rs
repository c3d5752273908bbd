use wasm_bindgen::prelude::*;

/// Timing of the last tick, split by phase. Zeros while perf is disabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) tick_ms: f64,
    pub(super) commands_ms: f64,
    pub(super) law_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) strings_ms: f64,
    pub(super) render_ms: f64,
    pub(super) commands_applied: u32,
    pub(super) plot_samples: u32,
    pub(super) waypoints: u32,
    pub(super) ticks_total: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        let ticks_total = self.ticks_total;
        *self = PerfStats { ticks_total, ..PerfStats::default() };
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    #[wasm_bindgen(getter)]
    pub fn commands_ms(&self) -> f64 { self.commands_ms }
    #[wasm_bindgen(getter)]
    pub fn law_ms(&self) -> f64 { self.law_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn strings_ms(&self) -> f64 { self.strings_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn commands_applied(&self) -> u32 { self.commands_applied }
    #[wasm_bindgen(getter)]
    pub fn plot_samples(&self) -> u32 { self.plot_samples }
    #[wasm_bindgen(getter)]
    pub fn waypoints(&self) -> u32 { self.waypoints }
    #[wasm_bindgen(getter)]
    pub fn ticks_total(&self) -> u64 { self.ticks_total }
}
