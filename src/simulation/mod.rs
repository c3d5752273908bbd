//! Simulation - the controller that owns one live scenario
//!
//! `SimulationCore` holds the active scenario, the lifecycle state, elapsed
//! simulation time and the command queue. All mutation from the outside goes
//! through queued [`Command`]s, which are consumed at the start of the next
//! tick, so every tick is atomic with respect to observable state.
//!
//! Phases of a tick live in step/, lifecycle commands in commands/, the
//! render and plot boundaries in render/ and plot/.

use std::collections::VecDeque;

use crate::core::error::SimError;
use crate::domain::quantity::TrackedQuantity;
use crate::domain::settings::SimSettings;
use crate::systems::bodies::BodyId;
use crate::systems::scenarios::{Scenario, ScenarioKind};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "render/sinks.rs"]
mod sinks;
#[path = "render/frame_buffers.rs"]
mod frame_buffers;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "plot/plot_buffer.rs"]
mod plot_buffer;
mod facade;

pub use commands::Command;
pub use facade::Simulator;
pub use frame_buffers::{FrameBuffers, BODY_STRIDE, KIND_MASS, KIND_PULLEY};
pub use perf_stats::PerfStats;
pub use plot_buffer::PlotBuffer;
pub use render_extract::{SceneManifest, TrackedEntry};
pub use sinks::{BodyView, NullSink, PlotSample, PlotSink, RenderSink};

use perf_timer::PerfTimer;

/// Lifecycle of a run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimStatus {
    /// Built, not yet started; adjustments still apply
    Idle,
    Running,
    /// Frozen; see [`StopReason`]
    Stopped,
}

impl SimStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SimStatus::Idle => "idle",
            SimStatus::Running => "running",
            SimStatus::Stopped => "stopped",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// Stop command; Run resumes
    User,
    /// Terminal predicate held; only Reset leaves this state
    Terminal,
}

/// Outcome of one tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickReport {
    pub status: SimStatus,
    pub time: f64,
    /// Physics advanced this tick
    pub advanced: bool,
    /// The terminal predicate stopped the run this tick
    pub terminated: bool,
}

pub struct SimulationCore {
    scenario: Scenario,
    selected: ScenarioKind,
    status: SimStatus,
    stop_reason: Option<StopReason>,

    // Run state
    time: f64,
    frame: u64,
    pending: VecDeque<Command>,
    tracked: Vec<(BodyId, TrackedQuantity)>,
    wall_accumulator_ms: f64,

    settings: SimSettings,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Build a controller with default settings and `kind` loaded, Idle
    pub fn new(kind: ScenarioKind) -> Result<Self, SimError> {
        init::create_simulation_core(kind, SimSettings::default())
    }

    pub fn with_settings(kind: ScenarioKind, settings: SimSettings) -> Result<Self, SimError> {
        settings.validate()?;
        init::create_simulation_core(kind, settings)
    }

    pub fn status(&self) -> SimStatus { self.status }

    pub fn stop_reason(&self) -> Option<StopReason> { self.stop_reason }

    /// Elapsed simulation time (advances only while running)
    pub fn time(&self) -> f64 { self.time }

    /// Ticks integrated since the last reset
    pub fn frame(&self) -> u64 { self.frame }

    pub fn scenario(&self) -> &Scenario { &self.scenario }

    /// Topology rebuilt by the next reset
    pub fn selected(&self) -> ScenarioKind { self.selected }

    pub fn pending_commands(&self) -> usize { self.pending.len() }

    // === COMMAND SURFACE ===

    /// Queue a command for the next tick. Mass adjustments are checked here
    /// and rejected without being queued.
    pub fn submit(&mut self, command: Command) -> Result<(), SimError> {
        commands::submit(self, command)
    }

    pub fn run(&mut self) {
        self.pending.push_back(Command::Run);
    }

    pub fn stop(&mut self) {
        self.pending.push_back(Command::Stop);
    }

    pub fn reset(&mut self) {
        self.pending.push_back(Command::Reset);
    }

    pub fn select_scenario(&mut self, index: u32) -> Result<(), SimError> {
        let kind = ScenarioKind::from_index(index)?;
        self.submit(Command::SelectScenario(kind))
    }

    pub fn adjust_mass(&mut self, mass: usize, value: f64) -> Result<(), SimError> {
        self.submit(Command::AdjustMass { mass, value })
    }

    // === TICKING ===

    /// Process one fixed timestep and push the resulting frame to the sinks
    pub fn tick(&mut self, render: &mut dyn RenderSink, plot: &mut dyn PlotSink) -> TickReport {
        step::tick(self, render, plot)
    }

    /// Run as many fixed ticks as `elapsed_ms` of wall-clock time covers,
    /// capped per call. Returns the number of ticks run.
    pub fn advance(&mut self, elapsed_ms: f64, render: &mut dyn RenderSink, plot: &mut dyn PlotSink) -> u32 {
        step::advance(self, elapsed_ms, render, plot)
    }

    // === PLOT SELECTION ===

    pub fn tracked(&self) -> &[(BodyId, TrackedQuantity)] { &self.tracked }

    /// Start plotting `quantity` of `body`. Tracking an already tracked
    /// pair is a no-op.
    pub fn track(&mut self, body: BodyId, quantity: TrackedQuantity) -> Result<(), SimError> {
        self.scenario.bodies.body(body)?;
        if !self.tracked.contains(&(body, quantity)) {
            self.tracked.push((body, quantity));
        }
        Ok(())
    }

    /// Returns whether the pair was tracked
    pub fn untrack(&mut self, body: BodyId, quantity: TrackedQuantity) -> bool {
        let before = self.tracked.len();
        self.tracked.retain(|entry| *entry != (body, quantity));
        self.tracked.len() != before
    }

    // === RENDER / MANIFEST ===

    /// Push the current frame without ticking
    pub fn render(&self, sink: &mut dyn RenderSink) {
        render_extract::emit_frame(self, sink);
    }

    pub fn scene_manifest(&self) -> SceneManifest {
        render_extract::scene_manifest(self)
    }

    // === SETTINGS ===

    pub fn settings(&self) -> &SimSettings {
        settings::settings(self)
    }

    pub fn set_gravity(&mut self, gravity: f64) -> Result<(), SimError> {
        settings::set_gravity(self, gravity)
    }

    pub fn load_settings_json(&mut self, json: &str) -> Result<(), SimError> {
        settings::load_settings_json(self, json)
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick's perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
