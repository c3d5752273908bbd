//! Pulley Engine - pulley, mass and string kinematics in WASM
//!
//! Architecture:
//! - core/       - math, errors, logging
//! - domain/     - constants, plot quantities, settings
//! - systems/    - bodies, strings, scenario rigs and their laws
//! - simulation/ - controller, commands, render/plot boundaries, JS facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::utils::logging::init_logger(log::LevelFilter::Info);
    log::info!("pulley engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Number of built-in scenarios
#[wasm_bindgen]
pub fn scenario_count() -> u32 {
    systems::scenarios::ScenarioKind::ALL.len() as u32
}

/// Display name of scenario `index`, empty if out of range
#[wasm_bindgen]
pub fn scenario_name(index: u32) -> String {
    systems::scenarios::ScenarioKind::from_index(index)
        .map(|k| k.name().to_string())
        .unwrap_or_default()
}

// Re-export main types
pub use crate::core::error::SimError;
pub use crate::core::math::Vec3;
pub use domain::quantity::TrackedQuantity;
pub use domain::settings::SimSettings;
pub use simulation::{
    Command, FrameBuffers, NullSink, PlotSample, PlotSink, RenderSink, SimStatus, SimulationCore,
    Simulator, StopReason, TickReport, BODY_STRIDE, KIND_MASS, KIND_PULLEY,
};
pub use systems::bodies::BodyId;
pub use systems::scenarios::{Scenario, ScenarioKind};
