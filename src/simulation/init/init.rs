use std::collections::VecDeque;

use crate::core::error::SimError;
use crate::domain::settings::SimSettings;
use crate::systems::scenarios::{Scenario, ScenarioKind};

use super::perf_stats::PerfStats;
use super::{SimStatus, SimulationCore};

pub(super) fn create_simulation_core(
    kind: ScenarioKind,
    settings: SimSettings,
) -> Result<SimulationCore, SimError> {
    let scenario = Scenario::new(kind)?;
    let tracked = scenario.default_tracked().to_vec();

    Ok(SimulationCore {
        scenario,
        selected: kind,
        status: SimStatus::Idle,
        stop_reason: None,
        time: 0.0,
        frame: 0,
        pending: VecDeque::with_capacity(8),
        tracked,
        wall_accumulator_ms: 0.0,
        settings,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}
