use crate::core::error::SimError;
use crate::domain::settings::SimSettings;

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn settings(world: &SimulationCore) -> &SimSettings {
    &world.settings
}

pub(super) fn set_gravity(world: &mut SimulationCore, gravity: f64) -> Result<(), SimError> {
    let next = SimSettings { gravity, ..world.settings.clone() };
    next.validate()?;
    world.settings = next;
    Ok(())
}

/// Replace the settings from JSON. A changed `dt` applies from the next
/// tick; time already elapsed is kept.
pub(super) fn load_settings_json(world: &mut SimulationCore, json: &str) -> Result<(), SimError> {
    let next = SimSettings::from_json(json)?;
    log::info!("settings loaded: {}", next.to_json());
    world.settings = next;
    Ok(())
}

pub(super) fn enable_perf_metrics(world: &mut SimulationCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats = PerfStats::default();
    }
}

pub(super) fn get_perf_stats(world: &SimulationCore) -> PerfStats {
    world.perf_stats.clone()
}
