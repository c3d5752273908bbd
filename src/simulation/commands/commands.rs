use crate::core::error::SimError;
use crate::domain::constants::MASS_RANGE;
use crate::systems::bodies::BodyId;
use crate::systems::scenarios::{Scenario, ScenarioKind};

use super::{SimStatus, SimulationCore, StopReason};

/// External commands, consumed at the next tick boundary
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Run,
    Stop,
    Reset,
    /// Switch topology; implies a reset
    SelectScenario(ScenarioKind),
    /// Set mass `mass` of the live scenario to `value` (within `MASS_RANGE`)
    AdjustMass { mass: usize, value: f64 },
}

pub(super) fn submit(world: &mut SimulationCore, command: Command) -> Result<(), SimError> {
    if let Command::AdjustMass { mass, value } = command {
        check_adjustment(world, mass, value)?;
    }
    world.pending.push_back(command);
    Ok(())
}

fn check_adjustment(world: &SimulationCore, mass: usize, value: f64) -> Result<(), SimError> {
    if !MASS_RANGE.contains(&value) {
        return Err(SimError::MassOutOfRange {
            value,
            min: *MASS_RANGE.start(),
            max: *MASS_RANGE.end(),
        });
    }
    if mass >= world.scenario.bodies.masses.len() {
        return Err(SimError::UnknownBody(BodyId::Mass(mass)));
    }
    Ok(())
}

/// Apply every queued command in submission order. Returns how many took
/// effect.
pub(super) fn apply_pending(world: &mut SimulationCore) -> u32 {
    let mut applied = 0;
    while let Some(command) = world.pending.pop_front() {
        match apply(world, command) {
            Ok(()) => applied += 1,
            Err(e) => log::warn!("dropping {command:?}: {e}"),
        }
    }
    applied
}

fn apply(world: &mut SimulationCore, command: Command) -> Result<(), SimError> {
    match command {
        Command::Run => run(world),
        Command::Stop => stop(world),
        Command::Reset => reset(world)?,
        Command::SelectScenario(kind) => {
            world.selected = kind;
            reset(world)?;
        }
        Command::AdjustMass { mass, value } => {
            // the scenario may have been swapped since submission
            check_adjustment(world, mass, value)?;
            world.scenario.adjust_mass(mass, value)?;
            log::debug!("mass {mass} set to {value}");
        }
    }
    Ok(())
}

fn run(world: &mut SimulationCore) {
    match (world.status, world.stop_reason) {
        (SimStatus::Stopped, Some(StopReason::Terminal)) => {
            log::info!("run ignored: {} has reached its end, reset first", world.selected.name());
        }
        (SimStatus::Running, _) => {}
        _ => {
            world.status = SimStatus::Running;
            world.stop_reason = None;
            log::info!("running {} at t={:.2}", world.selected.name(), world.time);
        }
    }
}

fn stop(world: &mut SimulationCore) {
    if world.status == SimStatus::Running {
        world.status = SimStatus::Stopped;
        world.stop_reason = Some(StopReason::User);
        log::info!("stopped at t={:.2}", world.time);
    }
}

/// Discard the live scenario and rebuild the selected one, Idle at t = 0
/// with no wall-clock backlog
fn reset(world: &mut SimulationCore) -> Result<(), SimError> {
    let scenario = Scenario::new(world.selected)?;
    world.tracked = scenario.default_tracked().to_vec();
    world.scenario = scenario;
    world.status = SimStatus::Idle;
    world.stop_reason = None;
    world.time = 0.0;
    world.frame = 0;
    world.wall_accumulator_ms = 0.0;
    log::info!("reset to {}", world.selected.name());
    Ok(())
}
