use crate::systems::bodies::KinematicBody;

use super::commands::apply_pending;
use super::render_extract::emit_frame;
use super::sinks::{PlotSample, PlotSink, RenderSink};
use super::{PerfTimer, SimStatus, SimulationCore, StopReason, TickReport};

#[inline]
fn lap(timer: &mut Option<PerfTimer>) -> f64 {
    timer.as_mut().map_or(0.0, PerfTimer::lap_ms)
}

pub(super) fn tick(
    world: &mut SimulationCore,
    render: &mut dyn RenderSink,
    plot: &mut dyn PlotSink,
) -> TickReport {
    let perf_on = world.perf_enabled;
    let tick_start = perf_on.then(PerfTimer::start);
    let mut timer = perf_on.then(PerfTimer::start);

    // === COMMANDS ===
    // Everything submitted since the last tick lands here, before physics.
    let commands_applied = apply_pending(world);
    let commands_ms = lap(&mut timer);

    // === ACCELERATION LAW ===
    // Evaluated in every state so an Idle or Stopped preview reflects
    // adjusted masses; it only moves bodies while running.
    world.scenario.assign_accelerations(world.settings.gravity);
    let law_ms = lap(&mut timer);

    let advanced = world.status == SimStatus::Running;
    let mut terminated = false;
    let mut integrate_ms = 0.0;
    let mut strings_ms = 0.0;
    let mut plot_samples = 0;

    if advanced {
        let dt = world.settings.dt;
        world.scenario.integrate(dt);
        integrate_ms = lap(&mut timer);

        world.scenario.update_strings();
        strings_ms = lap(&mut timer);

        world.time += dt;
        world.frame += 1;
        plot_samples = emit_plot_samples(world, plot);

        if world.scenario.is_terminal() {
            world.status = SimStatus::Stopped;
            world.stop_reason = Some(StopReason::Terminal);
            terminated = true;
            log::info!(
                "{} reached its end at t={:.2} after {} ticks",
                world.selected.name(),
                world.time,
                world.frame
            );
        }
    }

    emit_frame(world, render);
    let render_ms = lap(&mut timer);

    if let Some(start) = tick_start {
        let stats = &mut world.perf_stats;
        stats.reset();
        stats.tick_ms = start.elapsed_ms();
        stats.commands_ms = commands_ms;
        stats.law_ms = law_ms;
        stats.integrate_ms = integrate_ms;
        stats.strings_ms = strings_ms;
        stats.render_ms = render_ms;
        stats.commands_applied = commands_applied;
        stats.plot_samples = plot_samples;
        stats.waypoints = world.scenario.strings.iter().map(|s| s.len() as u32).sum();
        stats.ticks_total += 1;
    }

    TickReport {
        status: world.status,
        time: world.time,
        advanced,
        terminated,
    }
}

fn emit_plot_samples(world: &SimulationCore, plot: &mut dyn PlotSink) -> u32 {
    let mut emitted = 0;
    for &(body, quantity) in &world.tracked {
        if let Some(b) = world.scenario.bodies.get(body) {
            plot.sample(PlotSample {
                body,
                quantity,
                time: world.time,
                value: b.quantity(quantity),
            });
            emitted += 1;
        }
    }
    emitted
}

pub(super) fn advance(
    world: &mut SimulationCore,
    elapsed_ms: f64,
    render: &mut dyn RenderSink,
    plot: &mut dyn PlotSink,
) -> u32 {
    if !(elapsed_ms.is_finite() && elapsed_ms > 0.0) {
        return 0;
    }
    let dt_ms = world.settings.dt * 1000.0;
    let max_ticks = world.settings.max_ticks_per_advance;
    world.wall_accumulator_ms += elapsed_ms;

    let mut ticks = 0;
    while world.wall_accumulator_ms >= dt_ms && ticks < max_ticks {
        tick(world, render, plot);
        world.wall_accumulator_ms -= dt_ms;
        ticks += 1;
    }
    if ticks == max_ticks && world.wall_accumulator_ms >= dt_ms {
        log::debug!("dropping {:.1} ms of wall-clock backlog", world.wall_accumulator_ms);
        world.wall_accumulator_ms %= dt_ms;
    }
    ticks
}
