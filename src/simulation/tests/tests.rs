use approx::assert_relative_eq;

use super::*;
use crate::domain::constants::{ACCEL_G, DT};
use crate::systems::bodies::KinematicBody;

fn headless(kind: ScenarioKind) -> SimulationCore {
    SimulationCore::new(kind).expect("built-in scenario should build")
}

fn tick(world: &mut SimulationCore) -> TickReport {
    world.tick(&mut NullSink, &mut NullSink)
}

fn positions(world: &SimulationCore) -> Vec<crate::core::math::Vec3> {
    let b = &world.scenario().bodies;
    let pulleys = b.pulleys.iter().map(|p| p.position());
    pulleys.chain(b.masses.iter().map(|m| m.position())).collect()
}

#[test]
fn idle_ticks_do_not_move_anything() {
    let mut world = headless(ScenarioKind::Atwood);
    let before = positions(&world);
    for _ in 0..10 {
        let report = tick(&mut world);
        assert!(!report.advanced);
    }
    assert_eq!(positions(&world), before);
    assert_eq!(world.time(), 0.0);
    assert_eq!(world.status(), SimStatus::Idle);
}

#[test]
fn commands_take_effect_on_the_next_tick() {
    let mut world = headless(ScenarioKind::Atwood);
    world.run();
    assert_eq!(world.status(), SimStatus::Idle);
    assert_eq!(world.pending_commands(), 1);

    let report = tick(&mut world);
    assert_eq!(report.status, SimStatus::Running);
    assert!(report.advanced);
    assert_eq!(world.pending_commands(), 0);
    assert_relative_eq!(world.time(), DT);
}

#[test]
fn atwood_end_to_end_after_two_seconds() {
    let mut world = headless(ScenarioKind::Atwood);
    world.run();
    for _ in 0..100 {
        tick(&mut world);
    }

    let bodies = &world.scenario().bodies;
    let pulley_mass = bodies.pulleys[0].mass();
    assert_relative_eq!(pulley_mass, 16.0 * std::f64::consts::PI, epsilon = 1e-12);
    let a = (20.0 - 25.0) * ACCEL_G / (25.0 + 20.0 + 0.5 * pulley_mass);

    assert_eq!(world.status(), SimStatus::Running);
    assert_eq!(world.frame(), 100);
    assert_relative_eq!(world.time(), 2.0, epsilon = 1e-9);
    assert_relative_eq!(bodies.masses[0].linear.velocity, a * 2.0, epsilon = 1e-9);
    assert_relative_eq!(bodies.masses[1].linear.velocity, -a * 2.0, epsilon = 1e-9);
    assert_relative_eq!(bodies.masses[0].linear.displacement, 0.5 * a * 4.0, epsilon = 1e-9);
    assert_relative_eq!(bodies.pulleys[0].rotation(), 0.5 * (a / 2.0) * 4.0, epsilon = 1e-9);
}

#[test]
fn adjust_mass_while_stopped_changes_width_but_not_position() {
    let mut world = headless(ScenarioKind::Atwood);
    world.run();
    for _ in 0..10 {
        tick(&mut world);
    }
    world.stop();
    tick(&mut world);
    assert_eq!(world.status(), SimStatus::Stopped);
    assert_eq!(world.stop_reason(), Some(StopReason::User));

    let displacement = world.scenario().bodies.masses[1].linear.displacement;
    let width = world.scenario().bodies.masses[1].width();
    let time = world.time();

    world.adjust_mass(1, 120.0).unwrap();
    tick(&mut world);
    let m1 = &world.scenario().bodies.masses[1];
    assert_eq!(m1.mass(), 120.0);
    assert!(m1.width() > width);
    assert_eq!(m1.linear.displacement, displacement);
    assert_eq!(world.time(), time);

    // resuming picks the new mass up in the very next law evaluation
    world.run();
    tick(&mut world);
    let pulley_mass = world.scenario().bodies.pulleys[0].mass();
    let expected = (120.0 - 25.0) * ACCEL_G / (145.0 + 0.5 * pulley_mass);
    assert_eq!(world.status(), SimStatus::Running);
    assert_relative_eq!(
        world.scenario().bodies.masses[0].linear.acceleration,
        expected,
        epsilon = 1e-12
    );
}

#[test]
fn out_of_range_adjustments_are_rejected_at_submit() {
    let mut world = headless(ScenarioKind::Counterweight);
    assert!(matches!(
        world.adjust_mass(0, 0.5),
        Err(SimError::MassOutOfRange { .. })
    ));
    assert!(world.adjust_mass(0, 201.0).is_err());
    assert!(world.adjust_mass(0, f64::NAN).is_err());
    assert_eq!(
        world.adjust_mass(1, 10.0),
        Err(SimError::UnknownBody(BodyId::Mass(1)))
    );
    assert_eq!(world.pending_commands(), 0);
    assert!(world.adjust_mass(0, 200.0).is_ok());
    assert!(world.adjust_mass(0, 1.0).is_ok());
}

#[test]
fn terminal_contact_stops_the_run_and_blocks_resume() {
    let mut world = headless(ScenarioKind::Atwood);
    world.run();
    let mut terminated_at = None;
    for n in 1..=1_000 {
        if tick(&mut world).terminated {
            terminated_at = Some(n);
            break;
        }
    }
    let n = terminated_at.expect("the lighter mass should reach the pulley");
    assert_eq!(world.status(), SimStatus::Stopped);
    assert_eq!(world.stop_reason(), Some(StopReason::Terminal));

    let frozen = positions(&world);
    world.run();
    for _ in 0..5 {
        assert!(!tick(&mut world).advanced);
    }
    assert_eq!(positions(&world), frozen);
    assert_eq!(world.frame(), n);
}

#[test]
fn reset_rebuilds_a_fresh_scenario() {
    let mut world = headless(ScenarioKind::Relay);
    world.adjust_mass(0, 150.0).unwrap();
    world.run();
    for _ in 0..20 {
        tick(&mut world);
    }
    world.reset();
    tick(&mut world);

    assert_eq!(world.status(), SimStatus::Idle);
    assert_eq!(world.time(), 0.0);
    assert_eq!(world.frame(), 0);
    let fresh = headless(ScenarioKind::Relay);
    assert_eq!(positions(&world), positions(&fresh));
    assert_eq!(world.scenario().bodies.masses[0].mass(), 10.0);
}

#[test]
fn select_scenario_switches_topology_and_plot_selection() {
    let mut world = headless(ScenarioKind::Atwood);
    world.select_scenario(3).unwrap();
    assert_eq!(world.scenario().kind(), ScenarioKind::Atwood);
    tick(&mut world);

    assert_eq!(world.scenario().kind(), ScenarioKind::Branching);
    assert_eq!(world.selected(), ScenarioKind::Branching);
    assert_eq!(world.scenario().strings.len(), 2);
    assert_eq!(world.tracked(), world.scenario().default_tracked());
    assert_eq!(world.select_scenario(9), Err(SimError::UnknownScenario(9)));
}

#[test]
fn plot_samples_follow_tracked_quantities() {
    let mut world = headless(ScenarioKind::Atwood);
    world.run();
    let mut samples: Vec<PlotSample> = Vec::new();
    world.tick(&mut NullSink, &mut samples);
    world.tick(&mut NullSink, &mut samples);

    let per_tick = world.tracked().len();
    assert_eq!(samples.len(), per_tick * 2);
    assert_relative_eq!(samples[0].time, DT);
    assert_relative_eq!(samples[per_tick].time, 2.0 * DT);

    let v = samples
        .iter()
        .find(|s| s.body == BodyId::Mass(0) && s.quantity == TrackedQuantity::Velocity && s.time > DT)
        .unwrap();
    assert_eq!(v.value, world.scenario().bodies.masses[0].linear.velocity);
}

#[test]
fn track_and_untrack() {
    let mut world = headless(ScenarioKind::Counterweight);
    let before = world.tracked().len();
    world.track(BodyId::Pulley(0), TrackedQuantity::AngularVelocity).unwrap();
    world.track(BodyId::Pulley(0), TrackedQuantity::AngularVelocity).unwrap();
    assert_eq!(world.tracked().len(), before + 1);
    assert!(world.track(BodyId::Pulley(9), TrackedQuantity::Velocity).is_err());
    assert!(world.untrack(BodyId::Pulley(0), TrackedQuantity::AngularVelocity));
    assert!(!world.untrack(BodyId::Pulley(0), TrackedQuantity::AngularVelocity));
    assert_eq!(world.tracked().len(), before);
}

#[test]
fn frame_buffers_hold_bodies_and_strings() {
    let mut world = headless(ScenarioKind::Branching);
    let mut frame = FrameBuffers::new();
    world.run();
    world.tick(&mut frame, &mut NullSink);

    assert_eq!(frame.body_count(), 6);
    assert_eq!(frame.bodies().len(), 6 * BODY_STRIDE);
    assert_eq!(frame.bodies()[0], KIND_PULLEY);
    assert_eq!(frame.bodies()[5 * BODY_STRIDE], KIND_MASS);
    assert_eq!(frame.string_offsets().len(), 3);
    assert_relative_eq!(frame.time(), DT);

    for (i, s) in world.scenario().strings.iter().enumerate() {
        assert_eq!(frame.string_points(i).unwrap(), s.waypoints());
    }
    assert_eq!(frame.string_points(2), None);
}

#[test]
fn advance_paces_ticks_to_wall_clock() {
    let mut world = headless(ScenarioKind::Atwood);
    world.run();
    assert_eq!(world.advance(10.0, &mut NullSink, &mut NullSink), 0);
    assert_eq!(world.advance(10.0, &mut NullSink, &mut NullSink), 1);
    assert_eq!(world.advance(45.0, &mut NullSink, &mut NullSink), 2);
    assert_eq!(world.advance(10_000.0, &mut NullSink, &mut NullSink), world.settings().max_ticks_per_advance);
    assert_eq!(world.advance(-5.0, &mut NullSink, &mut NullSink), 0);
}

#[test]
fn reset_drops_wall_clock_backlog() {
    let mut world = headless(ScenarioKind::Atwood);
    world.run();
    // one tick runs, 10 ms stay banked
    assert_eq!(world.advance(30.0, &mut NullSink, &mut NullSink), 1);

    world.reset();
    tick(&mut world);
    world.run();
    assert_eq!(world.advance(15.0, &mut NullSink, &mut NullSink), 0);
    assert_eq!(world.advance(5.0, &mut NullSink, &mut NullSink), 1);
    assert_relative_eq!(world.time(), DT);
}

#[test]
fn with_settings_rejects_invalid_settings() {
    let bad = SimSettings { max_ticks_per_advance: 0, ..SimSettings::default() };
    assert!(matches!(
        SimulationCore::with_settings(ScenarioKind::Relay, bad),
        Err(SimError::InvalidSettings(_))
    ));

    let moon = SimSettings { gravity: 1.62, ..SimSettings::default() };
    let world = SimulationCore::with_settings(ScenarioKind::Relay, moon).unwrap();
    assert_eq!(world.settings().gravity, 1.62);
}

#[test]
fn settings_drive_gravity_and_timestep() {
    let mut world = headless(ScenarioKind::Atwood);
    world.load_settings_json(r#"{"gravity": 0.0, "dt": 0.01}"#).unwrap();
    world.run();
    tick(&mut world);
    assert_eq!(world.scenario().bodies.masses[0].linear.acceleration, 0.0);
    assert_relative_eq!(world.time(), 0.01);

    assert!(world.set_gravity(f64::INFINITY).is_err());
    assert!(world.load_settings_json(r#"{"dt": -1}"#).is_err());
    assert_eq!(world.settings().dt, 0.01);
}

#[test]
fn perf_metrics_count_ticks_when_enabled() {
    let mut world = headless(ScenarioKind::Relay);
    tick(&mut world);
    assert_eq!(world.perf_stats().ticks_total(), 0);

    world.enable_perf_metrics(true);
    world.run();
    tick(&mut world);
    tick(&mut world);
    let stats = world.perf_stats();
    assert_eq!(stats.ticks_total(), 2);
    assert!(stats.tick_ms() >= 0.0);
    assert!(stats.waypoints() > 0);
}

#[test]
fn scene_manifest_serializes() {
    let world = headless(ScenarioKind::Counterweight);
    let manifest = world.scene_manifest();
    assert_eq!(manifest.index, 2);
    assert_eq!(manifest.bodies.len(), 3);
    assert_eq!(manifest.masses, vec![50.0]);

    let json: serde_json::Value = serde_json::from_str(&manifest.to_json()).unwrap();
    assert_eq!(json["scenario"], "counterweight");
    assert_eq!(json["tracked"][0]["quantity"], "velocity");
    assert_eq!(json["bodies"][0]["id"]["kind"], "pulley");
}
