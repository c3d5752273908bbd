use serde::Serialize;

use crate::domain::quantity::TrackedQuantity;
use crate::systems::bodies::{BodyId, KinematicBody};
use crate::systems::scenarios::ScenarioKind;

use super::sinks::{BodyView, RenderSink};
use super::SimulationCore;

pub(super) fn body_views(world: &SimulationCore) -> Vec<BodyView> {
    let bodies = &world.scenario.bodies;
    let pulleys = bodies.pulleys.iter().enumerate().map(|(i, p)| BodyView {
        id: BodyId::Pulley(i),
        position: p.position(),
        center: p.position(),
        size: p.radius(),
        rotation: p.rotation(),
        color: p.color(),
    });
    let masses = bodies.masses.iter().enumerate().map(|(i, m)| BodyView {
        id: BodyId::Mass(i),
        position: m.position(),
        center: m.body_center(),
        size: m.width(),
        rotation: 0.0,
        color: m.color(),
    });
    pulleys.chain(masses).collect()
}

pub(super) fn emit_frame(world: &SimulationCore, sink: &mut dyn RenderSink) {
    sink.begin_frame(world.time);
    for view in body_views(world) {
        sink.body(&view);
    }
    for (index, string) in world.scenario.strings.iter().enumerate() {
        sink.string(index, string.waypoints());
    }
    sink.end_frame();
}

#[derive(Clone, Debug, Serialize)]
pub struct TrackedEntry {
    pub body: BodyId,
    pub quantity: TrackedQuantity,
    pub title: &'static str,
}

/// Static description of the live scene for setting up a front-end
#[derive(Clone, Debug, Serialize)]
pub struct SceneManifest {
    pub scenario: ScenarioKind,
    pub index: u32,
    pub name: &'static str,
    pub bodies: Vec<BodyView>,
    pub masses: Vec<f64>,
    pub string_count: usize,
    pub tracked: Vec<TrackedEntry>,
    pub gravity: f64,
    pub dt: f64,
}

impl SceneManifest {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

pub(super) fn scene_manifest(world: &SimulationCore) -> SceneManifest {
    let kind = world.scenario.kind();
    SceneManifest {
        scenario: kind,
        index: kind.index(),
        name: kind.name(),
        bodies: body_views(world),
        masses: world.scenario.bodies.masses.iter().map(|m| m.mass()).collect(),
        string_count: world.scenario.strings.len(),
        tracked: world
            .tracked
            .iter()
            .map(|&(body, quantity)| TrackedEntry { body, quantity, title: quantity.title() })
            .collect(),
        gravity: world.settings.gravity,
        dt: world.settings.dt,
    }
}
