//! Boundary traits for the collaborators that consume each frame

use serde::Serialize;

use crate::core::math::Vec3;
use crate::domain::quantity::TrackedQuantity;
use crate::systems::bodies::BodyId;

/// Render-facing snapshot of one body
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BodyView {
    pub id: BodyId,
    /// Pulley centre, or the string attachment point of a mass
    pub position: Vec3,
    /// Centre of the drawn shape
    pub center: Vec3,
    /// Pulley radius or cube edge length
    pub size: f64,
    /// Spin of the pulley's visual axis (0 for masses)
    pub rotation: f64,
    pub color: u32,
}

/// Consumes body transforms and string polylines after each tick
pub trait RenderSink {
    fn begin_frame(&mut self, _time: f64) {}

    fn body(&mut self, view: &BodyView);

    fn string(&mut self, index: usize, waypoints: &[Vec3]);

    fn end_frame(&mut self) {}
}

/// One `(time, value)` point of a tracked quantity
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PlotSample {
    pub body: BodyId,
    pub quantity: TrackedQuantity,
    pub time: f64,
    pub value: f64,
}

/// Consumes plot samples of the tracked quantities while running
pub trait PlotSink {
    fn sample(&mut self, sample: PlotSample);
}

/// Sink that drops everything, for headless stepping
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn body(&mut self, _view: &BodyView) {}

    fn string(&mut self, _index: usize, _waypoints: &[Vec3]) {}
}

impl PlotSink for NullSink {
    fn sample(&mut self, _sample: PlotSample) {}
}

impl PlotSink for Vec<PlotSample> {
    fn sample(&mut self, sample: PlotSample) {
        self.push(sample);
    }
}
