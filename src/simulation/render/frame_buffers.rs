//! Flat frame buffers for zero-copy reads from JavaScript

use crate::core::math::Vec3;
use crate::systems::bodies::BodyId;

use super::sinks::{BodyView, RenderSink};

/// f64 slots per body: kind, index, x, y, z, centre y, size, rotation, colour
pub const BODY_STRIDE: usize = 9;

pub const KIND_PULLEY: f64 = 0.0;
pub const KIND_MASS: f64 = 1.0;

/// A [`RenderSink`] that packs the last frame into contiguous buffers.
///
/// `bodies` holds `BODY_STRIDE` values per body. `waypoints` holds x, y, z
/// per point for every string back to back; `string_offsets[i]` is the first
/// point of string `i` and the final entry is the total point count.
#[derive(Clone, Debug, Default)]
pub struct FrameBuffers {
    pub(crate) time: f64,
    pub(crate) bodies: Vec<f64>,
    pub(crate) waypoints: Vec<f64>,
    pub(crate) string_offsets: Vec<u32>,
}

impl FrameBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn bodies(&self) -> &[f64] {
        &self.bodies
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len() / BODY_STRIDE
    }

    pub fn waypoints(&self) -> &[f64] {
        &self.waypoints
    }

    pub fn string_offsets(&self) -> &[u32] {
        &self.string_offsets
    }

    /// Points of string `index`, if present
    pub fn string_points(&self, index: usize) -> Option<Vec<Vec3>> {
        let start = *self.string_offsets.get(index)? as usize;
        let end = *self.string_offsets.get(index + 1)? as usize;
        Some(
            self.waypoints[start * 3..end * 3]
                .chunks_exact(3)
                .map(|c| Vec3::new(c[0], c[1], c[2]))
                .collect(),
        )
    }
}

impl RenderSink for FrameBuffers {
    fn begin_frame(&mut self, time: f64) {
        self.time = time;
        self.bodies.clear();
        self.waypoints.clear();
        self.string_offsets.clear();
    }

    fn body(&mut self, view: &BodyView) {
        let (kind, index) = match view.id {
            BodyId::Pulley(i) => (KIND_PULLEY, i),
            BodyId::Mass(i) => (KIND_MASS, i),
        };
        self.bodies.extend_from_slice(&[
            kind,
            index as f64,
            view.position.x,
            view.position.y,
            view.position.z,
            view.center.y,
            view.size,
            view.rotation,
            view.color as f64,
        ]);
    }

    fn string(&mut self, _index: usize, waypoints: &[Vec3]) {
        self.string_offsets.push((self.waypoints.len() / 3) as u32);
        for p in waypoints {
            self.waypoints.extend_from_slice(&[p.x, p.y, p.z]);
        }
    }

    fn end_frame(&mut self) {
        self.string_offsets.push((self.waypoints.len() / 3) as u32);
    }
}
