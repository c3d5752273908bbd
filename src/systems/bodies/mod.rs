//! Kinematic bodies - pulleys and masses
//!
//! Every body translates along a single fixed axis (`MOTION_AXIS`) with
//! constant acceleration between law evaluations. Pulleys also spin about
//! their axle.

mod mass;
mod motion;
mod pulley;
mod set;

pub use mass::Mass;
pub use motion::Motion;
pub use pulley::Pulley;
pub use set::{BodyId, BodySet};

use crate::core::math::Vec3;
use crate::domain::quantity::TrackedQuantity;

/// Capabilities shared by pulleys and masses
pub trait KinematicBody {
    /// Current position (string attachment point for masses, centre for pulleys)
    fn position(&self) -> Vec3;

    fn mass(&self) -> f64;

    fn linear(&self) -> &Motion;

    /// Advance by exactly one timestep of length `dt`
    fn update(&mut self, dt: f64);

    /// Read one of the six plot quantities
    fn quantity(&self, quantity: TrackedQuantity) -> f64;

    fn color(&self) -> u32;
}
