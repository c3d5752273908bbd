//! Two masses hanging either side of one fixed pulley

use std::f64::consts::PI;

use crate::core::error::SimError;
use crate::core::math::Vec3;
use crate::domain::constants::{COLOR_BLUE, COLOR_PULLEY, COLOR_RED};
use crate::domain::quantity::TrackedQuantity;
use crate::systems::bodies::{BodySet, KinematicBody, Mass, Pulley};
use crate::systems::string::StringRouter;

use super::proximity::mass_reaches_pulley;
use super::{Rig, ScenarioLaw};

pub struct AtwoodMachine;

/// Shared acceleration of an ideal Atwood machine with a massive pulley.
/// Positive when `m1` is heavier (then `m0` rises).
#[inline]
pub fn atwood_acceleration(m0: f64, m1: f64, pulley_mass: f64, gravity: f64) -> f64 {
    (m1 - m0) * gravity / (m0 + m1 + 0.5 * pulley_mass)
}

impl ScenarioLaw for AtwoodMachine {
    fn build(&self) -> Result<Rig, SimError> {
        let mut bodies = BodySet::new();
        let left = bodies.add_mass(Mass::new(Vec3::xy(-2.0, -1.0), 25.0, COLOR_RED)?);
        let right = bodies.add_mass(Mass::new(Vec3::xy(2.0, -2.0), 20.0, COLOR_BLUE)?);
        let pulley = bodies.add_pulley(Pulley::new(Vec3::xy(0.0, 5.0), 2.0, COLOR_PULLEY)?);

        let string = StringRouter::attach_head(&bodies, left)?
            .wrap(pulley, PI, 0.0)?
            .attach_tail(right)?;

        let tracked = vec![
            (left, TrackedQuantity::Velocity),
            (right, TrackedQuantity::Velocity),
            (left, TrackedQuantity::Displacement),
            (right, TrackedQuantity::Displacement),
        ];

        Ok(Rig { bodies, strings: vec![string], tracked })
    }

    fn assign_accelerations(&self, bodies: &mut BodySet, gravity: f64) {
        let a = atwood_acceleration(
            bodies.masses[0].mass(),
            bodies.masses[1].mass(),
            bodies.pulleys[0].mass(),
            gravity,
        );
        let pulley = &mut bodies.pulleys[0];
        pulley.angular.acceleration = a / pulley.radius();
        bodies.masses[0].linear.acceleration = a;
        bodies.masses[1].linear.acceleration = -a;
    }

    fn is_terminal(&self, bodies: &BodySet) -> bool {
        let pulley = &bodies.pulleys[0];
        mass_reaches_pulley(&bodies.masses[0], pulley)
            || mass_reaches_pulley(&bodies.masses[1], pulley)
    }
}
