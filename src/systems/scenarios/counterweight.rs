//! One mass balanced against a free pulley hanging in a loop of the string.
//!
//! The string runs from the mass over the fixed pulley, down around the
//! free pulley and back up to the fixed pulley's axle, so the free pulley
//! moves half as far as the mass, in the opposite direction.

use std::f64::consts::PI;

use crate::core::error::SimError;
use crate::core::math::Vec3;
use crate::domain::constants::{COLOR_CYAN, COLOR_MAGENTA, COLOR_PULLEY};
use crate::domain::quantity::TrackedQuantity;
use crate::systems::bodies::{BodySet, KinematicBody, Mass, Pulley};
use crate::systems::string::StringRouter;

use super::proximity::{mass_reaches_pulley, pulleys_touch};
use super::{Rig, ScenarioLaw};

pub struct CounterweightPair;

impl ScenarioLaw for CounterweightPair {
    fn build(&self) -> Result<Rig, SimError> {
        let mut bodies = BodySet::new();
        let mass = bodies.add_mass(Mass::new(Vec3::xy(-4.0, -3.0), 50.0, COLOR_MAGENTA)?);
        let fixed = bodies.add_pulley(Pulley::new(Vec3::xy(0.0, 6.0), 4.0, COLOR_PULLEY)?);
        let free = bodies.add_pulley(Pulley::new(Vec3::xy(2.0, -6.0), 2.0, COLOR_CYAN)?);

        let string = StringRouter::attach_head(&bodies, mass)?
            .wrap(fixed, PI, 0.0)?
            .wrap(free, 2.0 * PI, PI)?
            .attach_tail(fixed)?;

        let tracked = vec![
            (mass, TrackedQuantity::Velocity),
            (free, TrackedQuantity::Velocity),
            (mass, TrackedQuantity::Displacement),
            (free, TrackedQuantity::Displacement),
        ];

        Ok(Rig { bodies, strings: vec![string], tracked })
    }

    fn assign_accelerations(&self, bodies: &mut BodySet, gravity: f64) {
        let m = bodies.masses[0].mass();
        let fixed_mass = bodies.pulleys[0].mass();
        let free_mass = bodies.pulleys[1].mass();
        // the free pulley both translates and spins: ¼ + ⅛ of its mass, doubled
        let a = (free_mass - 2.0 * m) * gravity / (2.0 * m + fixed_mass + 0.75 * free_mass);

        let fixed = &mut bodies.pulleys[0];
        fixed.angular.acceleration = a / fixed.radius();
        let free = &mut bodies.pulleys[1];
        free.angular.acceleration = 0.5 * a / free.radius();
        free.linear.acceleration = -0.5 * a;
        bodies.masses[0].linear.acceleration = a;
    }

    fn is_terminal(&self, bodies: &BodySet) -> bool {
        mass_reaches_pulley(&bodies.masses[0], &bodies.pulleys[0])
            || pulleys_touch(&bodies.pulleys[0], &bodies.pulleys[1])
    }
}
