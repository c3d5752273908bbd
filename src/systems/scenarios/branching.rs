//! A mass whose string feeds a free pulley, which in turn hangs from a
//! second string around another free pulley.
//!
//! The first free pulley moves at half the mass's rate, the second at a
//! quarter.

use std::f64::consts::PI;

use crate::core::error::SimError;
use crate::core::math::Vec3;
use crate::domain::constants::{COLOR_CYAN, COLOR_GREEN, COLOR_MAGENTA, COLOR_PULLEY};
use crate::domain::quantity::TrackedQuantity;
use crate::systems::bodies::{BodySet, KinematicBody, Mass, Pulley};
use crate::systems::string::StringRouter;

use super::proximity::{mass_reaches_pulley, pulleys_touch};
use super::{Rig, ScenarioLaw};

pub struct BranchingStrings;

impl ScenarioLaw for BranchingStrings {
    fn build(&self) -> Result<Rig, SimError> {
        let mut bodies = BodySet::new();
        let mass = bodies.add_mass(Mass::new(Vec3::xy(-12.0, -8.0), 150.0, COLOR_MAGENTA)?);
        let top = bodies.add_pulley(Pulley::new(Vec3::xy(-8.0, 10.0), 4.0, COLOR_PULLEY)?);
        let upper = bodies.add_pulley(Pulley::new(Vec3::xy(-1.0, 0.0), 3.0, COLOR_CYAN)?);
        let lower = bodies.add_pulley(Pulley::new(Vec3::xy(3.0, -11.0), 4.0, COLOR_GREEN)?);
        let first_anchor = bodies.add_pulley(Pulley::new(Vec3::xy(2.0, 12.0), 2.0, COLOR_PULLEY)?);
        let second_anchor = bodies.add_pulley(Pulley::new(Vec3::xy(7.0, 5.0), 2.0, COLOR_PULLEY)?);

        let main = StringRouter::attach_head(&bodies, mass)?
            .wrap(top, PI, 0.0)?
            .wrap(upper, PI, 2.0 * PI)?
            .attach_tail(first_anchor)?;
        let branch = StringRouter::attach_head(&bodies, upper)?
            .wrap(lower, PI, 2.0 * PI)?
            .attach_tail(second_anchor)?;

        let mut tracked = Vec::with_capacity(6);
        for quantity in [TrackedQuantity::Velocity, TrackedQuantity::Displacement] {
            tracked.extend([mass, upper, lower].map(|id| (id, quantity)));
        }

        Ok(Rig { bodies, strings: vec![main, branch], tracked })
    }

    fn assign_accelerations(&self, bodies: &mut BodySet, gravity: f64) {
        let m = bodies.masses[0].mass();
        let top_mass = bodies.pulleys[0].mass();
        let upper_mass = bodies.pulleys[1].mass();
        let lower_mass = bodies.pulleys[2].mass();
        let a = (upper_mass + 0.5 * lower_mass - 2.0 * m) * gravity
            / (2.0 * m + top_mass - 0.75 * upper_mass - 5.0 / 16.0 * lower_mass);

        let top = &mut bodies.pulleys[0];
        top.angular.acceleration = a / top.radius();
        let upper = &mut bodies.pulleys[1];
        upper.angular.acceleration = -0.5 * a / upper.radius();
        upper.linear.acceleration = -0.5 * a;
        let lower = &mut bodies.pulleys[2];
        lower.angular.acceleration = -0.25 * a / lower.radius();
        lower.linear.acceleration = -0.25 * a;
        bodies.masses[0].linear.acceleration = a;
    }

    fn is_terminal(&self, bodies: &BodySet) -> bool {
        mass_reaches_pulley(&bodies.masses[0], &bodies.pulleys[0])
            || pulleys_touch(&bodies.pulleys[3], &bodies.pulleys[1])
    }
}
