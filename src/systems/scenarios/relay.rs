//! Two masses joined by one string threaded over four fixed pulleys

use std::f64::consts::PI;

use crate::core::error::SimError;
use crate::core::math::Vec3;
use crate::domain::constants::{COLOR_BLUE, COLOR_CYAN, COLOR_GREEN, COLOR_MASS, COLOR_PURPLE};
use crate::domain::quantity::TrackedQuantity;
use crate::systems::bodies::{BodySet, KinematicBody, Mass, Pulley};
use crate::systems::string::StringRouter;

use super::proximity::mass_reaches_pulley;
use super::{Rig, ScenarioLaw};

pub struct FourPulleyRelay;

/// Spin sense of each pulley relative to the string's travel. The third
/// pulley is wrapped from below, so it turns the other way.
const SPIN_SENSE: [f64; 4] = [1.0, 1.0, -1.0, 1.0];

impl ScenarioLaw for FourPulleyRelay {
    fn build(&self) -> Result<Rig, SimError> {
        let origin = Vec3::xy(-3.0, 0.0);
        let mut bodies = BodySet::new();
        let left = bodies.add_mass(Mass::new(Vec3::xy(-14.0, -10.0) - origin, 10.0, COLOR_MASS)?);
        let right = bodies.add_mass(Mass::new(Vec3::xy(9.0, -10.0) - origin, 20.0, COLOR_MASS)?);

        let pulleys = [
            (Vec3::xy(-10.0, 5.0), 4.0, COLOR_GREEN),
            (Vec3::xy(0.0, 6.0), 3.0, COLOR_CYAN),
            (Vec3::xy(5.0, 2.0), 2.0, COLOR_BLUE),
            (Vec3::xy(8.0, -1.0), 1.0, COLOR_PURPLE),
        ];
        let mut tracked = Vec::with_capacity(pulleys.len() * 2);
        let mut ids = Vec::with_capacity(pulleys.len());
        for (pos, radius, color) in pulleys {
            ids.push(bodies.add_pulley(Pulley::new(pos - origin, radius, color)?));
        }
        for quantity in [TrackedQuantity::AngularVelocity, TrackedQuantity::AngularDisplacement] {
            tracked.extend(ids.iter().map(|&id| (id, quantity)));
        }

        let string = StringRouter::attach_head(&bodies, left)?
            .wrap(ids[0], PI, PI / 2.0)?
            .wrap(ids[1], PI / 2.0, 0.0)?
            .wrap(ids[2], PI, 1.5 * PI)?
            .wrap(ids[3], PI / 2.0, 0.0)?
            .attach_tail(right)?;

        Ok(Rig { bodies, strings: vec![string], tracked })
    }

    fn assign_accelerations(&self, bodies: &mut BodySet, gravity: f64) {
        let m0 = bodies.masses[0].mass();
        let m1 = bodies.masses[1].mass();
        let pulley_mass: f64 = bodies.pulleys.iter().map(|p| p.mass()).sum();
        let a = (m1 - m0) * gravity / (m0 + m1 + 0.5 * pulley_mass);

        for (pulley, sense) in bodies.pulleys.iter_mut().zip(SPIN_SENSE) {
            pulley.angular.acceleration = sense * a / pulley.radius();
        }
        bodies.masses[0].linear.acceleration = a;
        bodies.masses[1].linear.acceleration = -a;
    }

    fn is_terminal(&self, bodies: &BodySet) -> bool {
        mass_reaches_pulley(&bodies.masses[0], &bodies.pulleys[0])
            || mass_reaches_pulley(&bodies.masses[1], &bodies.pulleys[3])
    }
}
