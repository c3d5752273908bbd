//! Contact tests used by the terminal predicates.
//!
//! Contact holds once the gap between a probe point and a pulley rim has
//! closed, tangency included.

use crate::core::math::Vec3;
use crate::systems::bodies::{KinematicBody, Mass, Pulley};

/// Distance from `probe` to the circle of radius `reach` around `center`.
/// Negative once the probe is inside.
#[inline]
pub fn proximity_gap(probe: Vec3, center: Vec3, reach: f64) -> f64 {
    probe.distance(center) - reach
}

#[inline]
pub fn in_contact(probe: Vec3, center: Vec3, reach: f64) -> bool {
    proximity_gap(probe, center, reach) <= 0.0
}

/// The top corner of the mass on the side facing the pulley
pub fn mass_probe(mass: &Mass, pulley: &Pulley) -> Vec3 {
    let toward = (pulley.position().x - mass.position().x).signum();
    mass.position() + Vec3::xy(toward * mass.width() / 2.0, 0.0)
}

pub fn mass_reaches_pulley(mass: &Mass, pulley: &Pulley) -> bool {
    in_contact(mass_probe(mass, pulley), pulley.position(), pulley.radius())
}

pub fn pulleys_touch(a: &Pulley, b: &Pulley) -> bool {
    in_contact(a.position(), b.position(), a.radius() + b.radius())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constants::{COLOR_MASS, COLOR_PULLEY};

    #[test]
    fn tangency_counts_as_contact() {
        let center = Vec3::xy(0.0, 5.0);
        assert!(in_contact(Vec3::xy(0.0, 3.0), center, 2.0));
        assert!(in_contact(Vec3::xy(0.0, 4.0), center, 2.0));
        assert!(!in_contact(Vec3::xy(0.0, 3.0 - 1e-9), center, 2.0));
        assert_eq!(proximity_gap(Vec3::xy(0.0, 0.0), center, 2.0), 3.0);
    }

    #[test]
    fn probe_faces_the_pulley() {
        let pulley = Pulley::new(Vec3::xy(0.0, 5.0), 2.0, COLOR_PULLEY).unwrap();
        let left = Mass::new(Vec3::xy(-2.0, -1.0), 8.0, COLOR_MASS).unwrap();
        let right = Mass::new(Vec3::xy(2.0, -1.0), 8.0, COLOR_MASS).unwrap();
        assert_eq!(mass_probe(&left, &pulley), Vec3::xy(-1.5, -1.0));
        assert_eq!(mass_probe(&right, &pulley), Vec3::xy(1.5, -1.0));
    }

    #[test]
    fn pulleys_touch_when_rims_meet() {
        let a = Pulley::new(Vec3::xy(0.0, 6.0), 4.0, COLOR_PULLEY).unwrap();
        let b = Pulley::new(Vec3::xy(0.0, 0.0), 2.0, COLOR_PULLEY).unwrap();
        let c = Pulley::new(Vec3::xy(0.0, -0.5), 2.0, COLOR_PULLEY).unwrap();
        assert!(pulleys_touch(&a, &b));
        assert!(!pulleys_touch(&a, &c));
    }
}
