use std::f64::consts::PI;

use crate::core::error::SimError;
use crate::core::math::Vec3;
use crate::domain::constants::MOTION_AXIS;
use crate::domain::quantity::TrackedQuantity;

use super::{KinematicBody, Motion};

/// A disc pulley. Its mass is proportional to its face area.
#[derive(Clone, Debug)]
pub struct Pulley {
    position: Vec3,
    radius: f64,
    mass: f64,
    /// Translation of the centre (non-zero only for free pulleys)
    pub linear: Motion,
    /// Spin about the axle; `displacement` is the rotation of the visual axis
    pub angular: Motion,
    color: u32,
}

impl Pulley {
    pub fn new(position: Vec3, radius: f64, color: u32) -> Result<Self, SimError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimError::InvalidRadius(radius));
        }
        Ok(Self {
            position,
            radius,
            mass: Self::mass_for_radius(radius),
            linear: Motion::default(),
            angular: Motion::default(),
            color,
        })
    }

    /// `4·π·r²`
    #[inline]
    pub fn mass_for_radius(radius: f64) -> f64 {
        4.0 * PI * radius * radius
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Accumulated spin of the body, for renderers
    pub fn rotation(&self) -> f64 {
        self.angular.displacement
    }
}

impl KinematicBody for Pulley {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn mass(&self) -> f64 {
        self.mass
    }

    fn linear(&self) -> &Motion {
        &self.linear
    }

    fn update(&mut self, dt: f64) {
        self.angular.advance(dt);
        let dx = self.linear.advance(dt);
        self.position += MOTION_AXIS * dx;
    }

    fn quantity(&self, quantity: TrackedQuantity) -> f64 {
        match quantity {
            TrackedQuantity::Displacement => self.linear.displacement,
            TrackedQuantity::Velocity => self.linear.velocity,
            TrackedQuantity::Acceleration => self.linear.acceleration,
            TrackedQuantity::AngularDisplacement => self.angular.displacement,
            TrackedQuantity::AngularVelocity => self.angular.velocity,
            TrackedQuantity::AngularAcceleration => self.angular.acceleration,
        }
    }

    fn color(&self) -> u32 {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constants::COLOR_PULLEY;
    use approx::assert_relative_eq;

    #[test]
    fn mass_follows_radius() {
        let p = Pulley::new(Vec3::xy(0.0, 5.0), 2.0, COLOR_PULLEY).unwrap();
        assert_relative_eq!(p.mass(), 16.0 * PI);
    }

    #[test]
    fn rejects_non_positive_radius() {
        assert_eq!(
            Pulley::new(Vec3::ZERO, 0.0, COLOR_PULLEY).unwrap_err(),
            SimError::InvalidRadius(0.0)
        );
        assert!(Pulley::new(Vec3::ZERO, -1.0, COLOR_PULLEY).is_err());
        assert!(Pulley::new(Vec3::ZERO, f64::NAN, COLOR_PULLEY).is_err());
    }

    #[test]
    fn update_spins_and_translates_along_axis() {
        let mut p = Pulley::new(Vec3::xy(2.0, -6.0), 2.0, COLOR_PULLEY).unwrap();
        p.angular.acceleration = 1.0;
        p.linear.acceleration = -2.0;
        p.update(0.1);

        assert_relative_eq!(p.rotation(), 0.005, epsilon = 1e-15);
        assert_relative_eq!(p.angular.velocity, 0.1, epsilon = 1e-15);
        assert_relative_eq!(p.position().y, -6.01, epsilon = 1e-12);
        assert_eq!(p.position().x, 2.0);
        assert_relative_eq!(p.quantity(TrackedQuantity::Displacement), -0.01, epsilon = 1e-15);
    }
}
