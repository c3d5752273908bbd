use crate::core::error::SimError;
use crate::core::math::Vec3;
use crate::domain::constants::MOTION_AXIS;
use crate::domain::quantity::TrackedQuantity;

use super::{KinematicBody, Motion};

/// A hanging cube. `position` is the centre of its top face, where the
/// string attaches; the cube hangs below it.
#[derive(Clone, Debug)]
pub struct Mass {
    position: Vec3,
    mass: f64,
    width: f64,
    pub linear: Motion,
    color: u32,
}

impl Mass {
    pub fn new(position: Vec3, mass: f64, color: u32) -> Result<Self, SimError> {
        Self::check(mass)?;
        Ok(Self {
            position,
            mass,
            width: Self::width_for_mass(mass),
            linear: Motion::default(),
            color,
        })
    }

    /// Edge length of a cube whose volume scales with its mass
    #[inline]
    pub fn width_for_mass(mass: f64) -> f64 {
        mass.cbrt() / 2.0
    }

    fn check(mass: f64) -> Result<(), SimError> {
        if mass.is_finite() && mass > 0.0 {
            Ok(())
        } else {
            Err(SimError::InvalidMass(mass))
        }
    }

    /// Change the mass and everything derived from it
    pub fn set_mass(&mut self, mass: f64) -> Result<(), SimError> {
        Self::check(mass)?;
        self.mass = mass;
        self.width = Self::width_for_mass(mass);
        Ok(())
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Centre of the cube
    pub fn body_center(&self) -> Vec3 {
        self.position - MOTION_AXIS * (self.width / 2.0)
    }
}

impl KinematicBody for Mass {
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
        let ds = self.linear.advance(dt);
        self.position += MOTION_AXIS * ds;
    }

    fn quantity(&self, quantity: TrackedQuantity) -> f64 {
        match quantity {
            TrackedQuantity::Displacement => self.linear.displacement,
            TrackedQuantity::Velocity => self.linear.velocity,
            TrackedQuantity::Acceleration => self.linear.acceleration,
            // masses never spin
            _ => 0.0,
        }
    }

    fn color(&self) -> u32 {
        self.color
    }
}
