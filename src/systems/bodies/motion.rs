/// Scalar state along one degree of freedom
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Motion {
    pub displacement: f64,
    pub velocity: f64,
    pub acceleration: f64,
}

impl Motion {
    /// Constant-acceleration step. Returns the displacement covered.
    ///
    /// `Δ = v·dt + ½·a·dt²`, then `v += a·dt`.
    #[inline]
    pub fn advance(&mut self, dt: f64) -> f64 {
        let delta = self.velocity * dt + 0.5 * self.acceleration * dt * dt;
        self.displacement += delta;
        self.velocity += self.acceleration * dt;
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn at_rest_without_acceleration_stays_put() {
        let mut m = Motion::default();
        for dt in [0.0, 0.02, 1.0, 10.0] {
            assert_eq!(m.advance(dt), 0.0);
        }
        assert_eq!(m, Motion::default());
    }

    #[test]
    fn matches_closed_form_after_many_steps() {
        let a = -0.75;
        let dt = 0.02;
        let mut m = Motion { acceleration: a, ..Motion::default() };
        for n in 1..=250 {
            m.advance(dt);
            let t = n as f64 * dt;
            assert_relative_eq!(m.velocity, a * t, epsilon = 1e-12);
            assert_relative_eq!(m.displacement, 0.5 * a * t * t, epsilon = 1e-10);
        }
    }
}
