use crate::core::error::SimError;
use crate::core::math::Vec3;
use crate::domain::constants::WRAP_STEP;
use crate::systems::bodies::{BodyId, BodySet, KinematicBody};

/// How a run of waypoints follows a body
#[derive(Clone, Debug, PartialEq)]
pub enum Binding {
    /// One waypoint sits exactly on the body's position
    Anchor { body: BodyId, index: usize },
    /// `arms.len()` consecutive waypoints starting at `start` sit at
    /// `pulley.position + arm`
    Wrap { pulley: usize, start: usize, arms: Vec<Vec3> },
}

/// Number of waypoints a wrap from `start_angle` to `end_angle` produces
#[inline]
pub fn wrap_sample_count(start_angle: f64, end_angle: f64) -> usize {
    ((end_angle - start_angle).abs() / WRAP_STEP).ceil() as usize + 1
}

#[derive(Clone, Debug, Default)]
pub struct StringRouter {
    waypoints: Vec<Vec3>,
    bindings: Vec<Binding>,
}

impl StringRouter {
    /// Start a route at `head`. Further segments are added on the returned
    /// builder and the route is closed with [`RouteBuilder::attach_tail`].
    pub fn attach_head(bodies: &BodySet, head: BodyId) -> Result<RouteBuilder<'_>, SimError> {
        let position = bodies.body(head)?.position();
        Ok(RouteBuilder {
            bodies,
            router: StringRouter {
                waypoints: vec![position],
                bindings: vec![Binding::Anchor { body: head, index: 0 }],
            },
        })
    }

    pub fn waypoints(&self) -> &[Vec3] {
        &self.waypoints
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Move every bound waypoint to follow its body
    pub fn update(&mut self, bodies: &BodySet) {
        for binding in &self.bindings {
            match binding {
                Binding::Anchor { body, index } => {
                    if let Some(b) = bodies.get(*body) {
                        self.waypoints[*index] = b.position();
                    }
                }
                Binding::Wrap { pulley, start, arms } => {
                    if let Some(p) = bodies.pulleys.get(*pulley) {
                        let center = p.position();
                        for (offset, arm) in arms.iter().enumerate() {
                            self.waypoints[start + offset] = center + *arm;
                        }
                    }
                }
            }
        }
    }
}

/// A route under construction. Holds the body set so pulley geometry can be
/// sampled while wrapping.
pub struct RouteBuilder<'a> {
    bodies: &'a BodySet,
    router: StringRouter,
}

impl<'a> RouteBuilder<'a> {
    /// Lay the string around `pulley` from `start_angle` to `end_angle`
    /// (radians, counter-clockwise from +x). Samples are `WRAP_STEP` apart
    /// and always include the exact end angle.
    pub fn wrap(mut self, pulley: BodyId, start_angle: f64, end_angle: f64) -> Result<Self, SimError> {
        let BodyId::Pulley(pulley) = pulley else {
            return Err(SimError::NotAPulley(pulley));
        };
        let p = self.bodies.pulley(pulley)?;
        let step = if start_angle > end_angle { -WRAP_STEP } else { WRAP_STEP };
        let samples = wrap_sample_count(start_angle, end_angle) - 1;

        let arms: Vec<Vec3> = (0..samples)
            .map(|i| Vec3::polar(p.radius(), start_angle + i as f64 * step))
            .chain(std::iter::once(Vec3::polar(p.radius(), end_angle)))
            .collect();

        let start = self.router.waypoints.len();
        let center = p.position();
        self.router.waypoints.extend(arms.iter().map(|arm| center + *arm));
        self.router.bindings.push(Binding::Wrap { pulley, start, arms });
        Ok(self)
    }

    /// Close the route at `tail`
    pub fn attach_tail(mut self, tail: BodyId) -> Result<StringRouter, SimError> {
        let position = self.bodies.body(tail)?.position();
        let index = self.router.waypoints.len();
        self.router.waypoints.push(position);
        self.router.bindings.push(Binding::Anchor { body: tail, index });
        Ok(self.router)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::domain::constants::{COLOR_MASS, COLOR_PULLEY};
    use crate::systems::bodies::{Mass, Pulley};
    use approx::assert_relative_eq;

    fn atwood_bodies() -> BodySet {
        let mut set = BodySet::new();
        set.add_pulley(Pulley::new(Vec3::xy(0.0, 5.0), 2.0, COLOR_PULLEY).unwrap());
        set.add_mass(Mass::new(Vec3::xy(-2.0, -1.0), 25.0, COLOR_MASS).unwrap());
        set.add_mass(Mass::new(Vec3::xy(2.0, -2.0), 20.0, COLOR_MASS).unwrap());
        set
    }

    fn atwood_route(set: &BodySet) -> StringRouter {
        StringRouter::attach_head(set, BodyId::Mass(0))
            .unwrap()
            .wrap(BodyId::Pulley(0), PI, 0.0)
            .unwrap()
            .attach_tail(BodyId::Mass(1))
            .unwrap()
    }

    #[test]
    fn sample_count_is_ceiled_span_over_step_plus_one() {
        assert_eq!(wrap_sample_count(PI, 0.0), 31);
        assert_eq!(wrap_sample_count(PI, PI / 2.0), 16);
        assert_eq!(wrap_sample_count(PI, 1.5 * PI), 16);
        assert_eq!(wrap_sample_count(0.0, 0.1), 2);
        assert_eq!(wrap_sample_count(1.0, 1.0), 1);
    }

    #[test]
    fn wrap_produces_expected_point_count_and_bindings() {
        let set = atwood_bodies();
        let s = atwood_route(&set);

        let wrap_len = 31;
        assert_eq!(s.len(), 1 + wrap_len + 1);
        assert_eq!(s.bindings().len(), 3);
        match &s.bindings()[1] {
            Binding::Wrap { pulley, start, arms } => {
                assert_eq!(*pulley, 0);
                assert_eq!(*start, 1);
                assert_eq!(arms.len(), wrap_len);
            }
            other => panic!("expected wrap binding, got {other:?}"),
        }
        assert_eq!(s.bindings()[2], Binding::Anchor { body: BodyId::Mass(1), index: s.len() - 1 });
    }

    #[test]
    fn wrap_runs_from_start_to_end_angle() {
        let set = atwood_bodies();
        let s = atwood_route(&set);
        let center = Vec3::xy(0.0, 5.0);
        let first = s.waypoints()[1] - center;
        let last = s.waypoints()[s.len() - 2] - center;

        assert_relative_eq!(first.x, -2.0, epsilon = 1e-12);
        assert_relative_eq!(first.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(last.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(last.y, 0.0, epsilon = 1e-12);
        // going from π down to 0 passes over the top of the pulley
        assert!(s.waypoints()[1..s.len() - 1].iter().all(|p| p.y >= 5.0 - 1e-12));
    }

    #[test]
    fn equal_angles_give_single_point_wrap() {
        let set = atwood_bodies();
        let s = StringRouter::attach_head(&set, BodyId::Mass(0))
            .unwrap()
            .wrap(BodyId::Pulley(0), 1.0, 1.0)
            .unwrap()
            .attach_tail(BodyId::Mass(1))
            .unwrap();
        assert_eq!(s.len(), 3);
        match &s.bindings()[1] {
            Binding::Wrap { start, arms, .. } => {
                assert_eq!(*start, 1);
                assert_eq!(arms.len(), 1);
                assert_relative_eq!(arms[0].x, 2.0 * 1.0_f64.cos(), epsilon = 1e-12);
                assert_relative_eq!(arms[0].y, 2.0 * 1.0_f64.sin(), epsilon = 1e-12);
            }
            other => panic!("expected wrap binding, got {other:?}"),
        }
    }

    #[test]
    fn points_follow_bodies_and_stay_on_rim() {
        let mut set = atwood_bodies();
        let mut s = atwood_route(&set);

        set.pulleys[0].linear.velocity = -1.5;
        set.masses[0].linear.acceleration = 2.0;
        for _ in 0..40 {
            set.update(0.02);
            s.update(&set);
        }

        let center = set.pulleys[0].position();
        assert_eq!(s.waypoints()[0], set.masses[0].position());
        assert_eq!(s.waypoints()[s.len() - 1], set.masses[1].position());
        for p in &s.waypoints()[1..s.len() - 1] {
            assert_relative_eq!(p.distance(center), 2.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn unknown_bodies_are_rejected() {
        let set = atwood_bodies();
        assert!(StringRouter::attach_head(&set, BodyId::Mass(7)).is_err());
        let err = StringRouter::attach_head(&set, BodyId::Mass(0))
            .unwrap()
            .wrap(BodyId::Pulley(4), 0.0, PI)
            .err();
        assert_eq!(err, Some(SimError::UnknownBody(BodyId::Pulley(4))));
    }

    #[test]
    fn wrapping_a_mass_is_rejected() {
        let set = atwood_bodies();
        let err = StringRouter::attach_head(&set, BodyId::Mass(0))
            .unwrap()
            .wrap(BodyId::Mass(1), 0.0, PI)
            .err();
        assert_eq!(err, Some(SimError::NotAPulley(BodyId::Mass(1))));
    }
}
