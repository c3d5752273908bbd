use serde::{Deserialize, Serialize};

use crate::core::error::SimError;

use super::{KinematicBody, Mass, Pulley};

/// Index of a body within its scenario
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum BodyId {
    Pulley(usize),
    Mass(usize),
}

impl BodyId {
    /// Decode the numeric kind used across the JS boundary: 0 is a pulley,
    /// 1 a mass. Any other kind is `None`.
    pub fn from_kind(kind: u8, index: usize) -> Option<Self> {
        match kind {
            0 => Some(BodyId::Pulley(index)),
            1 => Some(BodyId::Mass(index)),
            _ => None,
        }
    }
}

/// Bodies owned by one scenario instance
#[derive(Clone, Debug, Default)]
pub struct BodySet {
    pub pulleys: Vec<Pulley>,
    pub masses: Vec<Mass>,
}

impl BodySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_pulley(&mut self, pulley: Pulley) -> BodyId {
        self.pulleys.push(pulley);
        BodyId::Pulley(self.pulleys.len() - 1)
    }

    pub fn add_mass(&mut self, mass: Mass) -> BodyId {
        self.masses.push(mass);
        BodyId::Mass(self.masses.len() - 1)
    }

    pub fn get(&self, id: BodyId) -> Option<&dyn KinematicBody> {
        match id {
            BodyId::Pulley(i) => self.pulleys.get(i).map(|p| p as &dyn KinematicBody),
            BodyId::Mass(i) => self.masses.get(i).map(|m| m as &dyn KinematicBody),
        }
    }

    pub fn body(&self, id: BodyId) -> Result<&dyn KinematicBody, SimError> {
        self.get(id).ok_or(SimError::UnknownBody(id))
    }

    pub fn pulley(&self, index: usize) -> Result<&Pulley, SimError> {
        self.pulleys
            .get(index)
            .ok_or(SimError::UnknownBody(BodyId::Pulley(index)))
    }

    pub fn mass_mut(&mut self, index: usize) -> Result<&mut Mass, SimError> {
        self.masses
            .get_mut(index)
            .ok_or(SimError::UnknownBody(BodyId::Mass(index)))
    }

    /// Integrate every pulley, then every mass
    pub fn update(&mut self, dt: f64) {
        for p in &mut self.pulleys {
            p.update(dt);
        }
        for m in &mut self.masses {
            m.update(dt);
        }
    }
}
