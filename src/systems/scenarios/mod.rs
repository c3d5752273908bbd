//! Scenarios - the four built-in pulley topologies
//!
//! A scenario bundles the bodies and strings it builds with an acceleration
//! law and a terminal predicate. Each topology implements [`ScenarioLaw`];
//! [`ScenarioKind`] selects one and dispatches to it.

mod atwood;
mod branching;
mod counterweight;
mod proximity;
mod relay;

pub use atwood::{atwood_acceleration, AtwoodMachine};
pub use branching::BranchingStrings;
pub use counterweight::CounterweightPair;
pub use proximity::{in_contact, mass_probe, mass_reaches_pulley, proximity_gap, pulleys_touch};
pub use relay::FourPulleyRelay;

use serde::{Deserialize, Serialize};

use crate::core::error::SimError;
use crate::domain::quantity::TrackedQuantity;
use crate::systems::bodies::{BodyId, BodySet};
use crate::systems::string::StringRouter;

/// Everything a topology builds at setup
pub struct Rig {
    pub bodies: BodySet,
    pub strings: Vec<StringRouter>,
    /// Quantities plotted by default
    pub tracked: Vec<(BodyId, TrackedQuantity)>,
}

/// Behaviour of one topology
pub trait ScenarioLaw {
    fn build(&self) -> Result<Rig, SimError>;

    /// Write this frame's accelerations from the current mass values
    fn assign_accelerations(&self, bodies: &mut BodySet, gravity: f64);

    fn is_terminal(&self, bodies: &BodySet) -> bool;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    #[default]
    Atwood,
    Relay,
    Counterweight,
    Branching,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 4] = [
        ScenarioKind::Atwood,
        ScenarioKind::Relay,
        ScenarioKind::Counterweight,
        ScenarioKind::Branching,
    ];

    pub fn from_index(index: u32) -> Result<Self, SimError> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(SimError::UnknownScenario(index))
    }

    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            ScenarioKind::Atwood => "Simple Atwood machine",
            ScenarioKind::Relay => "Four-pulley relay",
            ScenarioKind::Counterweight => "Mass and free pulley",
            ScenarioKind::Branching => "Branching strings",
        }
    }
}

impl ScenarioLaw for ScenarioKind {
    fn build(&self) -> Result<Rig, SimError> {
        match self {
            ScenarioKind::Atwood => AtwoodMachine.build(),
            ScenarioKind::Relay => FourPulleyRelay.build(),
            ScenarioKind::Counterweight => CounterweightPair.build(),
            ScenarioKind::Branching => BranchingStrings.build(),
        }
    }

    fn assign_accelerations(&self, bodies: &mut BodySet, gravity: f64) {
        match self {
            ScenarioKind::Atwood => AtwoodMachine.assign_accelerations(bodies, gravity),
            ScenarioKind::Relay => FourPulleyRelay.assign_accelerations(bodies, gravity),
            ScenarioKind::Counterweight => CounterweightPair.assign_accelerations(bodies, gravity),
            ScenarioKind::Branching => BranchingStrings.assign_accelerations(bodies, gravity),
        }
    }

    fn is_terminal(&self, bodies: &BodySet) -> bool {
        match self {
            ScenarioKind::Atwood => AtwoodMachine.is_terminal(bodies),
            ScenarioKind::Relay => FourPulleyRelay.is_terminal(bodies),
            ScenarioKind::Counterweight => CounterweightPair.is_terminal(bodies),
            ScenarioKind::Branching => BranchingStrings.is_terminal(bodies),
        }
    }
}

/// A live scenario instance. Owns its bodies and strings; dropping it drops
/// them.
pub struct Scenario {
    kind: ScenarioKind,
    pub bodies: BodySet,
    pub strings: Vec<StringRouter>,
    default_tracked: Vec<(BodyId, TrackedQuantity)>,
}

impl Scenario {
    pub fn new(kind: ScenarioKind) -> Result<Self, SimError> {
        let Rig { bodies, strings, tracked } = kind.build()?;
        Ok(Self { kind, bodies, strings, default_tracked: tracked })
    }

    pub fn kind(&self) -> ScenarioKind {
        self.kind
    }

    pub fn default_tracked(&self) -> &[(BodyId, TrackedQuantity)] {
        &self.default_tracked
    }

    pub fn assign_accelerations(&mut self, gravity: f64) {
        self.kind.assign_accelerations(&mut self.bodies, gravity);
    }

    /// Integrate every body by one step
    pub fn integrate(&mut self, dt: f64) {
        self.bodies.update(dt);
    }

    pub fn update_strings(&mut self) {
        for s in &mut self.strings {
            s.update(&self.bodies);
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.kind.is_terminal(&self.bodies)
    }

    pub fn adjust_mass(&mut self, index: usize, value: f64) -> Result<(), SimError> {
        self.bodies.mass_mut(index)?.set_mass(value)
    }
}
