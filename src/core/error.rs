//! Contract violations surfaced by the engine.
//!
//! Nothing in a running tick can fail; these are raised when a scenario is
//! built or when a command is submitted, before any state is touched.

use thiserror::Error;

use crate::systems::bodies::BodyId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("mass must be positive and finite, got {0}")]
    InvalidMass(f64),

    #[error("pulley radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("mass adjustment {value} is outside {min}..={max}")]
    MassOutOfRange { value: f64, min: f64, max: f64 },

    #[error("no body {0:?} in this scenario")]
    UnknownBody(BodyId),

    #[error("body {0:?} is not a pulley")]
    NotAPulley(BodyId),

    #[error("unknown scenario index {0}")]
    UnknownScenario(u32),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}
