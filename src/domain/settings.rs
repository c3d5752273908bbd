//! Run-time configuration, loadable from JSON

use serde::{Deserialize, Serialize};

use crate::core::error::SimError;

use super::constants::{ACCEL_G, DT, MAX_TICKS_PER_ADVANCE};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimSettings {
    /// Magnitude of gravitational acceleration fed to the acceleration laws
    pub gravity: f64,
    /// Fixed timestep per tick (seconds)
    pub dt: f64,
    /// Cap on ticks run by one wall-clock advance
    pub max_ticks_per_advance: u32,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            gravity: ACCEL_G,
            dt: DT,
            max_ticks_per_advance: MAX_TICKS_PER_ADVANCE,
        }
    }
}

impl SimSettings {
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let settings: SimSettings =
            serde_json::from_str(json).map_err(|e| SimError::InvalidSettings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if !self.gravity.is_finite() {
            return Err(SimError::InvalidSettings(format!("gravity must be finite, got {}", self.gravity)));
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SimError::InvalidSettings(format!("dt must be positive, got {}", self.dt)));
        }
        if self.max_ticks_per_advance == 0 {
            return Err(SimError::InvalidSettings("max_ticks_per_advance must be at least 1".into()));
        }
        Ok(())
    }
}
