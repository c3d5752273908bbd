//! The six per-body quantities a plot can follow

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackedQuantity {
    Displacement,
    Velocity,
    Acceleration,
    AngularDisplacement,
    AngularVelocity,
    AngularAcceleration,
}

impl TrackedQuantity {
    pub const ALL: [TrackedQuantity; 6] = [
        TrackedQuantity::Displacement,
        TrackedQuantity::Velocity,
        TrackedQuantity::Acceleration,
        TrackedQuantity::AngularDisplacement,
        TrackedQuantity::AngularVelocity,
        TrackedQuantity::AngularAcceleration,
    ];

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Graph title used by plotting front-ends
    pub fn title(self) -> &'static str {
        match self {
            TrackedQuantity::Displacement => "Displacement vs Time",
            TrackedQuantity::Velocity => "Velocity vs Time",
            TrackedQuantity::Acceleration => "Acceleration vs Time",
            TrackedQuantity::AngularDisplacement => "Angular Displacement vs Time",
            TrackedQuantity::AngularVelocity => "Angular Velocity vs Time",
            TrackedQuantity::AngularAcceleration => "Angular Acceleration vs Time",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_for_every_quantity() {
        for q in TrackedQuantity::ALL {
            assert_eq!(TrackedQuantity::from_index(q.index()), Some(q));
        }
        assert_eq!(TrackedQuantity::from_index(6), None);
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&TrackedQuantity::AngularVelocity).unwrap();
        assert_eq!(json, "\"angular_velocity\"");
    }
}
