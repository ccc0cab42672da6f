use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Normalized per-motor commands in [0, 1], in the airframe's fixed motor
/// order. Produced by the mixer, consumed by the rotor force stage and by
/// any external actuation collaborator.
#[derive(Component, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MotorCommands(pub Vec<f64>);

impl MotorCommands {
    pub fn zeros(count: usize) -> Self {
        Self(vec![0.0; count])
    }
}
