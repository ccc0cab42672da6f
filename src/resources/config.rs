use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Fixed-step physics configuration shared by every vehicle in the world.
#[derive(Resource, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Integration timestep [s].
    pub timestep: f64,
    /// Gravitational acceleration [m/s^2], positive down.
    pub gravity: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: 1.0 / 120.0, // 120 Hz default physics rate
            gravity: 9.81,
        }
    }
}
