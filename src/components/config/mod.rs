mod gains;
mod layout;
mod loader;
mod mass;
mod start;

pub use gains::{AltHoldGains, AngleGains, ControlGains, FlowHoldGains, YawRateGains};
pub use layout::{RotorGeometry, RotorLayout};
pub use loader::ConfigError;
pub use mass::MassModel;
pub use start::{FixedStartConfig, RandomStartConfig, StartConfig};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Complete per-vehicle-model constants: mass properties, rotor
/// aerodynamic coefficients, airframe layout, control tuning and spawn
/// pose. Immutable once validated; referenced read-only by the dynamics
/// stages and the mixer.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleConfig {
    /// Vehicle identification.
    pub name: String,
    /// Mass and inertia constants.
    pub mass: MassModel,
    /// Rotor thrust coefficient b [N s^2], F = b * omega^2.
    pub thrust_coefficient: f64,
    /// Rotor drag/torque coefficient d [N m s^2], T = d * omega^2.
    pub torque_coefficient: f64,
    /// Maximum motor speed [rpm]; a full-scale command maps here.
    pub max_rpm: f64,
    /// Rotor layout and geometry weighting.
    pub layout: RotorLayout,
    /// Control pipeline tuning.
    pub gains: ControlGains,
    /// Spawn pose.
    pub start: StartConfig,
}

impl VehicleConfig {
    /// Checks the constants a simulation cannot run without. Called by the
    /// vehicle plugin and the config loader; failure is fatal at
    /// construction, never mid-loop.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mass.mass <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "{}: mass must be positive, got {}",
                self.name, self.mass.mass
            )));
        }
        if self.mass.ixx <= 0.0 || self.mass.iyy <= 0.0 || self.mass.izz <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "{}: inertia moments must be positive",
                self.name
            )));
        }
        if self.max_rpm <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "{}: max_rpm must be positive, got {}",
                self.name, self.max_rpm
            )));
        }
        if self.thrust_coefficient <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "{}: thrust coefficient must be positive",
                self.name
            )));
        }
        if self.layout.rotor_count() == 0 {
            return Err(ConfigError::ValidationError(format!(
                "{}: rotor layout has no rotors",
                self.name
            )));
        }
        Ok(())
    }

    /// DJI Phantom: symmetric quad-X, props at +/-0.12 m on each axis.
    pub fn phantom() -> Self {
        Self {
            name: "phantom".to_string(),
            mass: MassModel::new(1.380, 1.15e-2, 1.15e-2, 2.18e-2, 3.8e-5),
            thrust_coefficient: 5.0e-6,
            torque_coefficient: 2.0e-6,
            max_rpm: 15000.0,
            layout: RotorLayout::QuadX { arm_length: 0.17 },
            gains: ControlGains::default(),
            start: StartConfig::default(),
        }
    }

    /// 3DR Iris: ArduPilot quad-X with unequal front/rear arm offsets and
    /// bench-measured rotor coefficients.
    pub fn iris() -> Self {
        Self {
            name: "iris".to_string(),
            mass: MassModel::new(1.50, 2.9e-2, 2.9e-2, 5.5e-2, 3.8e-5),
            thrust_coefficient: 5.30216718361085e-5,
            torque_coefficient: 2.23656692806239e-6,
            max_rpm: 10000.0,
            layout: RotorLayout::Offsets {
                rotors: vec![
                    // front-right, ccw
                    RotorGeometry {
                        x: 0.150,
                        y: 0.240,
                        spin: 1.0,
                    },
                    // rear-left, ccw
                    RotorGeometry {
                        x: -0.150,
                        y: -0.225,
                        spin: 1.0,
                    },
                    // front-left, cw
                    RotorGeometry {
                        x: 0.150,
                        y: -0.240,
                        spin: -1.0,
                    },
                    // rear-right, cw
                    RotorGeometry {
                        x: -0.150,
                        y: 0.225,
                        spin: -1.0,
                    },
                ],
            },
            gains: ControlGains::default(),
            start: StartConfig::default(),
        }
    }

    /// Vectored-thrust test article: two coaxial rotors plus a gimballed
    /// nozzle with 45 degrees of travel.
    pub fn rocket() -> Self {
        Self {
            name: "rocket".to_string(),
            mass: MassModel::new(2.0, 1.0e-1, 1.0e-1, 5.0e-2, 5.0e-5),
            thrust_coefficient: 5.0e-6,
            torque_coefficient: 2.0e-6,
            max_rpm: 20000.0,
            layout: RotorLayout::VectoredThrust {
                nozzle_max_angle: 45.0_f64.to_radians(),
                moment_arm: 0.25,
            },
            gains: ControlGains::default(),
            start: StartConfig::default(),
        }
    }
}
