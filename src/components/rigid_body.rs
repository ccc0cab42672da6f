use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Internal rigid-body state used by the dynamics integrator.
///
/// North-east-down inertial frame, SI units, radians. z is positive
/// downward, so a vehicle aloft has negative z and altitude above ground
/// level is `-position.z`. Ground level is z = 0.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidBodyState {
    /// Position [m], NED (z down).
    pub position: Vector3<f64>,
    /// Inertial-frame linear velocity [m/s], NED.
    pub velocity: Vector3<f64>,
    /// Euler angles (phi, theta, psi) [rad].
    pub attitude: Vector3<f64>,
    /// Euler angle rates [rad/s].
    pub rates: Vector3<f64>,
    /// Set once net vertical acceleration first points upward; until then
    /// the vehicle stays pinned to the ground.
    pub airborne: bool,
    /// Remaining landing-settle interval [s]. Zero when not settling.
    pub settling: f64,
}

impl Default for RigidBodyState {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: Vector3::zeros(),
            rates: Vector3::zeros(),
            airborne: false,
            settling: 0.0,
        }
    }
}

impl RigidBodyState {
    /// Grounded state at the given NED position and heading.
    pub fn at_position(position: Vector3<f64>, yaw_rad: f64) -> Self {
        Self {
            position,
            attitude: Vector3::new(0.0, 0.0, yaw_rad),
            ..Default::default()
        }
    }

    /// Altitude above ground level [m].
    pub fn agl(&self) -> f64 {
        -self.position.z
    }
}

/// Per-rotor speeds and the aggregate thrust/moment set computed from the
/// current motor commands. Refreshed every tick by the force stage and
/// consumed by the integrator.
#[derive(Component, Debug, Clone, Default)]
pub struct RotorForces {
    /// Angular speed of each rotor [rad/s], in motor-command order.
    pub omegas: Vec<f64>,
    /// Total vertical thrust U1 [N].
    pub thrust: f64,
    /// Roll moment U2 [N m].
    pub roll: f64,
    /// Pitch moment U3 [N m].
    pub pitch: f64,
    /// Yaw moment U4 [N m].
    pub yaw: f64,
    /// Net signed rotor speed [rad/s], for the gyroscopic coupling term.
    pub net_rotor_speed: f64,
}
