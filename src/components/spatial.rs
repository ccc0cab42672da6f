use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Control-facing vehicle state: the twelve kinematic scalars grouped into
/// four vectors, in the convention the PID controllers consume.
///
/// Position and velocity are east-north-up (z positive above ground),
/// meters and meters per second. Attitude is (roll phi, pitch theta,
/// yaw psi) in degrees; rates are degrees per second. This is the external
/// representation; the dynamics integrator keeps its own NED/radian state
/// (see [`RigidBodyState`](crate::components::RigidBodyState)) and the two
/// are related by sign flips on z, dz, theta and dtheta.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    /// Position [m], z up (altitude above ground level).
    pub position: Vector3<f64>,
    /// Linear velocity [m/s]. Inertial frame unless rotated by
    /// [`VehicleState::to_body_velocity`].
    pub velocity: Vector3<f64>,
    /// Euler angles (phi, theta, psi) [deg].
    pub attitude: Vector3<f64>,
    /// Angular rates (dphi, dtheta, dpsi) [deg/s].
    pub rates: Vector3<f64>,
}

impl Default for VehicleState {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: Vector3::zeros(),
            rates: Vector3::zeros(),
        }
    }
}

impl VehicleState {
    /// Returns a copy of the state with the horizontal velocity rotated
    /// from the inertial frame into the body frame by the current yaw
    /// angle. Roll and pitch are ignored in the projection, matching the
    /// optical-flow convention.
    ///
    /// This conversion is an explicit pipeline step: controllers that need
    /// body-frame drift (flow hold) must be handed a state that has been
    /// rotated here, never one that is implicitly assumed body-frame.
    pub fn to_body_velocity(&self) -> Self {
        let psi = self.attitude.z.to_radians();
        let (sp, cp) = psi.sin_cos();

        let mut out = *self;
        out.velocity.x = cp * self.velocity.x + sp * self.velocity.y;
        out.velocity.y = cp * self.velocity.y - sp * self.velocity.x;
        out
    }
}
