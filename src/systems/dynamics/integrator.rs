use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{RigidBodyState, RotorForces, VehicleConfig, VehicleState};
use crate::resources::PhysicsConfig;

/// Time over which velocities are bled off during the final phase of
/// landing [s].
pub const SETTLING_TIME: f64 = 1.0;

/// Advances one rigid-body state by `dt` seconds under the given rotor
/// forces: Newton's second law for translation with gravity and body-frame
/// thrust rotated into the inertial frame, Euler's equations with inertia
/// coupling and the rotor gyroscopic term for rotation.
///
/// Explicit fixed-step Euler update, deterministic for identical inputs.
/// Degenerate parameterizations (near-zero mass or inertia) are allowed to
/// produce non-physical values; guarding against them is the host's
/// concern, not the integrator's.
pub fn integrate(
    config: &VehicleConfig,
    forces: &RotorForces,
    state: &mut RigidBodyState,
    dt: f64,
    gravity: f64,
) {
    let m = config.mass.mass;
    let (ix, iy, iz) = (config.mass.ixx, config.mass.iyy, config.mass.izz);
    let jr = config.mass.jr;

    let (phi, theta, psi) = (state.attitude.x, state.attitude.y, state.attitude.z);
    let (sph, cph) = phi.sin_cos();
    let (sth, cth) = theta.sin_cos();
    let (sps, cps) = psi.sin_cos();

    let u1 = forces.thrust;

    // Body-frame thrust (0, 0, -U1) rotated into the inertial NED frame.
    let accel = Vector3::new(
        -(cph * sth * cps + sph * sps) * u1 / m,
        -(cph * sth * sps - sph * cps) * u1 / m,
        gravity - cph * cth * u1 / m,
    );

    // Grounded until net vertical acceleration first points upward.
    if !state.airborne {
        if accel.z < 0.0 {
            state.airborne = true;
        } else {
            state.velocity = Vector3::zeros();
            state.rates = Vector3::zeros();
            return;
        }
    }

    let (dphi, dtheta, dpsi) = (state.rates.x, state.rates.y, state.rates.z);
    let omega = forces.net_rotor_speed;

    // Euler's equations with gyroscopic coupling from net rotor momentum.
    let rate_accel = Vector3::new(
        dtheta * dpsi * (iy - iz) / ix - jr / ix * dtheta * omega + forces.roll / ix,
        dphi * dpsi * (iz - ix) / iy + jr / iy * dphi * omega + forces.pitch / iy,
        dphi * dtheta * (ix - iy) / iz + forces.yaw / iz,
    );

    // Forward Euler on all twelve states from the same derivative set.
    state.position += state.velocity * dt;
    state.velocity += accel * dt;
    state.attitude += state.rates * dt;
    state.rates += rate_accel * dt;

    apply_ground_contact(state, accel.z, dt);
}

/// Landing model, not general collision physics: once the vehicle reaches
/// ground level while descending, further descent is stopped and the
/// velocities are damped out over a bounded settling interval. A thrust
/// increase during the settle aborts it (go-around).
fn apply_ground_contact(state: &mut RigidBodyState, net_vertical_accel: f64, dt: f64) {
    if state.settling > 0.0 && net_vertical_accel < 0.0 {
        state.settling = 0.0;
        return;
    }

    // NED: positive z is below ground level, positive dz is descent.
    if state.position.z >= 0.0 && state.velocity.z >= 0.0 && state.settling <= 0.0 {
        state.settling = SETTLING_TIME;
    }

    if state.settling > 0.0 {
        state.settling -= dt;
        state.position.z = state.position.z.min(0.0);
        if state.settling <= 0.0 {
            state.settling = 0.0;
            state.velocity = Vector3::zeros();
            state.rates = Vector3::zeros();
            state.airborne = false;
        } else {
            let damp = state.settling / SETTLING_TIME;
            state.velocity *= damp;
            state.rates *= damp;
            state.velocity.z = state.velocity.z.min(0.0);
        }
    }
}

/// Integration stage: steps every vehicle's rigid body by the fixed
/// physics timestep.
pub fn rigid_body_integrator_system(
    config: Res<PhysicsConfig>,
    mut query: Query<(&VehicleConfig, &RotorForces, &mut RigidBodyState)>,
) {
    for (vehicle, forces, mut state) in query.iter_mut() {
        integrate(vehicle, forces, &mut state, config.timestep, config.gravity);
    }
}

/// State-sync stage: publishes the integrator's NED/radian state as the
/// control-facing ENU/degree [`VehicleState`]. The documented sign flips
/// (z, dz, theta, dtheta) and rad-to-deg conversion live here and in the
/// telemetry adapter, nowhere else.
pub fn state_sync_system(mut query: Query<(&RigidBodyState, &mut VehicleState)>) {
    for (body, mut state) in query.iter_mut() {
        *state = vehicle_state_from_rigid_body(body);
    }
}

/// NED/radian rigid-body state to ENU/degree control state.
pub fn vehicle_state_from_rigid_body(body: &RigidBodyState) -> VehicleState {
    VehicleState {
        position: Vector3::new(body.position.x, body.position.y, -body.position.z),
        velocity: Vector3::new(body.velocity.x, body.velocity.y, -body.velocity.z),
        attitude: Vector3::new(
            body.attitude.x.to_degrees(),
            -body.attitude.y.to_degrees(),
            body.attitude.z.to_degrees(),
        ),
        rates: Vector3::new(
            body.rates.x.to_degrees(),
            -body.rates.y.to_degrees(),
            body.rates.z.to_degrees(),
        ),
    }
}
