use bevy::prelude::*;

use crate::components::{MotorCommands, RotorForces, RotorLayout, VehicleConfig};
use crate::systems::dynamics::motor::{motor_speed, reaction_torque, thrust};

/// Quad-X torque sign tables, motor order rear-right, front-right,
/// rear-left, front-left:
///
/// ```text
///    FL cw    FR ccw
///        \   /
///         \ /
///         / \
///        /   \
///    RL ccw   RR cw
/// ```
///
/// Signs give each motor's contribution to positive roll-right, nose-up
/// pitch and nose-right yaw moments in the body NED frame. The mixer uses
/// the matching (pitch-negated) demand table in `systems::mixer`.
const QUAD_X_ROLL: [f64; 4] = [-1.0, -1.0, 1.0, 1.0];
const QUAD_X_PITCH: [f64; 4] = [-1.0, 1.0, -1.0, 1.0];
const QUAD_X_YAW: [f64; 4] = [-1.0, 1.0, 1.0, -1.0];

/// Converts one motor-command frame into rotor speeds and the aggregate
/// thrust/moment set (U1..U4 plus net rotor speed), using the layout's
/// geometry weighting.
///
/// Total thrust is U1 = sum of b * omega_i^2 for the spinning rotors; the
/// moment computation is the airframe-specific strategy described on
/// [`RotorLayout`].
pub fn compute_rotor_forces(config: &VehicleConfig, commands: &[f64]) -> RotorForces {
    let b = config.thrust_coefficient;
    let d = config.torque_coefficient;

    let rotor_count = config.layout.rotor_count();
    let omegas: Vec<f64> = commands
        .iter()
        .take(rotor_count)
        .map(|&v| motor_speed(v, config.max_rpm))
        .collect();

    let u1: f64 = omegas.iter().map(|&w| thrust(w, b)).sum();

    let (roll, pitch, yaw, net) = match &config.layout {
        RotorLayout::QuadX { arm_length } => {
            let mut u2 = 0.0;
            let mut u3 = 0.0;
            let mut u4 = 0.0;
            let mut net = 0.0;
            for (i, &w) in omegas.iter().enumerate() {
                u2 += QUAD_X_ROLL[i] * thrust(w, b);
                u3 += QUAD_X_PITCH[i] * thrust(w, b);
                u4 += QUAD_X_YAW[i] * reaction_torque(w, d);
                net += QUAD_X_YAW[i] * w;
            }
            (arm_length * u2, arm_length * u3, u4, net)
        }
        RotorLayout::Offsets { rotors } => {
            let mut u2 = 0.0;
            let mut u3 = 0.0;
            let mut u4 = 0.0;
            let mut net = 0.0;
            for (rotor, &w) in rotors.iter().zip(omegas.iter()) {
                let f = thrust(w, b);
                u2 += -rotor.y * f;
                u3 += rotor.x * f;
                u4 += rotor.spin * reaction_torque(w, d);
                net += rotor.spin * w;
            }
            (u2, u3, u4, net)
        }
        RotorLayout::VectoredThrust {
            nozzle_max_angle,
            moment_arm,
        } => {
            // Channels 2 and 3 are nozzle deflections: 0.5 is centered,
            // the ends of [0, 1] are full travel either way.
            let roll_angle = nozzle_angle(commands.get(2).copied(), *nozzle_max_angle);
            let pitch_angle = nozzle_angle(commands.get(3).copied(), *nozzle_max_angle);

            let u2 = u1 * roll_angle.sin() * moment_arm;
            let u3 = u1 * pitch_angle.sin() * moment_arm;
            // Yaw from the rotor speed differential; rotor 1 spins
            // clockwise, rotor 0 counter-clockwise.
            let u4 = reaction_torque(omegas[1], d) - reaction_torque(omegas[0], d);
            let net = omegas[1] - omegas[0];
            (u2, u3, u4, net)
        }
    };

    RotorForces {
        omegas,
        thrust: u1,
        roll,
        pitch,
        yaw,
        net_rotor_speed: net,
    }
}

fn nozzle_angle(command: Option<f64>, max_angle: f64) -> f64 {
    let v = command.unwrap_or(0.5).clamp(0.0, 1.0);
    (2.0 * v - 1.0) * max_angle
}

/// Force-computation stage: folds the tick's motor commands into
/// [`RotorForces`] for every vehicle.
pub fn rotor_force_system(mut query: Query<(&VehicleConfig, &MotorCommands, &mut RotorForces)>) {
    for (config, commands, mut forces) in query.iter_mut() {
        *forces = compute_rotor_forces(config, &commands.0);
    }
}
