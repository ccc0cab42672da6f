use bevy::prelude::*;

use crate::components::{CorrectedDemands, Demands, MotorCommands, RotorLayout, VehicleConfig};

/// Quad-X demand mixing table, motor order rear-right, front-right,
/// rear-left, front-left; columns are (roll, pitch, yaw). The Betaflight
/// sign convention: positive roll demand spins up the left motors,
/// positive pitch demand the rear motors, positive yaw demand the
/// counter-clockwise pair.
const QUAD_X_MIX: [(f64, f64, f64); 4] = [
    (-1.0, 1.0, -1.0), // rear-right
    (-1.0, -1.0, 1.0), // front-right
    (1.0, 1.0, 1.0),   // rear-left
    (1.0, -1.0, -1.0), // front-left
];

/// Maps final demands to per-motor normalized commands for the given
/// layout. Pure function of its inputs.
///
/// Every output value is clamped to [0, 1] after combination: momentary
/// saturation under aggressive maneuvering is an expected operating
/// condition, not a fault, so clamping never raises an error.
pub fn mix(demands: &Demands, layout: &RotorLayout) -> Vec<f64> {
    match layout {
        RotorLayout::QuadX { .. } => QUAD_X_MIX
            .iter()
            .map(|(roll, pitch, yaw)| {
                clamp(demands.throttle
                    + roll * demands.roll
                    + pitch * demands.pitch
                    + yaw * demands.yaw)
            })
            .collect(),
        RotorLayout::Offsets { rotors } => rotors
            .iter()
            .map(|rotor| {
                // Demand signs follow from the rotor's quadrant: left
                // motors carry positive roll, rear motors positive pitch,
                // and yaw follows the spin direction.
                clamp(demands.throttle
                    + (-rotor.y).signum() * demands.roll
                    + (-rotor.x).signum() * demands.pitch
                    + rotor.spin * demands.yaw)
            })
            .collect(),
        RotorLayout::VectoredThrust { .. } => {
            // Rotor 1 spins clockwise: speeding it up yaws nose-right.
            // Channels 2 and 3 steer the nozzle, 0.5 centered.
            vec![
                clamp(demands.throttle - demands.yaw),
                clamp(demands.throttle + demands.yaw),
                clamp(0.5 + demands.roll / 2.0),
                clamp(0.5 + demands.pitch / 2.0),
            ]
        }
    }
}

fn clamp(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Mix stage: converts every vehicle's corrected demands into motor
/// commands.
pub fn mixer_system(mut query: Query<(&VehicleConfig, &CorrectedDemands, &mut MotorCommands)>) {
    for (config, demands, mut commands) in query.iter_mut() {
        commands.0 = mix(&demands.0, &config.layout);
    }
}
