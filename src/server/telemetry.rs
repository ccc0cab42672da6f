use nalgebra::Vector3;

use crate::components::{Demands, RigidBodyState, VehicleState};

/// Number of values in one telemetry frame: simulation time, the twelve
/// kinematic states (NED, radians), then the four raw demand values.
pub const TELEMETRY_LEN: usize = 17;

/// Index of each field in a telemetry frame.
const TIME: usize = 0;
const STATE: usize = 1; // x, dx, y, dy, z, dz, phi, dphi, theta, dtheta, psi, dpsi
const DEMANDS: usize = 13; // throttle, roll, pitch, yaw

/// A simulation time below zero is the halt sentinel: the control loop
/// terminates between ticks, never mid-tick.
pub fn is_halt(frame: &[f64]) -> bool {
    frame.first().map_or(true, |&time| time < 0.0)
}

/// Simulation time of the frame [s].
pub fn frame_time(frame: &[f64]) -> f64 {
    frame[TIME]
}

/// Simulation time of the frame in whole microseconds.
pub fn frame_time_us(frame: &[f64]) -> u64 {
    (frame[TIME] * 1e6) as u64
}

/// Builds the control-facing [`VehicleState`] from a telemetry frame.
///
/// The frame is NED with radian angles; the controllers consume ENU with
/// degrees. The conversion is exactly the documented sign flips (z, dz,
/// theta and dtheta negate, everything else passes through) plus
/// radians-to-degrees on the angle quartet.
pub fn state_from_telemetry(frame: &[f64]) -> VehicleState {
    let s = &frame[STATE..STATE + 12];
    VehicleState {
        position: Vector3::new(s[0], s[2], -s[4]),
        velocity: Vector3::new(s[1], s[3], -s[5]),
        attitude: Vector3::new(
            s[6].to_degrees(),
            -s[8].to_degrees(),
            s[10].to_degrees(),
        ),
        rates: Vector3::new(
            s[7].to_degrees(),
            -s[9].to_degrees(),
            s[11].to_degrees(),
        ),
    }
}

/// Builds the raw stick demands from a telemetry frame. Throttle arrives
/// in [-1, +1] and is remapped to [0, 1]; roll, pitch and yaw pass
/// through.
pub fn demands_from_telemetry(frame: &[f64]) -> Demands {
    let d = &frame[DEMANDS..DEMANDS + 4];
    Demands {
        throttle: (d[0] + 1.0) / 2.0,
        roll: d[1],
        pitch: d[2],
        yaw: d[3],
    }
}

/// Inverse of [`state_from_telemetry`] and [`demands_from_telemetry`]:
/// encodes a control-facing state and raw demands back into the NED
/// radian wire layout. Round-tripping a frame through the two directions
/// recovers the original values.
pub fn telemetry_from_state(time: f64, state: &VehicleState, demands: &Demands) -> [f64; TELEMETRY_LEN] {
    [
        time,
        state.position.x,
        state.velocity.x,
        state.position.y,
        state.velocity.y,
        -state.position.z,
        -state.velocity.z,
        state.attitude.x.to_radians(),
        state.rates.x.to_radians(),
        -state.attitude.y.to_radians(),
        -state.rates.y.to_radians(),
        state.attitude.z.to_radians(),
        state.rates.z.to_radians(),
        demands.throttle * 2.0 - 1.0,
        demands.roll,
        demands.pitch,
        demands.yaw,
    ]
}

/// Encodes the simulation side's own NED radian state directly, for a
/// pure-simulation host feeding an external controller.
pub fn telemetry_from_rigid_body(
    time: f64,
    body: &RigidBodyState,
    demands: &Demands,
) -> [f64; TELEMETRY_LEN] {
    [
        time,
        body.position.x,
        body.velocity.x,
        body.position.y,
        body.velocity.y,
        body.position.z,
        body.velocity.z,
        body.attitude.x,
        body.rates.x,
        body.attitude.y,
        body.rates.y,
        body.attitude.z,
        body.rates.z,
        demands.throttle * 2.0 - 1.0,
        demands.roll,
        demands.pitch,
        demands.yaw,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_frame() -> [f64; TELEMETRY_LEN] {
        [
            1.25, // time
            10.0, 1.0, // x, dx
            -5.0, 0.5, // y, dy
            -30.0, -2.0, // z, dz (NED: aloft and climbing)
            0.10, 0.01, // phi, dphi
            -0.20, 0.02, // theta, dtheta
            1.50, -0.03, // psi, dpsi
            0.2, 0.1, -0.1, 0.05, // demands
        ]
    }

    #[test]
    fn halt_sentinel_is_negative_time() {
        let mut frame = sample_frame();
        assert!(!is_halt(&frame));
        frame[0] = -1.0;
        assert!(is_halt(&frame));
        assert!(is_halt(&[]));
    }

    #[test]
    fn state_conversion_applies_documented_flips() {
        let state = state_from_telemetry(&sample_frame());
        assert_relative_eq!(state.position.x, 10.0);
        assert_relative_eq!(state.position.y, -5.0);
        assert_relative_eq!(state.position.z, 30.0); // z flips up
        assert_relative_eq!(state.velocity.z, 2.0); // climbing
        assert_relative_eq!(state.attitude.x, 0.10_f64.to_degrees());
        assert_relative_eq!(state.attitude.y, 0.20_f64.to_degrees()); // theta flips
        assert_relative_eq!(state.attitude.z, 1.50_f64.to_degrees());
        assert_relative_eq!(state.rates.y, -0.02_f64.to_degrees());
    }

    #[test]
    fn throttle_remaps_to_unit_range() {
        let demands = demands_from_telemetry(&sample_frame());
        assert_relative_eq!(demands.throttle, 0.6);
        assert_relative_eq!(demands.roll, 0.1);
        assert_relative_eq!(demands.pitch, -0.1);
        assert_relative_eq!(demands.yaw, 0.05);
    }

    #[test]
    fn round_trip_recovers_ned_radians() {
        let frame = sample_frame();
        let state = state_from_telemetry(&frame);
        let demands = demands_from_telemetry(&frame);
        let encoded = telemetry_from_state(frame_time(&frame), &state, &demands);

        for (&original, &recovered) in frame.iter().zip(encoded.iter()) {
            assert_relative_eq!(original, recovered, epsilon = 1e-12, max_relative = 1e-12);
        }
    }

    #[test]
    fn sim_side_and_control_side_agree() {
        use crate::systems::vehicle_state_from_rigid_body;

        let body = RigidBodyState {
            position: Vector3::new(4.0, -2.0, -12.0),
            velocity: Vector3::new(0.8, 0.1, -0.4),
            attitude: Vector3::new(0.05, -0.1, 2.0),
            rates: Vector3::new(0.02, 0.0, -0.01),
            airborne: true,
            settling: 0.0,
        };
        let demands = Demands::new(0.7, 0.1, 0.0, -0.2);

        // Decoding the frame the simulation side emits must land on the
        // same state the in-process sync publishes.
        let frame = telemetry_from_rigid_body(3.0, &body, &demands);
        let decoded = state_from_telemetry(&frame);
        let synced = vehicle_state_from_rigid_body(&body);

        assert_relative_eq!(decoded.position.z, synced.position.z);
        assert_relative_eq!(decoded.velocity.z, synced.velocity.z);
        assert_relative_eq!(decoded.attitude.y, synced.attitude.y);
        assert_relative_eq!(decoded.rates.y, synced.rates.y);
        assert_relative_eq!(decoded.attitude.z, synced.attitude.z);

        let round = demands_from_telemetry(&frame);
        assert_relative_eq!(round.throttle, demands.throttle);
        assert_relative_eq!(round.yaw, demands.yaw);
    }
}
