use crate::components::{Demands, FlowHoldGains, VehicleState};

use super::clamp_abs;

/// Roll/pitch stick deflection below which the hold considers the pilot
/// hands-off.
const STICK_DEADBAND: f64 = 0.2;
/// Integral accumulator clamp.
const WINDUP_MAX: f64 = 0.4;

/// Flow/position-hold controller. With the translational sticks centered,
/// PI corrections computed from the body-frame horizontal velocity null
/// the drift; any stick deflection hands the axes straight back to the
/// pilot.
///
/// The state handed to this controller must already carry body-frame
/// dx/dy (see [`VehicleState::to_body_velocity`]); the drift source is
/// typically optical flow on hardware, the rotated inertial velocity in
/// simulation.
#[derive(Debug, Clone)]
pub struct FlowHoldPid {
    gains: FlowHoldGains,
    forward_integral: f64,
    lateral_integral: f64,
    prev_time_us: Option<u64>,
}

impl FlowHoldPid {
    pub fn new(gains: FlowHoldGains) -> Self {
        Self {
            gains,
            forward_integral: 0.0,
            lateral_integral: 0.0,
            prev_time_us: None,
        }
    }

    pub fn reset(&mut self) {
        self.forward_integral = 0.0;
        self.lateral_integral = 0.0;
        self.prev_time_us = None;
    }

    pub fn apply(
        &mut self,
        demands: Demands,
        state: &VehicleState,
        time_us: u64,
        reset: bool,
    ) -> Demands {
        if reset {
            self.reset();
        }
        let dt = self
            .prev_time_us
            .map(|prev| (time_us.saturating_sub(prev)) as f64 / 1e6)
            .unwrap_or(0.0);
        self.prev_time_us = Some(time_us);

        if demands.roll.abs() > STICK_DEADBAND || demands.pitch.abs() > STICK_DEADBAND {
            self.forward_integral = 0.0;
            self.lateral_integral = 0.0;
            return demands;
        }

        let forward_drift = state.velocity.x;
        let lateral_drift = state.velocity.y;

        self.forward_integral = clamp_abs(self.forward_integral + forward_drift * dt, WINDUP_MAX);
        self.lateral_integral = clamp_abs(self.lateral_integral + lateral_drift * dt, WINDUP_MAX);

        // Forward drift brakes with nose-up (negative) pitch demand;
        // rightward drift brakes with left (negative) roll demand.
        Demands {
            roll: -(self.gains.kp * lateral_drift + self.gains.ki * self.lateral_integral),
            pitch: -(self.gains.kp * forward_drift + self.gains.ki * self.forward_integral),
            ..demands
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    fn drifting_state(dx: f64, dy: f64) -> VehicleState {
        VehicleState {
            velocity: Vector3::new(dx, dy, 0.0),
            ..Default::default()
        }
    }

    #[test]
    fn stick_input_takes_priority() {
        let mut pid = FlowHoldPid::new(FlowHoldGains::default());
        let demands = Demands::new(0.5, 0.6, 0.0, 0.0);
        let out = pid.apply(demands, &drifting_state(2.0, 2.0), 0, false);
        assert_eq!(out, demands);
    }

    #[test]
    fn nulls_forward_drift_with_nose_up() {
        let mut pid = FlowHoldPid::new(FlowHoldGains::default());
        let out = pid.apply(
            Demands::new(0.5, 0.0, 0.0, 0.0),
            &drifting_state(1.5, 0.0),
            0,
            false,
        );
        assert!(out.pitch < 0.0);
        assert_relative_eq!(out.roll, 0.0);
    }

    #[test]
    fn nulls_lateral_drift_with_opposite_roll() {
        let mut pid = FlowHoldPid::new(FlowHoldGains::default());
        let out = pid.apply(
            Demands::new(0.5, 0.0, 0.0, 0.0),
            &drifting_state(0.0, -2.0),
            0,
            false,
        );
        assert!(out.roll > 0.0);
    }

    #[test]
    fn stationary_vehicle_needs_no_correction() {
        let mut pid = FlowHoldPid::new(FlowHoldGains::default());
        let demands = Demands::new(0.5, 0.0, 0.0, 0.0);
        let out = pid.apply(demands, &drifting_state(0.0, 0.0), 0, false);
        assert_eq!(out, demands);
    }
}
