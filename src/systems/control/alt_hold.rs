use crate::components::{AltHoldGains, Demands, VehicleState};

use super::clamp_abs;

/// Throttle band around the hover reference inside which the hold
/// engages.
const STICK_DEADBAND: f64 = 0.2;
/// Hover reference throttle.
const THROTTLE_HOVER: f64 = 0.5;
/// The hold never engages below this altitude [m], so ground handling is
/// left alone.
const ALTITUDE_MIN: f64 = 1.0;
/// Integral accumulator clamp.
const WINDUP_MAX: f64 = 0.4;

/// Altitude-hold controller. While the throttle demand sits inside the
/// hover deadband, the altitude at band entry becomes the target and the
/// throttle demand is replaced by a PI correction that drives the climb
/// rate to the altitude error. Outside the band every demand passes
/// through untouched.
#[derive(Debug, Clone)]
pub struct AltHoldPid {
    gains: AltHoldGains,
    error_integral: f64,
    altitude_target: f64,
    in_band: bool,
    prev_time_us: Option<u64>,
}

impl AltHoldPid {
    pub fn new(gains: AltHoldGains) -> Self {
        Self {
            gains,
            error_integral: 0.0,
            altitude_target: 0.0,
            in_band: false,
            prev_time_us: None,
        }
    }

    pub fn reset(&mut self) {
        self.error_integral = 0.0;
        self.altitude_target = 0.0;
        self.in_band = false;
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

        let altitude = state.position.z;
        let climb_rate = state.velocity.z;

        let was_in_band = self.in_band;
        self.in_band =
            (demands.throttle - THROTTLE_HOVER).abs() < STICK_DEADBAND && altitude > ALTITUDE_MIN;

        if !self.in_band {
            self.error_integral = 0.0;
            return demands;
        }

        if !was_in_band {
            self.altitude_target = altitude;
        }

        // Climb-rate target proportional to the altitude error, zero at
        // the commanded altitude.
        let target_velocity = self.altitude_target - altitude;
        let error = target_velocity - climb_rate;
        self.error_integral = clamp_abs(self.error_integral + error * dt, WINDUP_MAX);

        Demands {
            throttle: (self.gains.kp * error + self.gains.ki * self.error_integral)
                .clamp(0.0, 1.0),
            ..demands
        }
    }
}
