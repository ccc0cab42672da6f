use crate::components::{AngleGains, Demands, VehicleState, YawRateGains};

use super::clamp_abs;

// Per-term output scaling, so the gain numbers stay in the conventional
// tuning range while errors are in degrees and degrees per second.
const PTERM_SCALE: f64 = 0.032029;
const ITERM_SCALE: f64 = 0.244381;
const DTERM_SCALE: f64 = 0.000529;
const FTERM_SCALE: f64 = 0.00013754;

/// Full-scale roll/pitch demand maps to this attitude target [deg].
const MAX_ANGLE_DEG: f64 = 45.0;
/// Integral accumulator clamp.
const WINDUP_MAX: f64 = 6.0;
/// Full-scale yaw demand maps to this yaw rate target [deg/s]; also the
/// error magnitude past which the yaw integral is dumped.
const YAW_RATE_MAX_DPS: f64 = 45.0;

#[derive(Debug, Clone, Copy, Default)]
struct AxisState {
    error_integral: f64,
}

/// Attitude controller: PIDF correction of the roll and pitch demands
/// against the measured Euler angles and rates, plus a PI yaw-rate
/// correction of the yaw demand. Throttle passes through untouched.
#[derive(Debug, Clone)]
pub struct AnglePid {
    gains: AngleGains,
    yaw_gains: YawRateGains,
    roll: AxisState,
    pitch: AxisState,
    yaw_error_integral: f64,
    prev_time_us: Option<u64>,
}

impl AnglePid {
    pub fn new(gains: AngleGains, yaw_gains: YawRateGains) -> Self {
        Self {
            gains,
            yaw_gains,
            roll: AxisState::default(),
            pitch: AxisState::default(),
            yaw_error_integral: 0.0,
            prev_time_us: None,
        }
    }

    pub fn reset(&mut self) {
        self.roll = AxisState::default();
        self.pitch = AxisState::default();
        self.yaw_error_integral = 0.0;
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
        let dt = self.elapsed(time_us);

        let roll = self.axis(demands.roll, state.attitude.x, state.rates.x, dt, Axis::Roll);
        let pitch = self.axis(
            demands.pitch,
            state.attitude.y,
            state.rates.y,
            dt,
            Axis::Pitch,
        );
        let yaw = self.yaw(demands.yaw, state.rates.z, dt);

        Demands {
            throttle: demands.throttle,
            roll,
            pitch,
            yaw,
        }
    }

    fn elapsed(&mut self, time_us: u64) -> f64 {
        let dt = self
            .prev_time_us
            .map(|prev| (time_us.saturating_sub(prev)) as f64 / 1e6)
            .unwrap_or(0.0);
        self.prev_time_us = Some(time_us);
        dt
    }

    fn axis(&mut self, demand: f64, angle_deg: f64, rate_dps: f64, dt: f64, axis: Axis) -> f64 {
        let error = demand * MAX_ANGLE_DEG - angle_deg;

        let state = match axis {
            Axis::Roll => &mut self.roll,
            Axis::Pitch => &mut self.pitch,
        };
        state.error_integral = clamp_abs(state.error_integral + error * dt, WINDUP_MAX);

        PTERM_SCALE * self.gains.kp * error
            + ITERM_SCALE * self.gains.ki * state.error_integral
            - DTERM_SCALE * self.gains.kd * rate_dps
            + FTERM_SCALE * self.gains.kf * demand
    }

    fn yaw(&mut self, demand: f64, rate_dps: f64, dt: f64) -> f64 {
        let error = demand * YAW_RATE_MAX_DPS - rate_dps;

        // Dump the integral on a rapid rate change so a disturbance does
        // not unwind through the accumulator.
        if error.abs() > YAW_RATE_MAX_DPS {
            self.yaw_error_integral = 0.0;
        }
        self.yaw_error_integral = clamp_abs(self.yaw_error_integral + error * dt, WINDUP_MAX);

        PTERM_SCALE * self.yaw_gains.kp * error
            + ITERM_SCALE * self.yaw_gains.ki * self.yaw_error_integral
    }
}

enum Axis {
    Roll,
    Pitch,
}
