use serde::{Deserialize, Serialize};

/// PIDF gains for the roll/pitch attitude controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleGains {
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,
    pub kf: f64,
}

impl Default for AngleGains {
    fn default() -> Self {
        Self {
            kp: 10.0,
            ki: 10.0,
            kd: 1.0,
            kf: 0.0,
        }
    }
}

/// PI gains for the yaw-rate correction folded into the attitude
/// controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YawRateGains {
    pub kp: f64,
    pub ki: f64,
}

impl Default for YawRateGains {
    fn default() -> Self {
        Self {
            kp: 1.0625,
            ki: 0.001875,
        }
    }
}

/// PI gains for the altitude-hold controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AltHoldGains {
    pub kp: f64,
    pub ki: f64,
}

impl Default for AltHoldGains {
    fn default() -> Self {
        Self { kp: 0.75, ki: 1.5 }
    }
}

/// PI gains for the flow/position-hold controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowHoldGains {
    pub kp: f64,
    pub ki: f64,
}

impl Default for FlowHoldGains {
    fn default() -> Self {
        Self { kp: 0.05, ki: 0.4 }
    }
}

/// Complete tuning set for one vehicle's control pipeline, supplied at
/// construction. There is no runtime re-tuning path.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlGains {
    pub angle: AngleGains,
    pub yaw_rate: YawRateGains,
    pub alt_hold: AltHoldGains,
    pub flow_hold: FlowHoldGains,
}
