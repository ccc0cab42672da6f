use bevy::prelude::*;

use crate::components::{ControlGains, Demands, VehicleState};

use super::alt_hold::AltHoldPid;
use super::angle::AnglePid;
use super::flow_hold::FlowHoldPid;

/// Pipeline-wide reset condition: controllers clear their accumulators
/// whenever the raw throttle demand falls below this threshold.
pub const THROTTLE_RESET_THRESHOLD: f64 = 0.05;

/// One closed-loop controller in the pipeline. A tagged variant rather
/// than a trait object: the set of controllers is fixed at compile time
/// and each one is plain data, so matching keeps the dispatch visible.
#[derive(Debug, Clone)]
pub enum PidController {
    Angle(AnglePid),
    AltHold(AltHoldPid),
    FlowHold(FlowHoldPid),
}

impl PidController {
    /// Runs one controller step: returns the corrected demands, updating
    /// the controller's internal accumulators. When `reset` is set the
    /// accumulators are zeroed before the output is computed, so the
    /// returned demands already reflect a clean controller.
    pub fn apply(
        &mut self,
        demands: Demands,
        state: &VehicleState,
        time_us: u64,
        reset: bool,
    ) -> Demands {
        match self {
            PidController::Angle(pid) => pid.apply(demands, state, time_us, reset),
            PidController::AltHold(pid) => pid.apply(demands, state, time_us, reset),
            PidController::FlowHold(pid) => pid.apply(demands, state, time_us, reset),
        }
    }
}

/// Ordered composition of the closed-loop controllers for one vehicle.
///
/// The order is a design invariant, not a convenience: each downstream
/// controller assumes the upstream correction is already folded into the
/// demand vector it receives. The canonical chain is attitude, then
/// altitude hold, then flow hold. The reset flag is broadcast identically
/// to every controller; there is no per-controller reset policy.
#[derive(Component, Debug, Clone)]
pub struct PidPipeline {
    controllers: Vec<PidController>,
}

impl PidPipeline {
    /// Builds the canonical pipeline from a vehicle's tuning set.
    pub fn from_gains(gains: &ControlGains) -> Self {
        Self {
            controllers: vec![
                PidController::Angle(AnglePid::new(gains.angle, gains.yaw_rate)),
                PidController::AltHold(AltHoldPid::new(gains.alt_hold)),
                PidController::FlowHold(FlowHoldPid::new(gains.flow_hold)),
            ],
        }
    }

    /// Runs the demands through every controller in order.
    pub fn run(
        &mut self,
        demands: Demands,
        state: &VehicleState,
        time_us: u64,
        reset: bool,
    ) -> Demands {
        self.controllers
            .iter_mut()
            .fold(demands, |demands, controller| {
                controller.apply(demands, state, time_us, reset)
            })
    }
}
