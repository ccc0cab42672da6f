mod alt_hold;
mod angle;
mod flow_hold;
mod pipeline;

pub use alt_hold::AltHoldPid;
pub use angle::AnglePid;
pub use flow_hold::FlowHoldPid;
pub use pipeline::{PidController, PidPipeline, THROTTLE_RESET_THRESHOLD};

use bevy::prelude::*;

use crate::components::{CorrectedDemands, StickDemands, VehicleState};
use crate::resources::SimTime;

/// Clamps `value` to [-limit, +limit].
pub(crate) fn clamp_abs(value: f64, limit: f64) -> f64 {
    value.clamp(-limit, limit)
}

/// PID stage: runs every vehicle's raw stick demands through its
/// controller pipeline against the current state.
///
/// The horizontal velocity is rotated into the body frame here, as an
/// explicit step, before the pipeline sees the state; the flow-hold
/// controller downstream relies on it.
pub fn flight_control_system(
    time: Res<SimTime>,
    mut query: Query<(
        &StickDemands,
        &VehicleState,
        &mut PidPipeline,
        &mut CorrectedDemands,
    )>,
) {
    for (stick, state, mut pipeline, mut corrected) in query.iter_mut() {
        let body_state = state.to_body_velocity();
        let reset = stick.0.throttle < THROTTLE_RESET_THRESHOLD;
        corrected.0 = pipeline.run(stick.0, &body_state, time.micros(), reset);
    }
}
