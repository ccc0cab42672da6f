mod control;
mod dynamics;
mod vehicle;

pub use control::ControlPlugin;
pub use dynamics::DynamicsPlugin;
pub use vehicle::VehiclePlugin;

use bevy::prelude::*;

/// One simulation tick, in order. The whole chain runs inside a single
/// `FixedUpdate` pass with no suspension points: time, then the control
/// side (PID, mix), then the dynamics side (forces, integration, state
/// sync).
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum SimSet {
    Time,
    Pid,
    Mix,
    Forces,
    Integration,
    StateSync,
}
