use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Open-loop flight demands: one throttle value plus three axis demands.
///
/// Throttle lives in [0, 1] once normalized from the receiver's [-1, +1]
/// range; roll, pitch and yaw are dimensionless signals nominally in
/// [-1, +1]. Demands are transient and recomputed every tick, never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Demands {
    pub throttle: f64,
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl Demands {
    pub fn new(throttle: f64, roll: f64, pitch: f64, yaw: f64) -> Self {
        Self {
            throttle,
            roll,
            pitch,
            yaw,
        }
    }
}

/// Raw stick/autopilot demands for the current tick, as delivered by the
/// receiver or telemetry adapter. Written by input-side systems, read by
/// the control pipeline.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct StickDemands(pub Demands);

/// Demands after the PID pipeline has folded in its corrections. Read by
/// the mixer. Kept separate from [`StickDemands`] so the one-directional
/// per-tick flow stays visible in the schedule.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct CorrectedDemands(pub Demands);
