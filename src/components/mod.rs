mod config;
mod demands;
mod motors;
mod rigid_body;
mod spatial;

pub use config::{
    AltHoldGains, AngleGains, ConfigError, ControlGains, FixedStartConfig, FlowHoldGains,
    MassModel, RandomStartConfig, RotorGeometry, RotorLayout, StartConfig, VehicleConfig,
    YawRateGains,
};
pub use demands::{CorrectedDemands, Demands, StickDemands};
pub use motors::MotorCommands;
pub use rigid_body::{RigidBodyState, RotorForces};
pub use spatial::VehicleState;
