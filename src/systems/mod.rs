pub mod control;
pub mod dynamics;
pub mod mixer;

pub use control::{flight_control_system, PidPipeline, THROTTLE_RESET_THRESHOLD};
pub use dynamics::{
    compute_rotor_forces, integrate, rigid_body_integrator_system, rotor_force_system,
    state_sync_system, vehicle_state_from_rigid_body, SETTLING_TIME,
};
pub use mixer::{mix, mixer_system};
