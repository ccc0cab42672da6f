mod forces;
mod integrator;
mod motor;

pub use forces::{compute_rotor_forces, rotor_force_system};
pub use integrator::{
    integrate, rigid_body_integrator_system, state_sync_system, vehicle_state_from_rigid_body,
    SETTLING_TIME,
};
pub use motor::{motor_speed, reaction_torque, thrust};
