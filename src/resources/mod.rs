mod config;
mod time;

pub use config::PhysicsConfig;
pub use time::{advance_sim_time, SimTime};
