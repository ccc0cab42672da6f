use rotorsim::components::{FixedStartConfig, StartConfig, VehicleConfig};
use rotorsim::resources::PhysicsConfig;

/// Standard test vehicle: the phantom preset pinned to a fixed spawn at
/// the origin so scenarios are reproducible.
pub fn create_test_vehicle_config() -> VehicleConfig {
    VehicleConfig {
        start: StartConfig::Fixed(FixedStartConfig::default()),
        ..VehicleConfig::phantom()
    }
}

pub fn create_test_physics_config() -> PhysicsConfig {
    PhysicsConfig {
        timestep: 1.0 / 120.0,
        gravity: 9.81,
    }
}

/// Motor command that would exactly hover the given symmetric quad.
pub fn hover_command(config: &VehicleConfig) -> f64 {
    let rotor_count = config.layout.rotor_count() as f64;
    let max_speed = config.max_rpm * std::f64::consts::PI / 30.0;
    let hover_speed =
        (config.mass.mass * 9.81 / (rotor_count * config.thrust_coefficient)).sqrt();
    hover_speed / max_speed
}
