use bevy::prelude::*;

use crate::components::{
    ConfigError, CorrectedDemands, MotorCommands, RigidBodyState, RotorForces, StickDemands,
    VehicleConfig,
};
use crate::systems::{vehicle_state_from_rigid_body, PidPipeline};

/// Spawns one vehicle entity with the full component set the control and
/// dynamics stages operate on.
pub struct VehiclePlugin {
    config: VehicleConfig,
}

impl VehiclePlugin {
    /// Validates the configuration up front: a bad parameter set is fatal
    /// here, never mid-loop.
    pub fn new(config: VehicleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }
}

impl Plugin for VehiclePlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();
        app.add_systems(Startup, move |mut commands: Commands| {
            spawn_vehicle(&mut commands, config.clone());
        });
    }
}

/// Inserts the vehicle entity: configuration, rigid-body state at the
/// spawn pose, and zeroed demand/force/command components.
pub fn spawn_vehicle(commands: &mut Commands, config: VehicleConfig) {
    let (position, yaw_deg) = config.start.pose();
    let command_count = config.layout.command_count();
    let pipeline = PidPipeline::from_gains(&config.gains);
    let body = RigidBodyState::at_position(position, yaw_deg.to_radians());

    info!("Spawning vehicle '{}'", config.name);

    commands.spawn((
        Name::new(config.name.clone()),
        vehicle_state_from_rigid_body(&body),
        body,
        RotorForces::default(),
        StickDemands::default(),
        CorrectedDemands::default(),
        MotorCommands::zeros(command_count),
        pipeline,
        config,
    ));
}
