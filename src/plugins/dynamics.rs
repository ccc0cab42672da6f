use bevy::prelude::*;

use crate::plugins::SimSet;
use crate::resources::PhysicsConfig;
use crate::systems::{rigid_body_integrator_system, rotor_force_system, state_sync_system};

/// Dynamics side of the tick: rotor forces, rigid-body integration and
/// the NED-to-ENU state sync, running after the mixer has produced this
/// tick's motor commands.
pub struct DynamicsPlugin {
    pub config: PhysicsConfig,
}

impl Default for DynamicsPlugin {
    fn default() -> Self {
        Self {
            config: PhysicsConfig::default(),
        }
    }
}

impl DynamicsPlugin {
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self { config }
    }
}

impl Plugin for DynamicsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config);
        app.insert_resource(Time::<Fixed>::from_seconds(self.config.timestep));

        app.configure_sets(
            FixedUpdate,
            (SimSet::Mix, SimSet::Forces, SimSet::Integration, SimSet::StateSync).chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                rotor_force_system.in_set(SimSet::Forces),
                rigid_body_integrator_system.in_set(SimSet::Integration),
                state_sync_system.in_set(SimSet::StateSync),
            ),
        );
    }
}
