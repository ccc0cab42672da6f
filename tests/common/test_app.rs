use bevy::prelude::*;

use rotorsim::components::{Demands, RigidBodyState, StickDemands, VehicleConfig};
use rotorsim::plugins::{ControlPlugin, DynamicsPlugin, VehiclePlugin};
use rotorsim::resources::PhysicsConfig;

/// Builder for a headless test application with one vehicle.
pub struct TestAppBuilder {
    vehicle_config: VehicleConfig,
    physics_config: PhysicsConfig,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            vehicle_config: super::create_test_vehicle_config(),
            physics_config: PhysicsConfig::default(),
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vehicle(mut self, config: VehicleConfig) -> Self {
        self.vehicle_config = config;
        self
    }

    pub fn with_physics(mut self, config: PhysicsConfig) -> Self {
        self.physics_config = config;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(ControlPlugin)
            .add_plugins(DynamicsPlugin::with_config(self.physics_config))
            .add_plugins(
                VehiclePlugin::new(self.vehicle_config).expect("test vehicle config is valid"),
            );

        // First update runs Startup and spawns the vehicle.
        app.update();

        TestApp { app }
    }
}

pub struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Runs the fixed-update schedule `steps` times. Driving the schedule
    /// directly keeps test time deterministic regardless of wall clock.
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    /// Clones the single vehicle's component of the given type.
    pub fn query_single<T: Component + Clone>(&mut self) -> Option<T> {
        let mut query = self.app.world_mut().query::<&T>();
        query.get_single(self.app.world()).ok().cloned()
    }

    /// Sets the raw stick demands on every vehicle.
    pub fn set_stick_demands(&mut self, demands: Demands) {
        let mut query = self.app.world_mut().query::<&mut StickDemands>();
        for mut stick in query.iter_mut(self.app.world_mut()) {
            stick.0 = demands;
        }
    }

    /// Mutates the rigid-body state directly, e.g. to start a scenario
    /// already airborne.
    pub fn edit_rigid_body(&mut self, edit: impl Fn(&mut RigidBodyState)) {
        let mut query = self.app.world_mut().query::<&mut RigidBodyState>();
        for mut body in query.iter_mut(self.app.world_mut()) {
            edit(&mut body);
        }
    }
}
