use bevy::log::LogPlugin;
use bevy::prelude::*;

use rotorsim::components::{Demands, StickDemands, VehicleConfig, VehicleState};
use rotorsim::plugins::{ControlPlugin, DynamicsPlugin, VehiclePlugin};
use rotorsim::resources::PhysicsConfig;

/// Closed-loop demo: spawn the default quad, hold a climb-out throttle
/// with sticks centered and report the trajectory once a second.
fn main() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(LogPlugin::default())
        .add_plugins(ControlPlugin)
        .add_plugins(DynamicsPlugin::default())
        .add_plugins(
            VehiclePlugin::new(VehicleConfig::phantom()).expect("preset config is valid"),
        );

    // First update runs Startup and spawns the vehicle.
    app.update();

    let mut sticks = app.world_mut().query::<&mut StickDemands>();
    for mut stick in sticks.iter_mut(app.world_mut()) {
        stick.0 = Demands::new(0.6, 0.0, 0.0, 0.0);
    }

    let steps_per_second = (1.0 / PhysicsConfig::default().timestep).round() as usize;
    for second in 1..=5 {
        for _ in 0..steps_per_second {
            app.world_mut().run_schedule(FixedUpdate);
        }

        let mut states = app.world_mut().query::<&VehicleState>();
        for state in states.iter(app.world()) {
            info!(
                "t={}s agl={:.2} m climb={:.2} m/s attitude=[{:.2}, {:.2}, {:.2}] deg",
                second,
                state.position.z,
                state.velocity.z,
                state.attitude.x,
                state.attitude.y,
                state.attitude.z,
            );
        }
    }
}
