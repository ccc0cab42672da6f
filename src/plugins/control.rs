use bevy::prelude::*;

use crate::plugins::SimSet;
use crate::resources::{advance_sim_time, SimTime};
use crate::systems::{flight_control_system, mixer_system};

/// Control side of the tick: simulation clock, PID pipeline, mixer.
pub struct ControlPlugin;

impl Plugin for ControlPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimTime>();

        app.configure_sets(
            FixedUpdate,
            (SimSet::Time, SimSet::Pid, SimSet::Mix).chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                advance_sim_time.in_set(SimSet::Time),
                flight_control_system.in_set(SimSet::Pid),
                mixer_system.in_set(SimSet::Mix),
            ),
        );
    }
}
