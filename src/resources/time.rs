use bevy::prelude::*;

use crate::resources::PhysicsConfig;

/// Deterministic simulation clock, advanced by exactly one physics
/// timestep per tick. The PID controllers derive their dt from this
/// clock's microsecond timestamps, never from wall time, so replays of
/// identical inputs produce identical output.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct SimTime {
    elapsed: f64,
}

impl SimTime {
    pub fn seconds(&self) -> f64 {
        self.elapsed
    }

    /// Elapsed simulation time in whole microseconds.
    pub fn micros(&self) -> u64 {
        (self.elapsed * 1e6) as u64
    }

    pub fn advance(&mut self, dt: f64) {
        self.elapsed += dt;
    }
}

/// Time stage: ticks the simulation clock before any control or dynamics
/// system runs.
pub fn advance_sim_time(config: Res<PhysicsConfig>, mut time: ResMut<SimTime>) {
    time.advance(config.timestep);
}
