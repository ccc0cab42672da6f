use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Mass and inertia constants for a multirotor airframe.
///
/// The inertia tensor is diagonal (symmetric airframe assumption), so the
/// three principal moments are stored directly rather than as a matrix.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassModel {
    /// Total mass [kg].
    pub mass: f64,
    /// Moment of inertia about the body x-axis [kg m^2].
    pub ixx: f64,
    /// Moment of inertia about the body y-axis [kg m^2].
    pub iyy: f64,
    /// Moment of inertia about the body z-axis [kg m^2].
    pub izz: f64,
    /// Rotor moment of inertia Jr [kg m^2], for gyroscopic coupling.
    pub jr: f64,
}

impl MassModel {
    pub fn new(mass: f64, ixx: f64, iyy: f64, izz: f64, jr: f64) -> Self {
        Self {
            mass,
            ixx,
            iyy,
            izz,
            jr,
        }
    }
}
