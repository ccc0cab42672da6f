use serde::{Deserialize, Serialize};

/// Position and spin direction of one rotor on an asymmetric frame.
///
/// Coordinates are body-frame meters from the center of mass, x forward,
/// y right. `spin` is +1 for counter-clockwise rotors (viewed from above),
/// -1 for clockwise; the sign fixes which way the reaction torque acts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotorGeometry {
    pub x: f64,
    pub y: f64,
    pub spin: f64,
}

/// Airframe-specific rotor layout. The layout owns the geometry weighting
/// used when per-motor thrusts are folded into net moments, so the same
/// integrator serves symmetric quads, asymmetric quads and vectored-thrust
/// frames without any airframe branching of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RotorLayout {
    /// Symmetric quad-X: four identical arms of the given length, motors
    /// ordered rear-right, front-right, rear-left, front-left.
    QuadX { arm_length: f64 },
    /// Arbitrary per-motor offsets (e.g. the 3DR Iris, whose front and
    /// rear arms differ). Motor order follows the vector.
    Offsets { rotors: Vec<RotorGeometry> },
    /// Two counter-rotating rotors on a thrust barrel, steered by two
    /// nozzle channels. `nozzle_max_angle` is the full deflection [rad];
    /// `moment_arm` the distance from nozzle to center of mass [m].
    VectoredThrust {
        nozzle_max_angle: f64,
        moment_arm: f64,
    },
}

impl RotorLayout {
    /// Number of spinning rotors.
    pub fn rotor_count(&self) -> usize {
        match self {
            RotorLayout::QuadX { .. } => 4,
            RotorLayout::Offsets { rotors } => rotors.len(),
            RotorLayout::VectoredThrust { .. } => 2,
        }
    }

    /// Number of values in a motor-command frame. For vectored thrust this
    /// exceeds the rotor count: channels 2 and 3 carry nozzle deflections.
    pub fn command_count(&self) -> usize {
        match self {
            RotorLayout::VectoredThrust { .. } => 4,
            _ => self.rotor_count(),
        }
    }
}
