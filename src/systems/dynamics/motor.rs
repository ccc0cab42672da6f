use std::f64::consts::PI;

/// Converts a normalized motor command in [0, 1] to rotor angular speed
/// [rad/s]. Out-of-range commands are clamped, not rejected, so a
/// saturated mixer frame can never fault the dynamics mid-run.
pub fn motor_speed(command: f64, max_rpm: f64) -> f64 {
    command.clamp(0.0, 1.0) * max_rpm * PI / 30.0
}

/// Rotor thrust [N] at angular speed omega: F = b * omega^2.
pub fn thrust(omega: f64, thrust_coefficient: f64) -> f64 {
    thrust_coefficient * omega * omega
}

/// Rotor reaction torque magnitude [N m] at angular speed omega:
/// T = d * omega^2.
pub fn reaction_torque(omega: f64, torque_coefficient: f64) -> f64 {
    torque_coefficient * omega * omega
}
