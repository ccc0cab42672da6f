use rotorsim::components::VehicleState;

/// Assert that every scalar in a vehicle state is finite.
#[track_caller]
pub fn assert_state_valid(state: &VehicleState) {
    for (vector, name) in [
        (&state.position, "position"),
        (&state.velocity, "velocity"),
        (&state.attitude, "attitude"),
        (&state.rates, "rates"),
    ] {
        assert!(
            vector.iter().all(|v| v.is_finite()),
            "{name} contains non-finite values: {vector:?}"
        );
    }
}

/// Assert that a motor-command frame stays in the normalized range.
#[track_caller]
pub fn assert_motors_in_range(motors: &[f64]) {
    for (i, &value) in motors.iter().enumerate() {
        assert!(
            (0.0..=1.0).contains(&value),
            "motor {i} out of range: {value}"
        );
    }
}
