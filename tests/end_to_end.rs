mod common;

use approx::assert_relative_eq;
use rotorsim::components::{
    CorrectedDemands, Demands, MotorCommands, RotorLayout, StickDemands, VehicleConfig,
    VehicleState,
};
use rotorsim::plugins::VehiclePlugin;

use crate::common::{assert_motors_in_range, assert_state_valid, TestAppBuilder};

#[test]
fn zero_throttle_leaves_demands_and_motors_untouched() {
    let mut app = TestAppBuilder::new().build();
    app.set_stick_demands(Demands::default());

    // A full second of ticks at zero throttle: the reset boundary must
    // not let any correction leak into the demand vector.
    for _ in 0..120 {
        app.run_steps(1);

        let stick = app.query_single::<StickDemands>().unwrap();
        let corrected = app.query_single::<CorrectedDemands>().unwrap();
        assert_eq!(corrected.0, stick.0);

        let motors = app.query_single::<MotorCommands>().unwrap();
        assert_eq!(motors.0, vec![0.0; 4]);
    }

    // The vehicle never moved.
    let state = app.query_single::<VehicleState>().unwrap();
    assert_relative_eq!(state.position.z, 0.0);
    assert_relative_eq!(state.velocity.norm(), 0.0);
}

#[test]
fn constant_throttle_climb_stays_level() {
    let mut app = TestAppBuilder::new().build();
    // Well above both the hover command and the altitude-hold band.
    app.set_stick_demands(Demands::new(0.75, 0.0, 0.0, 0.0));

    // Five seconds of climb.
    app.run_steps(600);

    let state = app.query_single::<VehicleState>().unwrap();
    assert_state_valid(&state);
    assert!(state.position.z > 1.0, "agl = {}", state.position.z);
    assert!(state.velocity.z > 0.0);

    // A symmetric quad under symmetric demands must not pick up spurious
    // roll or pitch from floating-point asymmetry.
    assert_relative_eq!(state.rates.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(state.rates.y, 0.0, epsilon = 1e-9);
    assert_relative_eq!(state.attitude.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(state.attitude.y, 0.0, epsilon = 1e-9);

    let motors = app.query_single::<MotorCommands>().unwrap();
    assert_motors_in_range(&motors.0);
    assert_relative_eq!(motors.0[0], motors.0[1]);
    assert_relative_eq!(motors.0[0], motors.0[2]);
    assert_relative_eq!(motors.0[0], motors.0[3]);
}

#[test]
fn altitude_hold_keeps_the_vehicle_aloft() {
    let mut app = TestAppBuilder::new().build();

    // Start the scenario already hovering at 15 m with the throttle in
    // the hold band.
    app.edit_rigid_body(|body| {
        body.position.z = -15.0;
        body.airborne = true;
    });
    app.set_stick_demands(Demands::new(0.5, 0.0, 0.0, 0.0));

    // Ten seconds under the hold.
    app.run_steps(1200);

    let state = app.query_single::<VehicleState>().unwrap();
    assert_state_valid(&state);
    assert!(
        state.position.z > 5.0 && state.position.z < 30.0,
        "altitude drifted to {}",
        state.position.z
    );
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let mut config = VehicleConfig::phantom();
    config.mass.mass = -1.0;
    assert!(VehiclePlugin::new(config).is_err());

    let mut config = VehicleConfig::iris();
    config.layout = RotorLayout::Offsets { rotors: Vec::new() };
    assert!(VehiclePlugin::new(config).is_err());
}
