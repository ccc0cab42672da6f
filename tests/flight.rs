mod common;

use approx::assert_relative_eq;
use nalgebra::Vector3;
use rotorsim::components::{Demands, RigidBodyState, VehicleState};

use crate::common::{assert_state_valid, create_test_vehicle_config, hover_command, TestAppBuilder};

#[test]
fn vehicle_stays_grounded_below_takeoff_thrust() {
    let mut app = TestAppBuilder::new().build();

    // Enough throttle to spin the motors, not enough to lift the weight.
    app.set_stick_demands(Demands::new(0.3, 0.0, 0.0, 0.0));
    app.run_steps(240);

    let body = app.query_single::<RigidBodyState>().unwrap();
    assert!(!body.airborne);
    assert_relative_eq!(body.position.z, 0.0);
    assert_relative_eq!(body.velocity.norm(), 0.0);
}

#[test]
fn takeoff_latch_releases_once_thrust_exceeds_weight() {
    let mut app = TestAppBuilder::new().build();

    // Sanity-check the scenario thresholds against the hover point.
    let hover = hover_command(&create_test_vehicle_config());
    assert!(0.3 < hover && hover < 0.75, "hover command = {hover}");

    app.set_stick_demands(Demands::new(0.3, 0.0, 0.0, 0.0));
    app.run_steps(120);
    assert!(!app.query_single::<RigidBodyState>().unwrap().airborne);

    app.set_stick_demands(Demands::new(0.75, 0.0, 0.0, 0.0));
    app.run_steps(120);

    let body = app.query_single::<RigidBodyState>().unwrap();
    assert!(body.airborne);
    assert!(body.agl() > 0.0);
}

#[test]
fn cutting_throttle_lands_and_settles() {
    let mut app = TestAppBuilder::new().build();

    // Hover low with a little sideways drift, then cut the throttle.
    app.edit_rigid_body(|body| {
        body.position = Vector3::new(0.0, 0.0, -2.0);
        body.velocity = Vector3::new(0.4, 0.0, 0.0);
        body.airborne = true;
    });
    app.set_stick_demands(Demands::default());

    // Two meters of fall plus the settling interval fit well inside
    // four seconds.
    app.run_steps(480);

    let body = app.query_single::<RigidBodyState>().unwrap();
    assert!(!body.airborne, "vehicle should have landed and settled");
    assert!(body.position.z <= 1e-9, "vehicle sank below ground level");
    assert_relative_eq!(body.velocity.norm(), 0.0);
    assert_relative_eq!(body.rates.norm(), 0.0);

    let state = app.query_single::<VehicleState>().unwrap();
    assert_state_valid(&state);
}

#[test]
fn yaw_demand_turns_the_vehicle() {
    let mut app = TestAppBuilder::new().build();

    app.edit_rigid_body(|body| {
        body.position.z = -20.0;
        body.airborne = true;
    });
    // Hover-band throttle with a steady right-yaw demand.
    app.set_stick_demands(Demands::new(0.5, 0.0, 0.0, 0.3));

    app.run_steps(600);

    let state = app.query_single::<VehicleState>().unwrap();
    assert_state_valid(&state);
    assert!(
        state.attitude.z > 1.0,
        "expected a right turn, yaw = {} deg",
        state.attitude.z
    );
}
