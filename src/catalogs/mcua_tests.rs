// src/catalogs/mcua_tests.rs

use approx::assert_relative_eq;
use crate::calculators::{ErrorKind, Values};
use crate::catalogs::mcua::*;
use crate::catalogs::variables::*;
use crate::motion::CircularParticle;

#[test]
fn test_final_angular_velocity() {
    let values = Values::from([(INITIAL_ANGULAR_VELOCITY, 0.0), (ANGULAR_ACCELERATION, 2.0), (TIME, 3.0)]);
    let result = FINAL_ANGULAR_VELOCITY_CATALOG.resolve(&values);
    assert_eq!(result.value(), Some(6.0));
    assert_eq!(result.method_used(), Some("final_angular_velocity_from_acceleration_and_time"));

    let values = Values::from([(INITIAL_ANGULAR_VELOCITY, 0.0), (ANGULAR_ACCELERATION, 2.0), (ANGULAR_DISPLACEMENT, 9.0)]);
    assert_relative_eq!(FINAL_ANGULAR_VELOCITY_CATALOG.resolve(&values).value().unwrap(), 6.0, epsilon = 1e-12);

    let values = Values::from([(INITIAL_ANGULAR_VELOCITY, 0.0), (ANGULAR_DISPLACEMENT, 9.0), (TIME, 3.0)]);
    assert_eq!(FINAL_ANGULAR_VELOCITY_CATALOG.resolve(&values).value(), Some(6.0));
}

#[test]
fn test_final_angular_velocity_with_zero_time_and_zero_acceleration() {
    let values = Values::from([(INITIAL_ANGULAR_VELOCITY, 4.0), (ANGULAR_ACCELERATION, 2.0), (TIME, 0.0)]);
    assert_eq!(FINAL_ANGULAR_VELOCITY_CATALOG.resolve(&values).value(), Some(4.0));

    let values = Values::from([(INITIAL_ANGULAR_VELOCITY, 4.0), (ANGULAR_ACCELERATION, 0.0), (TIME, 5.0)]);
    assert_eq!(FINAL_ANGULAR_VELOCITY_CATALOG.resolve(&values).value(), Some(4.0));
}

#[test]
fn test_final_angular_velocity_negative_radicand() {
    let values = Values::from([(INITIAL_ANGULAR_VELOCITY, 1.0), (ANGULAR_ACCELERATION, -1.0), (ANGULAR_DISPLACEMENT, 5.0)]);
    let result = FINAL_ANGULAR_VELOCITY_CATALOG.resolve(&values);
    assert_eq!(result.error().unwrap().kind, ErrorKind::OutOfRange);
}

#[test]
fn test_initial_angular_velocity() {
    let values = Values::from([(FINAL_ANGULAR_VELOCITY, 6.0), (ANGULAR_ACCELERATION, 2.0), (TIME, 3.0)]);
    assert_eq!(INITIAL_ANGULAR_VELOCITY_CATALOG.resolve(&values).value(), Some(0.0));

    let values = Values::from([(ANGULAR_DISPLACEMENT, 9.0), (ANGULAR_ACCELERATION, 2.0), (TIME, 3.0)]);
    assert_eq!(INITIAL_ANGULAR_VELOCITY_CATALOG.resolve(&values).value(), Some(0.0));

    let values = Values::from([(FINAL_ANGULAR_VELOCITY, 6.0), (ANGULAR_ACCELERATION, 2.0), (ANGULAR_DISPLACEMENT, 9.0)]);
    assert_relative_eq!(INITIAL_ANGULAR_VELOCITY_CATALOG.resolve(&values).value().unwrap(), 0.0, epsilon = 1e-12);
}

#[test]
fn test_angular_acceleration() {
    let values = Values::from([(FINAL_ANGULAR_VELOCITY, 6.0), (INITIAL_ANGULAR_VELOCITY, 0.0), (TIME, 3.0)]);
    assert_eq!(ANGULAR_ACCELERATION_CATALOG.resolve(&values).value(), Some(2.0));

    let values = Values::from([(TANGENTIAL_ACCELERATION, 20.0), (RADIUS, 10.0)]);
    assert_eq!(ANGULAR_ACCELERATION_CATALOG.resolve(&values).value(), Some(2.0));

    let values = Values::from([(ANGULAR_DISPLACEMENT, 9.0), (INITIAL_ANGULAR_VELOCITY, 0.0), (TIME, 3.0)]);
    assert_eq!(ANGULAR_ACCELERATION_CATALOG.resolve(&values).value(), Some(2.0));

    let values = Values::from([(FINAL_ANGULAR_VELOCITY, 6.0), (INITIAL_ANGULAR_VELOCITY, 0.0), (ANGULAR_DISPLACEMENT, 9.0)]);
    assert_eq!(ANGULAR_ACCELERATION_CATALOG.resolve(&values).value(), Some(2.0));
}

#[test]
fn test_angular_acceleration_zero_time_is_division_by_zero() {
    let values = Values::from([(FINAL_ANGULAR_VELOCITY, 6.0), (INITIAL_ANGULAR_VELOCITY, 0.0), (TIME, 0.0)]);
    let result = ANGULAR_ACCELERATION_CATALOG.resolve(&values);
    // Only the velocities-and-time method is applicable, so its rejection is surfaced.
    assert_eq!(result.error().unwrap().kind, ErrorKind::DivisionByZero);
}

#[test]
fn test_angular_displacement() {
    let values = Values::from([(INITIAL_ANGULAR_VELOCITY, 0.0), (ANGULAR_ACCELERATION, 2.0), (TIME, 3.0)]);
    assert_eq!(ANGULAR_DISPLACEMENT_CATALOG.resolve(&values).value(), Some(9.0));

    let values = Values::from([(ANGULAR_VELOCITY, 2.0), (TIME, 3.0)]);
    assert_eq!(ANGULAR_DISPLACEMENT_CATALOG.resolve(&values).value(), Some(6.0));

    let values = Values::from([(INITIAL_ANGULAR_VELOCITY, 0.0), (FINAL_ANGULAR_VELOCITY, 6.0), (TIME, 3.0)]);
    assert_eq!(ANGULAR_DISPLACEMENT_CATALOG.resolve(&values).value(), Some(9.0));

    let values = Values::from([(ARC_LENGTH, 6.0), (RADIUS, 3.0)]);
    assert_eq!(ANGULAR_DISPLACEMENT_CATALOG.resolve(&values).value(), Some(2.0));
}

#[test]
fn test_angular_displacement_zero_acceleration_falls_back() {
    let values = Values::from([(INITIAL_ANGULAR_VELOCITY, 2.0), (FINAL_ANGULAR_VELOCITY, 2.0), (ANGULAR_ACCELERATION, 0.0)]);
    let result = ANGULAR_DISPLACEMENT_CATALOG.resolve(&values);
    assert_eq!(result.error().unwrap().kind, ErrorKind::DivisionByZero);

    let values = values.with(TIME, 1.5);
    let result = ANGULAR_DISPLACEMENT_CATALOG.resolve(&values);
    assert_eq!(result.value(), Some(3.0));
    assert_eq!(result.method_used(), Some("angular_displacement_from_acceleration_and_time"));
}

#[test]
fn test_time() {
    let values = Values::from([(FINAL_ANGULAR_VELOCITY, 6.0), (INITIAL_ANGULAR_VELOCITY, 0.0), (ANGULAR_ACCELERATION, 2.0)]);
    assert_eq!(TIME_CATALOG.resolve(&values).value(), Some(3.0));

    let values = Values::from([(ANGULAR_DISPLACEMENT, 6.0), (ANGULAR_VELOCITY, 2.0)]);
    assert_eq!(TIME_CATALOG.resolve(&values).value(), Some(3.0));

    let values = Values::from([(ANGULAR_DISPLACEMENT, 9.0), (INITIAL_ANGULAR_VELOCITY, 0.0), (FINAL_ANGULAR_VELOCITY, 6.0)]);
    assert_eq!(TIME_CATALOG.resolve(&values).value(), Some(3.0));

    let values = Values::from([(ARC_LENGTH, 30.0), (LINEAR_VELOCITY, 10.0)]);
    assert_eq!(TIME_CATALOG.resolve(&values).value(), Some(3.0));
}

#[test]
fn test_time_from_quadratic() {
    let values = Values::from([(ANGULAR_DISPLACEMENT, 9.0), (INITIAL_ANGULAR_VELOCITY, 0.0), (ANGULAR_ACCELERATION, 2.0)]);
    let result = TIME_CATALOG.resolve(&values);
    assert_relative_eq!(result.value().unwrap(), 3.0, epsilon = 1e-12);
    assert_eq!(result.method_used(), Some("time_from_displacement_quadratic"));

    // Decelerating body reaches θ = 3 first at t = 1 (θ = 4t − t²).
    let values = Values::from([(ANGULAR_DISPLACEMENT, 3.0), (INITIAL_ANGULAR_VELOCITY, 4.0), (ANGULAR_ACCELERATION, -2.0)]);
    assert_relative_eq!(TIME_CATALOG.resolve(&values).value().unwrap(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_time_rejects_negative_results() {
    let values = Values::from([(FINAL_ANGULAR_VELOCITY, 0.0), (INITIAL_ANGULAR_VELOCITY, 6.0), (ANGULAR_ACCELERATION, 2.0)]);
    let result = TIME_CATALOG.resolve(&values);
    assert_eq!(result.value(), None);
    assert_eq!(result.error().unwrap().kind, ErrorKind::OutOfRange);
}

#[test]
fn test_tangential_and_total_acceleration() {
    let values = Values::from([(ANGULAR_ACCELERATION, 2.0), (RADIUS, 10.0)]);
    assert_eq!(TANGENTIAL_ACCELERATION_CATALOG.resolve(&values).value(), Some(20.0));

    let values = Values::from([(ANGULAR_ACCELERATION, 0.0), (RADIUS, 10.0)]);
    assert_eq!(TANGENTIAL_ACCELERATION_CATALOG.resolve(&values).value(), Some(0.0));

    let values = Values::from([(TOTAL_ACCELERATION, 5.0), (CENTRIPETAL_ACCELERATION, 4.0)]);
    assert_relative_eq!(TANGENTIAL_ACCELERATION_CATALOG.resolve(&values).value().unwrap(), 3.0, epsilon = 1e-12);

    let values = Values::from([(TOTAL_ACCELERATION, 3.0), (CENTRIPETAL_ACCELERATION, 4.0)]);
    assert_eq!(TANGENTIAL_ACCELERATION_CATALOG.resolve(&values).error().unwrap().kind, ErrorKind::OutOfRange);

    let values = Values::from([(CENTRIPETAL_ACCELERATION, 4.0), (TANGENTIAL_ACCELERATION, 3.0)]);
    assert_relative_eq!(TOTAL_ACCELERATION_CATALOG.resolve(&values).value().unwrap(), 5.0, epsilon = 1e-12);

    let values = Values::from([(CENTRIPETAL_ACCELERATION, 0.0), (TANGENTIAL_ACCELERATION, 0.0)]);
    assert_eq!(TOTAL_ACCELERATION_CATALOG.resolve(&values).value(), Some(0.0));
}

#[test]
fn test_catalogs_agree_with_motion_model() {
    let particle = CircularParticle::accelerated(10.0, 0.0, 2.0).unwrap();
    let state = particle.state(3.0);

    let values = Values::from([
        (RADIUS, particle.radius()),
        (FINAL_ANGULAR_VELOCITY, state.angular_velocity),
        (ANGULAR_ACCELERATION, particle.angular_acceleration()),
    ]);
    let total = TOTAL_ACCELERATION_CATALOG.resolve(&values).value().unwrap();
    assert_relative_eq!(total, state.total_acceleration.magnitude, max_relative = 1e-12);
    assert_relative_eq!(total, 360.5551275463989, max_relative = 1e-12);
}
