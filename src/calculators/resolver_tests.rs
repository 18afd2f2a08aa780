// src/calculators/resolver_tests.rs

use std::f64::consts::{PI, TAU};
use crate::assert_float_eq;
use crate::calculators::{guards, resolve, CalculationMethod, ErrorKind, VariableCatalog, Values};

static RADIUS_METHODS: &[CalculationMethod] = &[
    CalculationMethod {
        id: "velocity_angular_velocity",
        required_variables: &["linear_velocity", "angular_velocity"],
        formula: "r = v / ω",
        description: "From linear and angular velocity",
        priority: 1,
        calculate: |v| v.value("linear_velocity") / v.value("angular_velocity"),
        validate: Some(|v| guards::non_zero(v, "angular_velocity")),
    },
    CalculationMethod {
        id: "velocity_period",
        required_variables: &["linear_velocity", "period"],
        formula: "r = v·T / 2π",
        description: "From linear velocity and period",
        priority: 2,
        calculate: |v| v.value("linear_velocity") * v.value("period") / TAU,
        validate: Some(|v| guards::positive(v, "period")),
    },
];

// Deliberately listed out of priority order.
static UNSORTED_METHODS: &[CalculationMethod] = &[
    CalculationMethod {
        id: "slow",
        required_variables: &["a"],
        formula: "x = 2a",
        description: "Slow path",
        priority: 9,
        calculate: |v| 2.0 * v.value("a"),
        validate: None,
    },
    CalculationMethod {
        id: "fast",
        required_variables: &["a"],
        formula: "x = a",
        description: "Fast path",
        priority: 1,
        calculate: |v| v.value("a"),
        validate: None,
    },
];

static FRAGILE_METHODS: &[CalculationMethod] = &[
    CalculationMethod {
        id: "log_of_a",
        required_variables: &["a"],
        formula: "x = ln(a)",
        description: "Logarithm",
        priority: 1,
        calculate: |v| v.value("a").ln(),
        validate: None,
    },
    CalculationMethod {
        id: "inverse_of_b",
        required_variables: &["b"],
        formula: "x = 1 / b",
        description: "Inverse",
        priority: 2,
        calculate: |v| 1.0 / v.value("b"),
        validate: Some(|v| guards::non_zero(v, "b")),
    },
];

fn radius(values: &Values) -> crate::calculators::CalculationResult {
    resolve("radius", RADIUS_METHODS, values, "m", "radius")
}

#[test]
fn test_falls_back_to_second_method() {
    let values = Values::from([("linear_velocity", 10.0), ("period", PI)]);
    let result = radius(&values);

    assert_float_eq(result.value().unwrap(), 5.0, 1e-12, Some("r = v·T / 2π"));
    assert_eq!(result.method_used(), Some("velocity_period"));
    assert_eq!(result.formula(), "r = v·T / 2π");
    assert_eq!(result.unit(), "m");
    assert_eq!(result.name(), "radius");
    assert_eq!(result.unavailable_methods(), &["velocity_angular_velocity"]);
    assert!(result.failed_methods().is_empty(), "Unavailable methods are not failures");
    assert_eq!(result.available_methods(), &["From linear velocity and period".to_string()]);
    assert!(result.warnings().is_empty(), "Only one method was available");
    assert!(result.error().is_none());
}

#[test]
fn test_zero_input_is_present() {
    let values = Values::from([("linear_velocity", 0.0), ("angular_velocity", 2.0)]);
    let result = radius(&values);

    assert_eq!(result.value(), Some(0.0));
    assert_eq!(result.method_used(), Some("velocity_angular_velocity"));
}

#[test]
fn test_division_guard_surfaces_when_only_method() {
    let values = Values::from([("linear_velocity", 10.0), ("angular_velocity", 0.0)]);
    let result = radius(&values);

    assert_eq!(result.value(), None);
    let error = result.error().expect("error must be present when value is absent");
    assert_eq!(error.kind, ErrorKind::DivisionByZero);
    assert!(!error.message.is_empty());
    assert!(!error.technical.is_empty());
    assert!(!error.suggestions.is_empty());
    assert_eq!(result.failed_methods().len(), 1);
    assert_eq!(result.failed_methods()[0].kind, ErrorKind::DivisionByZero);
}

#[test]
fn test_division_guard_routes_around_when_alternative_exists() {
    let values = Values::from([("linear_velocity", 10.0), ("angular_velocity", 0.0), ("period", PI)]);
    let result = radius(&values);

    assert_float_eq(result.value().unwrap(), 5.0, 1e-12, None);
    assert_eq!(result.method_used(), Some("velocity_period"));
    assert_eq!(result.failed_methods().len(), 1);
    assert_eq!(result.failed_methods()[0].method_id, "velocity_angular_velocity");
    assert_eq!(result.warnings().len(), 1);
    assert!(result.warnings()[0].contains("From linear and angular velocity"));
}

#[test]
fn test_warning_lists_alternatives_when_several_available() {
    let values = Values::from([("linear_velocity", 10.0), ("angular_velocity", 2.0), ("period", PI)]);
    let result = radius(&values);

    assert_eq!(result.value(), Some(5.0));
    assert_eq!(result.method_used(), Some("velocity_angular_velocity"));
    assert_eq!(result.available_methods().len(), 2);
    assert_eq!(result.warnings().len(), 1);
    assert!(result.warnings()[0].contains("From linear velocity and period"));
    assert!(!result.warnings()[0].contains("From linear and angular velocity"));
}

#[test]
fn test_insufficient_data_lists_supplied_values() {
    let values = Values::from([("period", 2.0), ("mass", 3.0)]);
    let result = radius(&values);

    assert_eq!(result.value(), None);
    let error = result.error().unwrap();
    assert_eq!(error.kind, ErrorKind::InsufficientData);
    assert!(error.message.contains("radius"));
    assert!(error.technical.contains("mass, period"));
    assert_eq!(error.suggestions.len(), 2);
    assert_eq!(result.unavailable_methods().len(), 2);
}

#[test]
fn test_nan_counts_as_missing() {
    let values = Values::from([("linear_velocity", f64::NAN), ("angular_velocity", 2.0)]);
    let result = radius(&values);
    assert_eq!(result.error().unwrap().kind, ErrorKind::InsufficientData);
}

#[test]
fn test_infinite_input_is_invalid() {
    let values = Values::from([("linear_velocity", f64::INFINITY), ("angular_velocity", 2.0)]);
    let result = radius(&values);
    assert_eq!(result.error().unwrap().kind, ErrorKind::InvalidValues);
}

#[test]
fn test_methods_tried_in_priority_order() {
    let values = Values::from([("a", 3.0)]);
    let result = resolve("x", UNSORTED_METHODS, &values, "1", "x");

    assert_eq!(result.value(), Some(3.0));
    assert_eq!(result.method_used(), Some("fast"));
    assert_eq!(result.available_methods(), &["Fast path".to_string(), "Slow path".to_string()]);
}

#[test]
fn test_non_finite_result_falls_through() {
    // ln(-1) is NaN, so the inverse method must take over.
    let values = Values::from([("a", -1.0), ("b", 4.0)]);
    let result = resolve("x", FRAGILE_METHODS, &values, "1", "x");

    assert_eq!(result.value(), Some(0.25));
    assert_eq!(result.method_used(), Some("inverse_of_b"));
    assert_eq!(result.failed_methods()[0].kind, ErrorKind::MathematicalError);
}

#[test]
fn test_all_methods_failing_reports_mathematical_error() {
    let values = Values::from([("a", -1.0), ("b", 0.0)]);
    let result = resolve("x", FRAGILE_METHODS, &values, "1", "x");

    assert_eq!(result.value(), None);
    let error = result.error().unwrap();
    assert_eq!(error.kind, ErrorKind::MathematicalError);
    assert!(error.technical.contains('2'), "Should report how many methods were attempted");
    assert_eq!(result.failed_methods().len(), 2);
}

#[test]
fn test_empty_catalog_is_insufficient_data() {
    let result = resolve("nothing", &[], &Values::new(), "", "nothing");
    assert_eq!(result.error().unwrap().kind, ErrorKind::InsufficientData);
    assert!(result.error().unwrap().technical.contains("none"));
}

#[test]
fn test_value_present_iff_error_absent() {
    let inputs = [
        Values::from([("linear_velocity", 10.0), ("period", PI)]),
        Values::from([("linear_velocity", 10.0), ("angular_velocity", 0.0)]),
        Values::new(),
    ];
    for values in &inputs {
        let result = radius(values);
        assert_eq!(result.value().is_some(), result.error().is_none());
    }
}

#[test]
fn test_into_result() {
    let ok = radius(&Values::from([("linear_velocity", 4.0), ("angular_velocity", 2.0)]));
    assert_eq!(ok.into_result(), Ok(2.0));

    let err = radius(&Values::new()).into_result().unwrap_err();
    assert_eq!(err.kind, ErrorKind::InsufficientData);
    assert!(err.to_string().starts_with("insufficient_data"));
}

#[test]
fn test_variable_catalog_helpers() {
    let catalog = VariableCatalog {
        target: "radius",
        display_name: "radius",
        unit: "m",
        methods: RADIUS_METHODS,
    };
    assert_eq!(catalog.input_variables(), vec!["angular_velocity", "linear_velocity", "period"]);
    assert!(catalog.method("velocity_period").is_some());
    assert!(catalog.method("unknown").is_none());
    assert_eq!(
        catalog.method("velocity_period").unwrap().missing_variables(&Values::from([("period", 1.0)])),
        vec!["linear_velocity"]
    );
    assert_eq!(catalog.resolve(&Values::from([("linear_velocity", 6.0), ("angular_velocity", 3.0)])).value(), Some(2.0));
}
