// rs_kinematics_wasm/tests/web.rs
// Run with: wasm-pack test --node rs_kinematics_wasm

use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use rs_kinematics_wasm::{WasmCalculator, WasmSimulator};

fn inputs(pairs: &[(&str, JsValue)]) -> Object {
    let object = Object::new();
    for (name, value) in pairs {
        Reflect::set(&object, &JsValue::from_str(name), value).unwrap();
    }
    object
}

#[wasm_bindgen_test]
fn zero_is_a_value_and_numeric_strings_are_parsed() {
    let calculator = WasmCalculator::new();
    let result = calculator.resolve(
        "radius",
        &inputs(&[
            ("linear_velocity", JsValue::from_f64(0.0)),
            ("angular_velocity", JsValue::from_str("2")),
        ]),
    );

    assert!(result.success());
    assert_eq!(result.value(), Some(0.0));
    assert_eq!(result.unit(), "m");
    assert_eq!(result.method_used().as_deref(), Some("radius_from_linear_and_angular_velocity"));
}

#[wasm_bindgen_test]
fn blank_null_and_undefined_fields_are_missing() {
    let calculator = WasmCalculator::new();
    let result = calculator.resolve(
        "radius",
        &inputs(&[
            ("linear_velocity", JsValue::from_f64(10.0)),
            ("angular_velocity", JsValue::from_str("  ")),
            ("period", JsValue::NULL),
            ("frequency", JsValue::UNDEFINED),
        ]),
    );

    assert!(!result.success());
    assert_eq!(result.value(), None);
    assert_eq!(result.error_kind().as_deref(), Some("insufficient_data"));
    assert!(result.suggestions().length() > 0);
}

#[wasm_bindgen_test]
fn unparseable_string_is_missing() {
    let calculator = WasmCalculator::new();
    let result = calculator.resolve(
        "period",
        &inputs(&[("angular_velocity", JsValue::from_str("fast"))]),
    );
    assert_eq!(result.error_kind().as_deref(), Some("insufficient_data"));
}

#[wasm_bindgen_test]
fn frames_advance_elapsed_time() {
    let mut simulator = WasmSimulator::new(800.0, 600.0).unwrap();
    simulator.start();

    assert!(simulator.frame(0.0));
    assert_eq!(simulator.elapsed_time(), 0.0);
    assert!(simulator.frame(500.0));
    assert!((simulator.elapsed_time() - 0.5).abs() < 1e-12);

    let state = simulator.current_state().unwrap();
    assert!((state.time() - 0.5).abs() < 1e-12);
    let radius = ((state.x() - 400.0).powi(2) + (state.y() - 300.0).powi(2)).sqrt();
    assert!((radius - 100.0).abs() < 1e-9);

    simulator.pause();
    assert!(!simulator.frame(1500.0));
    assert!((simulator.elapsed_time() - 0.5).abs() < 1e-12);
}

#[wasm_bindgen_test]
fn color_round_trips_through_the_particle() {
    let mut simulator = WasmSimulator::new(100.0, 100.0).unwrap();
    assert_eq!(simulator.color().as_deref(), Some("#3b82f6"));
    simulator.set_color(String::from("crimson"));
    assert_eq!(simulator.color().as_deref(), Some("crimson"));
}
