//! Picks a calculation method for a target variable and runs it.
//!
//! A quantity can usually be derived in several ways (a radius from `v` and
//! `ω`, or from `v` and `T`, ...). [`resolve`] keeps the methods whose inputs
//! were supplied, tries them from lowest to highest priority and returns the
//! first finite value. A method rejected by its validator only surfaces as an
//! error when nothing else could be tried.
//!
//! # Example
//!
//! ```
//! use rs_kinematics::calculators::{resolve, CalculationMethod, Values};
//!
//! static RADIUS: &[CalculationMethod] = &[
//!     CalculationMethod {
//!         id: "radius_from_velocity_and_angular_velocity",
//!         required_variables: &["linear_velocity", "angular_velocity"],
//!         formula: "r = v / ω",
//!         description: "From linear and angular velocity",
//!         priority: 1,
//!         calculate: |v| v.value("linear_velocity") / v.value("angular_velocity"),
//!         validate: None,
//!     },
//!     CalculationMethod {
//!         id: "radius_from_velocity_and_period",
//!         required_variables: &["linear_velocity", "period"],
//!         formula: "r = v·T / 2π",
//!         description: "From linear velocity and period",
//!         priority: 2,
//!         calculate: |v| v.value("linear_velocity") * v.value("period") / std::f64::consts::TAU,
//!         validate: None,
//!     },
//! ];
//!
//! let values = Values::from([("linear_velocity", 10.0), ("period", std::f64::consts::PI)]);
//! let result = resolve("radius", RADIUS, &values, "m", "radius");
//!
//! assert!((result.value().unwrap() - 5.0).abs() < 1e-12);
//! assert_eq!(result.method_used(), Some("radius_from_velocity_and_period"));
//! assert_eq!(result.unavailable_methods(), &["radius_from_velocity_and_angular_velocity"]);
//! ```
use log::debug;
use crate::calculators::{CalculationError, CalculationMethod, CalculationResult, FailedMethod, Values};

/// Resolves `target` against `catalog` with the known `values`.
///
/// Never panics and never fails: problems are reported through
/// [`CalculationResult::error`] with `value() == None`.
pub fn resolve(
    target: &str,
    catalog: &[CalculationMethod],
    values: &Values,
    default_unit: &str,
    display_name: &str,
) -> CalculationResult {
    let (mut candidates, unavailable): (Vec<&CalculationMethod>, Vec<&CalculationMethod>) =
        catalog.iter().partition(|method| method.is_applicable(values));
    let unavailable: Vec<&'static str> = unavailable.iter().map(|method| method.id).collect();

    if candidates.is_empty() {
        let supplied = values.supplied();
        debug!("{}: no applicable method among {} (supplied: {:?})", target, catalog.len(), supplied);
        return CalculationResult::failure(default_unit, display_name, CalculationError::insufficient_data(display_name, &supplied))
            .with_diagnostics(Vec::new(), unavailable, Vec::new());
    }

    // Stable sort: equal priorities keep catalog order.
    candidates.sort_by_key(|method| method.priority);
    let available: Vec<String> = candidates.iter().map(|method| method.description.to_string()).collect();
    let single_candidate = candidates.len() == 1;
    let mut failed = Vec::new();

    for method in &candidates {
        match attempt(method, values) {
            Ok(value) => {
                debug!("{}: resolved with '{}' ({}) = {}", target, method.id, method.formula, value);
                let alternatives: Vec<&str> = candidates
                    .iter()
                    .filter(|other| other.id != method.id)
                    .map(|other| other.description)
                    .collect();
                let mut result = CalculationResult::success(value, default_unit, display_name, method.formula, method.id);
                if !alternatives.is_empty() {
                    result = result.with_warning(format!(
                        "Other methods were also available: {}",
                        alternatives.join("; ")
                    ));
                }
                return result.with_diagnostics(available, unavailable, failed);
            }
            Err(error) => {
                debug!("{}: method '{}' rejected: {}", target, method.id, error);
                failed.push(FailedMethod { method_id: method.id, kind: error.kind });
                if single_candidate {
                    return CalculationResult::failure(default_unit, display_name, error)
                        .with_formula(method.formula)
                        .with_diagnostics(available, unavailable, failed);
                }
            }
        }
    }

    debug!("{}: all {} applicable methods failed", target, candidates.len());
    CalculationResult::failure(
        default_unit,
        display_name,
        CalculationError::mathematical_error(display_name, candidates.len()),
    )
    .with_diagnostics(available, unavailable, failed)
}

/// Runs one method: finiteness of inputs, then the validator, then the formula.
fn attempt(method: &CalculationMethod, values: &Values) -> Result<f64, CalculationError> {
    if let Some(name) = method
        .required_variables
        .iter()
        .find(|name| !values.value(name).is_finite())
    {
        return Err(CalculationError::invalid_value(name));
    }

    if let Some(validate) = method.validate {
        if let Some(error) = validate(values) {
            return Err(error);
        }
    }

    let value = (method.calculate)(values);
    if !value.is_finite() {
        return Err(CalculationError::non_finite_result(method.formula));
    }
    Ok(value)
}
