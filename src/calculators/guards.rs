//! Reusable precondition checks for method validators.
//!
//! Each guard returns `None` when the precondition holds. Chain them with
//! [`Option::or_else`].
use crate::calculators::{CalculationError, Values};

/// Rejects a zero denominator read from the value bag.
pub fn non_zero(values: &Values, name: &str) -> Option<CalculationError> {
    non_zero_value(values.value(name), name)
}

/// Rejects a zero denominator computed from several inputs.
pub fn non_zero_value(value: f64, label: &str) -> Option<CalculationError> {
    (value == 0.0).then(|| CalculationError::division_by_zero(label))
}

/// Rejects negative values for quantities that cannot be negative.
pub fn non_negative(values: &Values, name: &str) -> Option<CalculationError> {
    non_negative_value(values.value(name), name)
}

pub fn non_negative_value(value: f64, label: &str) -> Option<CalculationError> {
    (value < 0.0).then(|| CalculationError::out_of_range(label, "cannot be negative"))
}

/// A strictly positive denominator: zero is a division by zero, negative is out of range.
pub fn positive(values: &Values, name: &str) -> Option<CalculationError> {
    non_zero(values, name).or_else(|| non_negative(values, name))
}
