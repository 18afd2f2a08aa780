use std::fmt;
use crate::calculators::{CalculationError, Values};

pub type CalculateFn = fn(&Values) -> f64;
pub type ValidateFn = fn(&Values) -> Option<CalculationError>;

/// One way of computing a target variable from a set of known inputs.
///
/// `calculate` is only invoked once every entry of `required_variables` is
/// present and finite and `validate` (if any) has accepted the inputs.
#[derive(Clone, Copy)]
pub struct CalculationMethod {
    pub id: &'static str,
    pub required_variables: &'static [&'static str],
    pub formula: &'static str,
    pub description: &'static str,
    /// Lower is tried first.
    pub priority: u8,
    pub calculate: CalculateFn,
    pub validate: Option<ValidateFn>,
}

impl CalculationMethod {
    /// True when every required variable is present (absent or NaN counts as missing).
    pub fn is_applicable(&self, values: &Values) -> bool {
        self.required_variables.iter().all(|name| values.contains(name))
    }

    pub fn missing_variables(&self, values: &Values) -> Vec<&'static str> {
        self.required_variables
            .iter()
            .copied()
            .filter(|name| !values.contains(name))
            .collect()
    }
}

impl fmt::Debug for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CalculationMethod")
            .field("id", &self.id)
            .field("required_variables", &self.required_variables)
            .field("formula", &self.formula)
            .field("priority", &self.priority)
            .field("validated", &self.validate.is_some())
            .finish()
    }
}
