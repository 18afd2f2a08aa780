use crate::calculators::{CalculationError, ErrorKind};

/// A method that had all of its inputs but was rejected when attempted.
#[derive(Debug, Clone, PartialEq)]
pub struct FailedMethod {
    pub method_id: &'static str,
    pub kind: ErrorKind,
}

/// Outcome of resolving one target variable.
///
/// `value()` is `Some` exactly when `error()` is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    value: Option<f64>,
    unit: String,
    name: String,
    formula: String,
    error: Option<CalculationError>,
    warnings: Vec<String>,
    method_used: Option<&'static str>,
    available_methods: Vec<String>,
    unavailable_methods: Vec<&'static str>,
    failed_methods: Vec<FailedMethod>,
}

impl CalculationResult {
    pub(crate) fn success(value: f64, unit: &str, name: &str, formula: &str, method_id: &'static str) -> Self {
        Self {
            value: Some(value),
            unit: unit.to_string(),
            name: name.to_string(),
            formula: formula.to_string(),
            error: None,
            warnings: Vec::new(),
            method_used: Some(method_id),
            available_methods: Vec::new(),
            unavailable_methods: Vec::new(),
            failed_methods: Vec::new(),
        }
    }

    pub(crate) fn failure(unit: &str, name: &str, error: CalculationError) -> Self {
        Self {
            value: None,
            unit: unit.to_string(),
            name: name.to_string(),
            formula: String::new(),
            error: Some(error),
            warnings: Vec::new(),
            method_used: None,
            available_methods: Vec::new(),
            unavailable_methods: Vec::new(),
            failed_methods: Vec::new(),
        }
    }

    pub(crate) fn with_formula(mut self, formula: &str) -> Self {
        self.formula = formula.to_string();
        self
    }

    pub(crate) fn with_warning(mut self, warning: String) -> Self {
        self.warnings.push(warning);
        self
    }

    pub(crate) fn with_diagnostics(
        mut self,
        available: Vec<String>,
        unavailable: Vec<&'static str>,
        failed: Vec<FailedMethod>,
    ) -> Self {
        self.available_methods = available;
        self.unavailable_methods = unavailable;
        self.failed_methods = failed;
        self
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn is_success(&self) -> bool {
        self.value.is_some()
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Human-readable name of the computed quantity.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Formula of the method that produced the value (empty on failure
    /// unless a single method was attempted).
    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn error(&self) -> Option<&CalculationError> {
        self.error.as_ref()
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn method_used(&self) -> Option<&'static str> {
        self.method_used
    }

    /// Descriptions of the methods whose inputs were all supplied, in the order they were tried.
    pub fn available_methods(&self) -> &[String] {
        &self.available_methods
    }

    /// Ids of methods that were never attempted because inputs were missing.
    pub fn unavailable_methods(&self) -> &[&'static str] {
        &self.unavailable_methods
    }

    pub fn failed_methods(&self) -> &[FailedMethod] {
        &self.failed_methods
    }

    /// Converts into a plain `Result`, dropping the diagnostics.
    pub fn into_result(self) -> Result<f64, CalculationError> {
        match (self.value, self.error) {
            (Some(value), _) => Ok(value),
            (None, Some(error)) => Err(error),
            (None, None) => Err(CalculationError::mathematical_error(&self.name, 0)),
        }
    }
}
