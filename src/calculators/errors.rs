use std::error::Error;
use std::fmt;

/// Machine-readable category of a calculation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingValues,
    /// A required input is not a finite number.
    InvalidValues,
    DivisionByZero,
    /// The formula produced NaN or infinity.
    MathematicalError,
    /// A physically impossible magnitude, e.g. a negative mass.
    OutOfRange,
    IncompatibleUnits,
    /// No method had all of its required inputs.
    InsufficientData,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MissingValues => "missing_values",
            ErrorKind::InvalidValues => "invalid_values",
            ErrorKind::DivisionByZero => "division_by_zero",
            ErrorKind::MathematicalError => "mathematical_error",
            ErrorKind::OutOfRange => "out_of_range",
            ErrorKind::IncompatibleUnits => "incompatible_units",
            ErrorKind::InsufficientData => "insufficient_data",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A calculation failure as surfaced to the caller.
///
/// `message` is meant for the user, `technical` for logs, and `suggestions`
/// lists what the user can do about it.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationError {
    pub kind: ErrorKind,
    pub message: String,
    pub suggestions: Vec<String>,
    pub technical: String,
}

impl CalculationError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, technical: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            suggestions: Vec::new(),
            technical: technical.into(),
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn missing_values(missing: &[&str]) -> Self {
        Self::new(
            ErrorKind::MissingValues,
            "Some required values are missing.",
            format!("missing inputs: {}", missing.join(", ")),
        )
        .with_suggestion(format!("Provide values for: {}", missing.join(", ")))
    }

    pub fn invalid_value(variable: &str) -> Self {
        Self::new(
            ErrorKind::InvalidValues,
            format!("The value entered for {} is not a valid number.", variable),
            format!("input '{}' is not finite", variable),
        )
        .with_suggestion(format!("Enter a finite number for {}", variable))
    }

    pub fn division_by_zero(variable: &str) -> Self {
        Self::new(
            ErrorKind::DivisionByZero,
            format!("The {} cannot be zero for this calculation.", variable),
            format!("division by zero: '{}' is 0", variable),
        )
        .with_suggestion(format!("Enter a non-zero {}", variable))
        .with_suggestion("Supply different known values so another formula can be used")
    }

    pub fn out_of_range(variable: &str, requirement: &str) -> Self {
        Self::new(
            ErrorKind::OutOfRange,
            format!("The {} {}.", variable, requirement),
            format!("'{}' out of range: {}", variable, requirement),
        )
        .with_suggestion(format!("Check the value of {}", variable))
    }

    pub fn non_finite_result(formula: &str) -> Self {
        Self::new(
            ErrorKind::MathematicalError,
            "The calculation did not produce a valid number.",
            format!("'{}' evaluated to NaN or infinity", formula),
        )
        .with_suggestion("Check that the known values are physically consistent")
    }

    pub fn incompatible_units(expected: &str, found: &str) -> Self {
        Self::new(
            ErrorKind::IncompatibleUnits,
            format!("Expected a value in {}, got {}.", expected, found),
            format!("unit mismatch: expected '{}', found '{}'", expected, found),
        )
        .with_suggestion(format!("Convert the value to {} first", expected))
    }

    pub fn insufficient_data(display_name: &str, supplied: &[&str]) -> Self {
        let supplied_list = if supplied.is_empty() {
            String::from("none")
        } else {
            supplied.join(", ")
        };
        Self::new(
            ErrorKind::InsufficientData,
            format!("There is not enough data to calculate the {}.", display_name),
            format!("no method for '{}' is satisfied by the supplied values [{}]", display_name, supplied_list),
        )
        .with_suggestion("Enter more of the known values")
        .with_suggestion(format!("Check which combinations of values can produce the {}", display_name))
    }

    pub fn mathematical_error(display_name: &str, attempted: usize) -> Self {
        Self::new(
            ErrorKind::MathematicalError,
            format!("The {} could not be calculated with the values provided.", display_name),
            format!("all {} applicable methods for '{}' failed", attempted, display_name),
        )
        .with_suggestion("Check the known values for zeros or physically impossible magnitudes")
    }
}

impl fmt::Display for CalculationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.technical)
    }
}

impl Error for CalculationError {}
