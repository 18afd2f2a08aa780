use std::fmt;
use std::error::Error;

/// Represents errors that can occur while configuring a motion model or simulator.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Indicates a negative radius. A radius of zero is allowed (the particle sits on the center).
    InvalidRadius,
    /// Indicates a NaN or infinite parameter. Carries the parameter name.
    NonFiniteParameter(&'static str),
    /// Indicates a canvas with a negative or non-finite width or height.
    InvalidCanvasSize,
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PhysicsError::InvalidRadius => write!(f, "Radius must be zero or positive"),
            PhysicsError::NonFiniteParameter(name) => write!(f, "Parameter '{}' must be a finite number", name),
            PhysicsError::InvalidCanvasSize => write!(f, "Canvas dimensions must be finite and non-negative"),
        }
    }
}

impl Error for PhysicsError {}

/// Rejects NaN and infinite parameters.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64, PhysicsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PhysicsError::NonFiniteParameter(name))
    }
}
