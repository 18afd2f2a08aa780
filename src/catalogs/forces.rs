// src/catalogs/forces.rs

use crate::calculators::{CalculationError, ErrorKind};
use crate::models::Vector2D;

/// A force applied to a body, given by magnitude (N) and direction (radians from +x).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppliedForce {
    pub magnitude: f64,
    pub angle: f64,
}

impl AppliedForce {
    pub fn new(magnitude: f64, angle: f64) -> Self {
        Self { magnitude, angle }
    }

    pub fn from_degrees(magnitude: f64, degrees: f64) -> Self {
        Self::new(magnitude, degrees.to_radians())
    }

    pub fn components(&self) -> Vector2D {
        Vector2D::from_polar(self.magnitude, self.angle)
    }
}

/// The forces acting on one body. Owned by whoever runs the calculation;
/// nothing here is shared between sessions.
///
/// # Example
/// ```
/// use rs_kinematics::catalogs::{AppliedForce, ForceSet};
///
/// let mut forces = ForceSet::new();
/// forces.add(AppliedForce::from_degrees(3.0, 0.0)).unwrap();
/// forces.add(AppliedForce::from_degrees(4.0, 90.0)).unwrap();
///
/// assert!((forces.net_magnitude() - 5.0).abs() < 1e-12);
/// let acceleration = forces.acceleration(2.0).unwrap();
/// assert!((acceleration.magnitude() - 2.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForceSet {
    forces: Vec<AppliedForce>,
}

impl ForceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a force and returns its index.
    ///
    /// # Errors
    /// `invalid_values` for a non-finite magnitude or angle, `out_of_range`
    /// for a negative magnitude (flip the angle instead).
    pub fn add(&mut self, force: AppliedForce) -> Result<usize, CalculationError> {
        if !force.magnitude.is_finite() {
            return Err(CalculationError::invalid_value("force magnitude"));
        }
        if !force.angle.is_finite() {
            return Err(CalculationError::invalid_value("force direction"));
        }
        if force.magnitude < 0.0 {
            return Err(CalculationError::out_of_range("force magnitude", "cannot be negative"));
        }
        self.forces.push(force);
        Ok(self.forces.len() - 1)
    }

    pub fn remove(&mut self, index: usize) -> Option<AppliedForce> {
        (index < self.forces.len()).then(|| self.forces.remove(index))
    }

    pub fn clear(&mut self) {
        self.forces.clear();
    }

    pub fn forces(&self) -> &[AppliedForce] {
        &self.forces
    }

    pub fn len(&self) -> usize {
        self.forces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forces.is_empty()
    }

    /// Vector sum of every force. Zero for an empty set.
    pub fn net_force(&self) -> Vector2D {
        self.forces
            .iter()
            .fold(Vector2D::ZERO, |sum, force| sum + force.components())
    }

    pub fn net_magnitude(&self) -> f64 {
        self.net_force().magnitude()
    }

    /// Direction of the net force, or `None` when the forces cancel out.
    pub fn net_direction(&self) -> Option<f64> {
        let net = self.net_force();
        (net.magnitude() > 0.0).then(|| net.angle())
    }

    /// a = ΣF / m
    pub fn acceleration(&self, mass: f64) -> Result<Vector2D, CalculationError> {
        if !mass.is_finite() {
            return Err(CalculationError::invalid_value("mass"));
        }
        if mass == 0.0 {
            return Err(CalculationError::division_by_zero("mass"));
        }
        if mass < 0.0 {
            return Err(CalculationError::new(
                ErrorKind::OutOfRange,
                "The mass cannot be negative.",
                format!("negative mass {}", mass),
            )
            .with_suggestion("Enter a positive mass"));
        }
        Ok(self.net_force() * (1.0 / mass))
    }
}
