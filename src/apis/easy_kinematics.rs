// src/apis/easy_kinematics.rs

use crate::calculators::{resolve, CalculationResult, Values};
use crate::catalogs::{self, variables::GRAVITY};
use crate::utils::PhysicsConstants;

/// A single entry point for every calculator: name the variable you want and
/// hand over what you know.
///
/// Values must already be in SI units.
pub struct EasyKinematics {
    constants: PhysicsConstants,
}

impl Default for EasyKinematics {
    fn default() -> Self {
        Self::new()
    }
}

impl EasyKinematics {
    /// Creates a new `EasyKinematics` with default physical constants.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_kinematics::apis::easy_kinematics::EasyKinematics;
    /// use rs_kinematics::calculators::Values;
    ///
    /// let kinematics = EasyKinematics::new();
    /// let result = kinematics.resolve("radius", &Values::from([("linear_velocity", 10.0), ("angular_velocity", 2.0)]));
    /// assert_eq!(result.value(), Some(5.0));
    /// ```
    pub fn new() -> Self {
        Self {
            constants: PhysicsConstants::default(),
        }
    }

    /// Creates a new `EasyKinematics` whose missing `gravity` input defaults to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_kinematics::apis::easy_kinematics::EasyKinematics;
    /// use rs_kinematics::calculators::Values;
    ///
    /// // Weight on Mars
    /// let mars = EasyKinematics::with_custom_constants(3.711);
    /// let weight = mars.resolve("weight", &Values::from([("mass", 2.0)]));
    /// assert!((weight.value().unwrap() - 7.422).abs() < 1e-9);
    /// ```
    pub fn with_custom_constants(gravity: f64) -> Self {
        Self {
            constants: PhysicsConstants::new(Some(gravity)),
        }
    }

    pub fn constants(&self) -> &PhysicsConstants {
        &self.constants
    }

    /// Resolves `target` with the registered catalog. Unknown targets resolve
    /// against an empty catalog and report `insufficient_data`.
    pub fn resolve(&self, target: &str, values: &Values) -> CalculationResult {
        let values = self.with_defaults(values);
        match catalogs::lookup(target) {
            Some(catalog) => catalog.resolve(&values),
            None => resolve(target, &[], &values, "", target),
        }
    }

    /// Names of every variable that can be solved for.
    pub fn targets(&self) -> Vec<&'static str> {
        catalogs::CATALOGS.iter().map(|catalog| catalog.target).collect()
    }

    fn with_defaults(&self, values: &Values) -> Values {
        let mut values = values.clone();
        if !values.contains(GRAVITY) {
            values.insert(GRAVITY, self.constants.gravity);
        }
        values
    }
}
