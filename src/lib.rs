//! Circular-motion kinematics and multi-method physics calculators.
//!
//! - [`motion`]: the closed-form model of uniform and uniformly accelerated
//!   circular motion.
//! - [`simulation`]: a frame-driven simulator on top of the model.
//! - [`calculators`]: the engine that derives a quantity from whichever
//!   inputs are known, trying alternative formulas in priority order.
//! - [`catalogs`]: the formula sets for circular motion and Newton's second law.
pub mod utils;
pub mod models;
pub mod motion;
pub mod calculators;
#[cfg(feature = "simulation")]
pub mod simulation;
#[cfg(feature = "catalogs")]
pub mod catalogs;
#[cfg(feature = "catalogs")]
pub mod apis;

/// ### General helper function
/// - Asserts that two floating point numbers are approximately equal.
///
/// ### Arguments
///
/// * `a` - The first floating point number.
/// * `b` - The second floating point number.
/// * `epsilon` - The maximum difference between `a` and `b` for them to be considered equal.
/// * `optional_message` - An optional message to display if the assertion fails.
///
pub fn assert_float_eq(a: f64, b: f64, epsilon: f64, optional_message: Option<&str>) {
    match optional_message {
        Some(message) => assert!((a - b).abs() < epsilon, "a: {:?},\nb: {:?},\nepsilon: {:?},\n message: {:?}", a, b, epsilon, message),
        None => assert!((a - b).abs() < epsilon, "Expected {} to be approximately equal to {} (epsilon: {})", a, b, epsilon),
    }
}
