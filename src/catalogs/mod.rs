//! Method catalogs for every quantity the calculators can solve for.
//!
//! Each catalog is a static table; [`lookup`] finds one by variable name.
mod forces;
pub mod mcu;
pub mod mcua;
pub mod newton;
pub mod variables;

pub use forces::*;

use crate::calculators::VariableCatalog;

/// Every registered catalog, one per target variable.
pub static CATALOGS: &[&VariableCatalog] = &[
    &mcu::RADIUS_CATALOG,
    &mcu::ANGULAR_VELOCITY_CATALOG,
    &mcu::LINEAR_VELOCITY_CATALOG,
    &mcu::PERIOD_CATALOG,
    &mcu::FREQUENCY_CATALOG,
    &mcu::CENTRIPETAL_ACCELERATION_CATALOG,
    &mcu::ARC_LENGTH_CATALOG,
    &mcua::FINAL_ANGULAR_VELOCITY_CATALOG,
    &mcua::INITIAL_ANGULAR_VELOCITY_CATALOG,
    &mcua::ANGULAR_ACCELERATION_CATALOG,
    &mcua::ANGULAR_DISPLACEMENT_CATALOG,
    &mcua::TIME_CATALOG,
    &mcua::TANGENTIAL_ACCELERATION_CATALOG,
    &mcua::TOTAL_ACCELERATION_CATALOG,
    &newton::FORCE_CATALOG,
    &newton::MASS_CATALOG,
    &newton::ACCELERATION_CATALOG,
    &newton::WEIGHT_CATALOG,
];

/// Finds the catalog for `target`.
///
/// # Example
/// ```
/// use rs_kinematics::catalogs::lookup;
///
/// assert_eq!(lookup("radius").unwrap().unit, "m");
/// assert!(lookup("temperature").is_none());
/// ```
pub fn lookup(target: &str) -> Option<&'static VariableCatalog> {
    CATALOGS.iter().copied().find(|catalog| catalog.target == target)
}

#[cfg(test)]
mod mcua_tests;
