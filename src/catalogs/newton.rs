// src/catalogs/newton.rs
//
// Newton's second law. Every input is checked for presence, never truthiness,
// so a zero acceleration or force is a legitimate value.

use crate::calculators::{guards, CalculationMethod, VariableCatalog};
use crate::catalogs::variables::*;

pub static FORCE_CATALOG: VariableCatalog = VariableCatalog {
    target: FORCE,
    display_name: "force",
    unit: "N",
    methods: &[
        CalculationMethod {
            id: "force_from_mass_and_acceleration",
            required_variables: &[MASS, ACCELERATION],
            formula: "F = m·a",
            description: "From mass and acceleration",
            priority: 1,
            calculate: |v| v.value(MASS) * v.value(ACCELERATION),
            validate: Some(|v| guards::non_negative(v, MASS)),
        },
        CalculationMethod {
            id: "centripetal_force_from_mass_velocity_and_radius",
            required_variables: &[MASS, LINEAR_VELOCITY, RADIUS],
            formula: "F = m·v² / r",
            description: "Centripetal force from mass, linear velocity and radius",
            priority: 2,
            calculate: |v| v.value(MASS) * v.value(LINEAR_VELOCITY).powi(2) / v.value(RADIUS),
            validate: Some(|v| guards::non_negative(v, MASS).or_else(|| guards::positive(v, RADIUS))),
        },
        CalculationMethod {
            id: "centripetal_force_from_mass_angular_velocity_and_radius",
            required_variables: &[MASS, ANGULAR_VELOCITY, RADIUS],
            formula: "F = m·ω²·r",
            description: "Centripetal force from mass, angular velocity and radius",
            priority: 3,
            calculate: |v| v.value(MASS) * v.value(ANGULAR_VELOCITY).powi(2) * v.value(RADIUS),
            validate: Some(|v| guards::non_negative(v, MASS).or_else(|| guards::non_negative(v, RADIUS))),
        },
    ],
};

pub static MASS_CATALOG: VariableCatalog = VariableCatalog {
    target: MASS,
    display_name: "mass",
    unit: "kg",
    methods: &[
        CalculationMethod {
            id: "mass_from_force_and_acceleration",
            required_variables: &[FORCE, ACCELERATION],
            formula: "m = F / a",
            description: "From force and acceleration",
            priority: 1,
            calculate: |v| v.value(FORCE) / v.value(ACCELERATION),
            validate: Some(|v| {
                guards::non_zero(v, ACCELERATION)
                    .or_else(|| guards::non_negative_value(v.value(FORCE) / v.value(ACCELERATION), MASS))
            }),
        },
        CalculationMethod {
            id: "mass_from_weight",
            required_variables: &[WEIGHT, GRAVITY],
            formula: "m = W / g",
            description: "From weight and gravitational acceleration",
            priority: 2,
            calculate: |v| v.value(WEIGHT) / v.value(GRAVITY),
            validate: Some(|v| guards::positive(v, GRAVITY).or_else(|| guards::non_negative(v, WEIGHT))),
        },
    ],
};

pub static ACCELERATION_CATALOG: VariableCatalog = VariableCatalog {
    target: ACCELERATION,
    display_name: "acceleration",
    unit: "m/s²",
    methods: &[
        CalculationMethod {
            id: "acceleration_from_force_and_mass",
            required_variables: &[FORCE, MASS],
            formula: "a = F / m",
            description: "From force and mass",
            priority: 1,
            calculate: |v| v.value(FORCE) / v.value(MASS),
            validate: Some(|v| guards::positive(v, MASS)),
        },
    ],
};

pub static WEIGHT_CATALOG: VariableCatalog = VariableCatalog {
    target: WEIGHT,
    display_name: "weight",
    unit: "N",
    methods: &[
        CalculationMethod {
            id: "weight_from_mass_and_gravity",
            required_variables: &[MASS, GRAVITY],
            formula: "W = m·g",
            description: "From mass and gravitational acceleration",
            priority: 1,
            calculate: |v| v.value(MASS) * v.value(GRAVITY),
            validate: Some(|v| guards::non_negative(v, MASS).or_else(|| guards::non_negative(v, GRAVITY))),
        },
    ],
};
