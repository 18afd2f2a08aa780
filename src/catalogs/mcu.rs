// src/catalogs/mcu.rs
//
// Uniform circular motion: r, ω, v, T, f, a_c and arc length.

use std::f64::consts::{PI, TAU};
use crate::calculators::{guards, CalculationMethod, VariableCatalog};
use crate::catalogs::variables::*;

pub static RADIUS_CATALOG: VariableCatalog = VariableCatalog {
    target: RADIUS,
    display_name: "radius",
    unit: "m",
    methods: &[
        CalculationMethod {
            id: "radius_from_linear_and_angular_velocity",
            required_variables: &[LINEAR_VELOCITY, ANGULAR_VELOCITY],
            formula: "r = v / ω",
            description: "From linear velocity and angular velocity",
            priority: 1,
            calculate: |v| v.value(LINEAR_VELOCITY) / v.value(ANGULAR_VELOCITY),
            validate: Some(|v| guards::non_zero(v, ANGULAR_VELOCITY)),
        },
        CalculationMethod {
            id: "radius_from_linear_velocity_and_period",
            required_variables: &[LINEAR_VELOCITY, PERIOD],
            formula: "r = v·T / 2π",
            description: "From linear velocity and period",
            priority: 2,
            calculate: |v| v.value(LINEAR_VELOCITY) * v.value(PERIOD) / TAU,
            validate: Some(|v| guards::positive(v, PERIOD)),
        },
        CalculationMethod {
            id: "radius_from_linear_velocity_and_frequency",
            required_variables: &[LINEAR_VELOCITY, FREQUENCY],
            formula: "r = v / (2π·f)",
            description: "From linear velocity and frequency",
            priority: 3,
            calculate: |v| v.value(LINEAR_VELOCITY) / (TAU * v.value(FREQUENCY)),
            validate: Some(|v| guards::positive(v, FREQUENCY)),
        },
        CalculationMethod {
            id: "radius_from_centripetal_acceleration_and_angular_velocity",
            required_variables: &[CENTRIPETAL_ACCELERATION, ANGULAR_VELOCITY],
            formula: "r = a_c / ω²",
            description: "From centripetal acceleration and angular velocity",
            priority: 4,
            calculate: |v| v.value(CENTRIPETAL_ACCELERATION) / v.value(ANGULAR_VELOCITY).powi(2),
            validate: Some(|v| {
                guards::non_zero(v, ANGULAR_VELOCITY).or_else(|| guards::non_negative(v, CENTRIPETAL_ACCELERATION))
            }),
        },
        CalculationMethod {
            id: "radius_from_linear_velocity_and_centripetal_acceleration",
            required_variables: &[LINEAR_VELOCITY, CENTRIPETAL_ACCELERATION],
            formula: "r = v² / a_c",
            description: "From linear velocity and centripetal acceleration",
            priority: 5,
            calculate: |v| v.value(LINEAR_VELOCITY).powi(2) / v.value(CENTRIPETAL_ACCELERATION),
            validate: Some(|v| guards::positive(v, CENTRIPETAL_ACCELERATION)),
        },
        CalculationMethod {
            id: "radius_from_arc_length_and_angular_displacement",
            required_variables: &[ARC_LENGTH, ANGULAR_DISPLACEMENT],
            formula: "r = s / θ",
            description: "From arc length and angular displacement",
            priority: 6,
            calculate: |v| v.value(ARC_LENGTH) / v.value(ANGULAR_DISPLACEMENT),
            validate: Some(|v| guards::non_zero(v, ANGULAR_DISPLACEMENT)),
        },
    ],
};

pub static ANGULAR_VELOCITY_CATALOG: VariableCatalog = VariableCatalog {
    target: ANGULAR_VELOCITY,
    display_name: "angular velocity",
    unit: "rad/s",
    methods: &[
        CalculationMethod {
            id: "angular_velocity_from_linear_velocity_and_radius",
            required_variables: &[LINEAR_VELOCITY, RADIUS],
            formula: "ω = v / r",
            description: "From linear velocity and radius",
            priority: 1,
            calculate: |v| v.value(LINEAR_VELOCITY) / v.value(RADIUS),
            validate: Some(|v| guards::positive(v, RADIUS)),
        },
        CalculationMethod {
            id: "angular_velocity_from_period",
            required_variables: &[PERIOD],
            formula: "ω = 2π / T",
            description: "From period",
            priority: 2,
            calculate: |v| TAU / v.value(PERIOD),
            validate: Some(|v| guards::positive(v, PERIOD)),
        },
        CalculationMethod {
            id: "angular_velocity_from_frequency",
            required_variables: &[FREQUENCY],
            formula: "ω = 2π·f",
            description: "From frequency",
            priority: 3,
            calculate: |v| TAU * v.value(FREQUENCY),
            validate: Some(|v| guards::non_negative(v, FREQUENCY)),
        },
        CalculationMethod {
            id: "angular_velocity_from_angular_displacement_and_time",
            required_variables: &[ANGULAR_DISPLACEMENT, TIME],
            formula: "ω = θ / t",
            description: "From angular displacement and time",
            priority: 4,
            calculate: |v| v.value(ANGULAR_DISPLACEMENT) / v.value(TIME),
            validate: Some(|v| guards::positive(v, TIME)),
        },
        CalculationMethod {
            id: "angular_velocity_from_centripetal_acceleration_and_radius",
            required_variables: &[CENTRIPETAL_ACCELERATION, RADIUS],
            formula: "ω = √(a_c / r)",
            description: "From centripetal acceleration and radius",
            priority: 5,
            calculate: |v| (v.value(CENTRIPETAL_ACCELERATION) / v.value(RADIUS)).sqrt(),
            validate: Some(|v| guards::positive(v, RADIUS).or_else(|| guards::non_negative(v, CENTRIPETAL_ACCELERATION))),
        },
    ],
};

pub static LINEAR_VELOCITY_CATALOG: VariableCatalog = VariableCatalog {
    target: LINEAR_VELOCITY,
    display_name: "linear velocity",
    unit: "m/s",
    methods: &[
        CalculationMethod {
            id: "linear_velocity_from_angular_velocity_and_radius",
            required_variables: &[ANGULAR_VELOCITY, RADIUS],
            formula: "v = ω·r",
            description: "From angular velocity and radius",
            priority: 1,
            calculate: |v| v.value(ANGULAR_VELOCITY) * v.value(RADIUS),
            validate: Some(|v| guards::non_negative(v, RADIUS)),
        },
        CalculationMethod {
            id: "linear_velocity_from_radius_and_period",
            required_variables: &[RADIUS, PERIOD],
            formula: "v = 2π·r / T",
            description: "From radius and period",
            priority: 2,
            calculate: |v| TAU * v.value(RADIUS) / v.value(PERIOD),
            validate: Some(|v| guards::positive(v, PERIOD).or_else(|| guards::non_negative(v, RADIUS))),
        },
        CalculationMethod {
            id: "linear_velocity_from_radius_and_frequency",
            required_variables: &[RADIUS, FREQUENCY],
            formula: "v = 2π·r·f",
            description: "From radius and frequency",
            priority: 3,
            calculate: |v| TAU * v.value(RADIUS) * v.value(FREQUENCY),
            validate: Some(|v| guards::non_negative(v, RADIUS)),
        },
        CalculationMethod {
            id: "linear_velocity_from_arc_length_and_time",
            required_variables: &[ARC_LENGTH, TIME],
            formula: "v = s / t",
            description: "From arc length and time",
            priority: 4,
            calculate: |v| v.value(ARC_LENGTH) / v.value(TIME),
            validate: Some(|v| guards::positive(v, TIME)),
        },
        CalculationMethod {
            id: "linear_velocity_from_centripetal_acceleration_and_radius",
            required_variables: &[CENTRIPETAL_ACCELERATION, RADIUS],
            formula: "v = √(a_c·r)",
            description: "From centripetal acceleration and radius",
            priority: 5,
            calculate: |v| (v.value(CENTRIPETAL_ACCELERATION) * v.value(RADIUS)).sqrt(),
            validate: Some(|v| guards::non_negative(v, CENTRIPETAL_ACCELERATION).or_else(|| guards::non_negative(v, RADIUS))),
        },
    ],
};

pub static PERIOD_CATALOG: VariableCatalog = VariableCatalog {
    target: PERIOD,
    display_name: "period",
    unit: "s",
    methods: &[
        CalculationMethod {
            id: "period_from_angular_velocity",
            required_variables: &[ANGULAR_VELOCITY],
            formula: "T = 2π / |ω|",
            description: "From angular velocity",
            priority: 1,
            calculate: |v| TAU / v.value(ANGULAR_VELOCITY).abs(),
            validate: Some(|v| guards::non_zero(v, ANGULAR_VELOCITY)),
        },
        CalculationMethod {
            id: "period_from_frequency",
            required_variables: &[FREQUENCY],
            formula: "T = 1 / f",
            description: "From frequency",
            priority: 2,
            calculate: |v| 1.0 / v.value(FREQUENCY),
            validate: Some(|v| guards::positive(v, FREQUENCY)),
        },
        CalculationMethod {
            id: "period_from_radius_and_linear_velocity",
            required_variables: &[RADIUS, LINEAR_VELOCITY],
            formula: "T = 2π·r / |v|",
            description: "From radius and linear velocity",
            priority: 3,
            calculate: |v| TAU * v.value(RADIUS) / v.value(LINEAR_VELOCITY).abs(),
            validate: Some(|v| guards::non_zero(v, LINEAR_VELOCITY).or_else(|| guards::non_negative(v, RADIUS))),
        },
    ],
};

pub static FREQUENCY_CATALOG: VariableCatalog = VariableCatalog {
    target: FREQUENCY,
    display_name: "frequency",
    unit: "Hz",
    methods: &[
        CalculationMethod {
            id: "frequency_from_period",
            required_variables: &[PERIOD],
            formula: "f = 1 / T",
            description: "From period",
            priority: 1,
            calculate: |v| 1.0 / v.value(PERIOD),
            validate: Some(|v| guards::positive(v, PERIOD)),
        },
        CalculationMethod {
            id: "frequency_from_angular_velocity",
            required_variables: &[ANGULAR_VELOCITY],
            formula: "f = |ω| / 2π",
            description: "From angular velocity",
            priority: 2,
            calculate: |v| v.value(ANGULAR_VELOCITY).abs() / TAU,
            validate: None,
        },
        CalculationMethod {
            id: "frequency_from_linear_velocity_and_radius",
            required_variables: &[LINEAR_VELOCITY, RADIUS],
            formula: "f = |v| / (2π·r)",
            description: "From linear velocity and radius",
            priority: 3,
            calculate: |v| v.value(LINEAR_VELOCITY).abs() / (TAU * v.value(RADIUS)),
            validate: Some(|v| guards::positive(v, RADIUS)),
        },
    ],
};

pub static CENTRIPETAL_ACCELERATION_CATALOG: VariableCatalog = VariableCatalog {
    target: CENTRIPETAL_ACCELERATION,
    display_name: "centripetal acceleration",
    unit: "m/s²",
    methods: &[
        CalculationMethod {
            id: "centripetal_acceleration_from_linear_velocity_and_radius",
            required_variables: &[LINEAR_VELOCITY, RADIUS],
            formula: "a_c = v² / r",
            description: "From linear velocity and radius",
            priority: 1,
            calculate: |v| v.value(LINEAR_VELOCITY).powi(2) / v.value(RADIUS),
            validate: Some(|v| guards::positive(v, RADIUS)),
        },
        CalculationMethod {
            id: "centripetal_acceleration_from_angular_velocity_and_radius",
            required_variables: &[ANGULAR_VELOCITY, RADIUS],
            formula: "a_c = ω²·r",
            description: "From angular velocity and radius",
            priority: 2,
            calculate: |v| v.value(ANGULAR_VELOCITY).powi(2) * v.value(RADIUS),
            validate: Some(|v| guards::non_negative(v, RADIUS)),
        },
        CalculationMethod {
            id: "centripetal_acceleration_from_angular_and_linear_velocity",
            required_variables: &[ANGULAR_VELOCITY, LINEAR_VELOCITY],
            formula: "a_c = |ω·v|",
            description: "From angular velocity and linear velocity",
            priority: 3,
            calculate: |v| (v.value(ANGULAR_VELOCITY) * v.value(LINEAR_VELOCITY)).abs(),
            validate: None,
        },
        CalculationMethod {
            id: "centripetal_acceleration_from_radius_and_period",
            required_variables: &[RADIUS, PERIOD],
            formula: "a_c = 4π²·r / T²",
            description: "From radius and period",
            priority: 4,
            calculate: |v| 4.0 * PI * PI * v.value(RADIUS) / v.value(PERIOD).powi(2),
            validate: Some(|v| guards::positive(v, PERIOD).or_else(|| guards::non_negative(v, RADIUS))),
        },
    ],
};

pub static ARC_LENGTH_CATALOG: VariableCatalog = VariableCatalog {
    target: ARC_LENGTH,
    display_name: "arc length",
    unit: "m",
    methods: &[
        CalculationMethod {
            id: "arc_length_from_angular_displacement_and_radius",
            required_variables: &[ANGULAR_DISPLACEMENT, RADIUS],
            formula: "s = θ·r",
            description: "From angular displacement and radius",
            priority: 1,
            calculate: |v| v.value(ANGULAR_DISPLACEMENT) * v.value(RADIUS),
            validate: Some(|v| guards::non_negative(v, RADIUS)),
        },
        CalculationMethod {
            id: "arc_length_from_linear_velocity_and_time",
            required_variables: &[LINEAR_VELOCITY, TIME],
            formula: "s = v·t",
            description: "From linear velocity and time",
            priority: 2,
            calculate: |v| v.value(LINEAR_VELOCITY) * v.value(TIME),
            validate: Some(|v| guards::non_negative(v, TIME)),
        },
    ],
};
