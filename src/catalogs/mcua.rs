// src/catalogs/mcua.rs
//
// Uniformly accelerated circular motion. Angular displacement and time also
// carry the uniform-motion formulas since both regimes share those variables.

use crate::calculators::{guards, CalculationError, CalculationMethod, Values, VariableCatalog};
use crate::catalogs::variables::*;

fn non_negative_time(time: f64) -> Option<CalculationError> {
    guards::non_negative_value(time, TIME)
}

/// ω₀² + 2·α·θ, the squared final angular velocity.
fn final_velocity_squared(v: &Values) -> f64 {
    v.value(INITIAL_ANGULAR_VELOCITY).powi(2) + 2.0 * v.value(ANGULAR_ACCELERATION) * v.value(ANGULAR_DISPLACEMENT)
}

pub static FINAL_ANGULAR_VELOCITY_CATALOG: VariableCatalog = VariableCatalog {
    target: FINAL_ANGULAR_VELOCITY,
    display_name: "final angular velocity",
    unit: "rad/s",
    methods: &[
        CalculationMethod {
            id: "final_angular_velocity_from_acceleration_and_time",
            required_variables: &[INITIAL_ANGULAR_VELOCITY, ANGULAR_ACCELERATION, TIME],
            formula: "ω = ω₀ + α·t",
            description: "From initial angular velocity, angular acceleration and time",
            priority: 1,
            calculate: |v| v.value(INITIAL_ANGULAR_VELOCITY) + v.value(ANGULAR_ACCELERATION) * v.value(TIME),
            validate: Some(|v| guards::non_negative(v, TIME)),
        },
        CalculationMethod {
            id: "final_angular_velocity_from_displacement_and_time",
            required_variables: &[INITIAL_ANGULAR_VELOCITY, ANGULAR_DISPLACEMENT, TIME],
            formula: "ω = 2θ / t − ω₀",
            description: "From initial angular velocity, angular displacement and time",
            priority: 2,
            calculate: |v| 2.0 * v.value(ANGULAR_DISPLACEMENT) / v.value(TIME) - v.value(INITIAL_ANGULAR_VELOCITY),
            validate: Some(|v| guards::positive(v, TIME)),
        },
        CalculationMethod {
            id: "final_angular_velocity_from_acceleration_and_displacement",
            required_variables: &[INITIAL_ANGULAR_VELOCITY, ANGULAR_ACCELERATION, ANGULAR_DISPLACEMENT],
            formula: "ω = √(ω₀² + 2·α·θ)",
            description: "From initial angular velocity, angular acceleration and angular displacement (magnitude)",
            priority: 3,
            calculate: |v| final_velocity_squared(v).sqrt(),
            validate: Some(|v| guards::non_negative_value(final_velocity_squared(v), "ω₀² + 2·α·θ")),
        },
    ],
};

pub static INITIAL_ANGULAR_VELOCITY_CATALOG: VariableCatalog = VariableCatalog {
    target: INITIAL_ANGULAR_VELOCITY,
    display_name: "initial angular velocity",
    unit: "rad/s",
    methods: &[
        CalculationMethod {
            id: "initial_angular_velocity_from_acceleration_and_time",
            required_variables: &[FINAL_ANGULAR_VELOCITY, ANGULAR_ACCELERATION, TIME],
            formula: "ω₀ = ω − α·t",
            description: "From final angular velocity, angular acceleration and time",
            priority: 1,
            calculate: |v| v.value(FINAL_ANGULAR_VELOCITY) - v.value(ANGULAR_ACCELERATION) * v.value(TIME),
            validate: Some(|v| guards::non_negative(v, TIME)),
        },
        CalculationMethod {
            id: "initial_angular_velocity_from_displacement_and_time",
            required_variables: &[FINAL_ANGULAR_VELOCITY, ANGULAR_DISPLACEMENT, TIME],
            formula: "ω₀ = 2θ / t − ω",
            description: "From final angular velocity, angular displacement and time",
            priority: 2,
            calculate: |v| 2.0 * v.value(ANGULAR_DISPLACEMENT) / v.value(TIME) - v.value(FINAL_ANGULAR_VELOCITY),
            validate: Some(|v| guards::positive(v, TIME)),
        },
        CalculationMethod {
            id: "initial_angular_velocity_from_displacement_acceleration_and_time",
            required_variables: &[ANGULAR_DISPLACEMENT, ANGULAR_ACCELERATION, TIME],
            formula: "ω₀ = θ / t − ½·α·t",
            description: "From angular displacement, angular acceleration and time",
            priority: 3,
            calculate: |v| {
                let t = v.value(TIME);
                v.value(ANGULAR_DISPLACEMENT) / t - 0.5 * v.value(ANGULAR_ACCELERATION) * t
            },
            validate: Some(|v| guards::positive(v, TIME)),
        },
        CalculationMethod {
            id: "initial_angular_velocity_from_acceleration_and_displacement",
            required_variables: &[FINAL_ANGULAR_VELOCITY, ANGULAR_ACCELERATION, ANGULAR_DISPLACEMENT],
            formula: "ω₀ = √(ω² − 2·α·θ)",
            description: "From final angular velocity, angular acceleration and angular displacement (magnitude)",
            priority: 4,
            calculate: |v| {
                (v.value(FINAL_ANGULAR_VELOCITY).powi(2) - 2.0 * v.value(ANGULAR_ACCELERATION) * v.value(ANGULAR_DISPLACEMENT)).sqrt()
            },
            validate: Some(|v| {
                let radicand = v.value(FINAL_ANGULAR_VELOCITY).powi(2) - 2.0 * v.value(ANGULAR_ACCELERATION) * v.value(ANGULAR_DISPLACEMENT);
                guards::non_negative_value(radicand, "ω² − 2·α·θ")
            }),
        },
    ],
};

pub static ANGULAR_ACCELERATION_CATALOG: VariableCatalog = VariableCatalog {
    target: ANGULAR_ACCELERATION,
    display_name: "angular acceleration",
    unit: "rad/s²",
    methods: &[
        CalculationMethod {
            id: "angular_acceleration_from_velocities_and_time",
            required_variables: &[FINAL_ANGULAR_VELOCITY, INITIAL_ANGULAR_VELOCITY, TIME],
            formula: "α = (ω − ω₀) / t",
            description: "From final and initial angular velocity and time",
            priority: 1,
            calculate: |v| (v.value(FINAL_ANGULAR_VELOCITY) - v.value(INITIAL_ANGULAR_VELOCITY)) / v.value(TIME),
            validate: Some(|v| guards::positive(v, TIME)),
        },
        CalculationMethod {
            id: "angular_acceleration_from_tangential_acceleration",
            required_variables: &[TANGENTIAL_ACCELERATION, RADIUS],
            formula: "α = a_t / r",
            description: "From tangential acceleration and radius",
            priority: 2,
            calculate: |v| v.value(TANGENTIAL_ACCELERATION) / v.value(RADIUS),
            validate: Some(|v| guards::positive(v, RADIUS)),
        },
        CalculationMethod {
            id: "angular_acceleration_from_displacement_and_time",
            required_variables: &[ANGULAR_DISPLACEMENT, INITIAL_ANGULAR_VELOCITY, TIME],
            formula: "α = 2·(θ − ω₀·t) / t²",
            description: "From angular displacement, initial angular velocity and time",
            priority: 3,
            calculate: |v| {
                let t = v.value(TIME);
                2.0 * (v.value(ANGULAR_DISPLACEMENT) - v.value(INITIAL_ANGULAR_VELOCITY) * t) / (t * t)
            },
            validate: Some(|v| guards::positive(v, TIME)),
        },
        CalculationMethod {
            id: "angular_acceleration_from_velocities_and_displacement",
            required_variables: &[FINAL_ANGULAR_VELOCITY, INITIAL_ANGULAR_VELOCITY, ANGULAR_DISPLACEMENT],
            formula: "α = (ω² − ω₀²) / (2·θ)",
            description: "From final and initial angular velocity and angular displacement",
            priority: 4,
            calculate: |v| {
                (v.value(FINAL_ANGULAR_VELOCITY).powi(2) - v.value(INITIAL_ANGULAR_VELOCITY).powi(2))
                    / (2.0 * v.value(ANGULAR_DISPLACEMENT))
            },
            validate: Some(|v| guards::non_zero(v, ANGULAR_DISPLACEMENT)),
        },
    ],
};

pub static ANGULAR_DISPLACEMENT_CATALOG: VariableCatalog = VariableCatalog {
    target: ANGULAR_DISPLACEMENT,
    display_name: "angular displacement",
    unit: "rad",
    methods: &[
        CalculationMethod {
            id: "angular_displacement_from_acceleration_and_time",
            required_variables: &[INITIAL_ANGULAR_VELOCITY, ANGULAR_ACCELERATION, TIME],
            formula: "θ = ω₀·t + ½·α·t²",
            description: "From initial angular velocity, angular acceleration and time",
            priority: 1,
            calculate: |v| {
                let t = v.value(TIME);
                v.value(INITIAL_ANGULAR_VELOCITY) * t + 0.5 * v.value(ANGULAR_ACCELERATION) * t * t
            },
            validate: Some(|v| guards::non_negative(v, TIME)),
        },
        CalculationMethod {
            id: "angular_displacement_from_uniform_angular_velocity",
            required_variables: &[ANGULAR_VELOCITY, TIME],
            formula: "θ = ω·t",
            description: "From constant angular velocity and time",
            priority: 2,
            calculate: |v| v.value(ANGULAR_VELOCITY) * v.value(TIME),
            validate: Some(|v| guards::non_negative(v, TIME)),
        },
        CalculationMethod {
            id: "angular_displacement_from_mean_velocity",
            required_variables: &[INITIAL_ANGULAR_VELOCITY, FINAL_ANGULAR_VELOCITY, TIME],
            formula: "θ = (ω₀ + ω)·t / 2",
            description: "From initial and final angular velocity and time",
            priority: 3,
            calculate: |v| (v.value(INITIAL_ANGULAR_VELOCITY) + v.value(FINAL_ANGULAR_VELOCITY)) * v.value(TIME) / 2.0,
            validate: Some(|v| guards::non_negative(v, TIME)),
        },
        CalculationMethod {
            id: "angular_displacement_from_arc_length",
            required_variables: &[ARC_LENGTH, RADIUS],
            formula: "θ = s / r",
            description: "From arc length and radius",
            priority: 4,
            calculate: |v| v.value(ARC_LENGTH) / v.value(RADIUS),
            validate: Some(|v| guards::positive(v, RADIUS)),
        },
        CalculationMethod {
            id: "angular_displacement_from_velocities_and_acceleration",
            required_variables: &[INITIAL_ANGULAR_VELOCITY, FINAL_ANGULAR_VELOCITY, ANGULAR_ACCELERATION],
            formula: "θ = (ω² − ω₀²) / (2·α)",
            description: "From initial and final angular velocity and angular acceleration",
            priority: 5,
            calculate: |v| {
                (v.value(FINAL_ANGULAR_VELOCITY).powi(2) - v.value(INITIAL_ANGULAR_VELOCITY).powi(2))
                    / (2.0 * v.value(ANGULAR_ACCELERATION))
            },
            validate: Some(|v| guards::non_zero(v, ANGULAR_ACCELERATION)),
        },
    ],
};

pub static TIME_CATALOG: VariableCatalog = VariableCatalog {
    target: TIME,
    display_name: "time",
    unit: "s",
    methods: &[
        CalculationMethod {
            id: "time_from_velocities_and_acceleration",
            required_variables: &[FINAL_ANGULAR_VELOCITY, INITIAL_ANGULAR_VELOCITY, ANGULAR_ACCELERATION],
            formula: "t = (ω − ω₀) / α",
            description: "From final and initial angular velocity and angular acceleration",
            priority: 1,
            calculate: |v| (v.value(FINAL_ANGULAR_VELOCITY) - v.value(INITIAL_ANGULAR_VELOCITY)) / v.value(ANGULAR_ACCELERATION),
            validate: Some(|v| {
                guards::non_zero(v, ANGULAR_ACCELERATION).or_else(|| {
                    non_negative_time((v.value(FINAL_ANGULAR_VELOCITY) - v.value(INITIAL_ANGULAR_VELOCITY)) / v.value(ANGULAR_ACCELERATION))
                })
            }),
        },
        CalculationMethod {
            id: "time_from_uniform_angular_velocity",
            required_variables: &[ANGULAR_DISPLACEMENT, ANGULAR_VELOCITY],
            formula: "t = θ / ω",
            description: "From angular displacement and constant angular velocity",
            priority: 2,
            calculate: |v| v.value(ANGULAR_DISPLACEMENT) / v.value(ANGULAR_VELOCITY),
            validate: Some(|v| {
                guards::non_zero(v, ANGULAR_VELOCITY)
                    .or_else(|| non_negative_time(v.value(ANGULAR_DISPLACEMENT) / v.value(ANGULAR_VELOCITY)))
            }),
        },
        CalculationMethod {
            id: "time_from_mean_velocity",
            required_variables: &[ANGULAR_DISPLACEMENT, INITIAL_ANGULAR_VELOCITY, FINAL_ANGULAR_VELOCITY],
            formula: "t = 2θ / (ω₀ + ω)",
            description: "From angular displacement and initial and final angular velocity",
            priority: 3,
            calculate: |v| {
                2.0 * v.value(ANGULAR_DISPLACEMENT) / (v.value(INITIAL_ANGULAR_VELOCITY) + v.value(FINAL_ANGULAR_VELOCITY))
            },
            validate: Some(|v| {
                let sum = v.value(INITIAL_ANGULAR_VELOCITY) + v.value(FINAL_ANGULAR_VELOCITY);
                guards::non_zero_value(sum, "sum of initial and final angular velocity")
                    .or_else(|| non_negative_time(2.0 * v.value(ANGULAR_DISPLACEMENT) / sum))
            }),
        },
        CalculationMethod {
            id: "time_from_arc_length_and_linear_velocity",
            required_variables: &[ARC_LENGTH, LINEAR_VELOCITY],
            formula: "t = s / v",
            description: "From arc length and linear velocity",
            priority: 4,
            calculate: |v| v.value(ARC_LENGTH) / v.value(LINEAR_VELOCITY),
            validate: Some(|v| {
                guards::non_zero(v, LINEAR_VELOCITY)
                    .or_else(|| non_negative_time(v.value(ARC_LENGTH) / v.value(LINEAR_VELOCITY)))
            }),
        },
        CalculationMethod {
            id: "time_from_displacement_quadratic",
            required_variables: &[ANGULAR_DISPLACEMENT, INITIAL_ANGULAR_VELOCITY, ANGULAR_ACCELERATION],
            formula: "t = (−ω₀ + √(ω₀² + 2·α·θ)) / α",
            description: "From angular displacement, initial angular velocity and angular acceleration",
            priority: 5,
            calculate: |v| {
                (final_velocity_squared(v).sqrt() - v.value(INITIAL_ANGULAR_VELOCITY)) / v.value(ANGULAR_ACCELERATION)
            },
            validate: Some(|v| {
                guards::non_zero(v, ANGULAR_ACCELERATION)
                    .or_else(|| guards::non_negative_value(final_velocity_squared(v), "ω₀² + 2·α·θ"))
                    .or_else(|| {
                        non_negative_time(
                            (final_velocity_squared(v).sqrt() - v.value(INITIAL_ANGULAR_VELOCITY)) / v.value(ANGULAR_ACCELERATION),
                        )
                    })
            }),
        },
    ],
};

pub static TANGENTIAL_ACCELERATION_CATALOG: VariableCatalog = VariableCatalog {
    target: TANGENTIAL_ACCELERATION,
    display_name: "tangential acceleration",
    unit: "m/s²",
    methods: &[
        CalculationMethod {
            id: "tangential_acceleration_from_angular_acceleration",
            required_variables: &[ANGULAR_ACCELERATION, RADIUS],
            formula: "a_t = α·r",
            description: "From angular acceleration and radius",
            priority: 1,
            calculate: |v| v.value(ANGULAR_ACCELERATION) * v.value(RADIUS),
            validate: Some(|v| guards::non_negative(v, RADIUS)),
        },
        CalculationMethod {
            id: "tangential_acceleration_from_total_and_centripetal",
            required_variables: &[TOTAL_ACCELERATION, CENTRIPETAL_ACCELERATION],
            formula: "a_t = √(a² − a_c²)",
            description: "From total and centripetal acceleration (magnitude)",
            priority: 2,
            calculate: |v| (v.value(TOTAL_ACCELERATION).powi(2) - v.value(CENTRIPETAL_ACCELERATION).powi(2)).sqrt(),
            validate: Some(|v| {
                guards::non_negative(v, TOTAL_ACCELERATION)
                    .or_else(|| guards::non_negative(v, CENTRIPETAL_ACCELERATION))
                    .or_else(|| {
                        (v.value(TOTAL_ACCELERATION) < v.value(CENTRIPETAL_ACCELERATION)).then(|| {
                            CalculationError::out_of_range(TOTAL_ACCELERATION, "must be at least the centripetal acceleration")
                        })
                    })
            }),
        },
    ],
};

pub static TOTAL_ACCELERATION_CATALOG: VariableCatalog = VariableCatalog {
    target: TOTAL_ACCELERATION,
    display_name: "total acceleration",
    unit: "m/s²",
    methods: &[
        CalculationMethod {
            id: "total_acceleration_from_components",
            required_variables: &[CENTRIPETAL_ACCELERATION, TANGENTIAL_ACCELERATION],
            formula: "a = √(a_c² + a_t²)",
            description: "From centripetal and tangential acceleration",
            priority: 1,
            calculate: |v| v.value(CENTRIPETAL_ACCELERATION).hypot(v.value(TANGENTIAL_ACCELERATION)),
            validate: Some(|v| guards::non_negative(v, CENTRIPETAL_ACCELERATION)),
        },
        CalculationMethod {
            id: "total_acceleration_from_angular_quantities",
            required_variables: &[RADIUS, FINAL_ANGULAR_VELOCITY, ANGULAR_ACCELERATION],
            formula: "a = r·√(ω⁴ + α²)",
            description: "From radius, angular velocity and angular acceleration",
            priority: 2,
            calculate: |v| v.value(RADIUS) * v.value(FINAL_ANGULAR_VELOCITY).powi(2).hypot(v.value(ANGULAR_ACCELERATION)),
            validate: Some(|v| guards::non_negative(v, RADIUS)),
        },
    ],
};
