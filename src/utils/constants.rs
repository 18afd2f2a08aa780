use crate::utils;

pub const DEFAULT_PHYSICS_CONSTANTS: utils::PhysicsConstants = utils::PhysicsConstants {
    gravity: 9.80665,
};

pub const DEFAULT_SIMULATION_CONFIG: utils::SimulationConfig = utils::SimulationConfig {
    radius: 100.0,
    angular_velocity: 1.0,
    angular_acceleration: 0.0,
    initial_angle: 0.0,
    trail_length: 50,
};
