// src/utils/constants_config.rs
use crate::utils::{DEFAULT_PHYSICS_CONSTANTS, DEFAULT_SIMULATION_CONFIG};

/// Physical constants consulted by the calculators when the caller leaves them out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConstants {
    /// Standard gravity in m/s².
    pub gravity: f64,
}

impl Default for PhysicsConstants {
    fn default() -> Self {
        DEFAULT_PHYSICS_CONSTANTS
    }
}

impl PhysicsConstants {
    pub fn new(gravity: Option<f64>) -> Self {
        let default = DEFAULT_PHYSICS_CONSTANTS;
        Self {
            gravity: gravity.unwrap_or(default.gravity),
        }
    }
}

/// Defaults for freshly constructed particles and for the simulator's trail buffer.
///
/// # Examples
///
/// ```
/// use rs_kinematics::utils::SimulationConfig;
///
/// let config = SimulationConfig::new(Some(5.0), None, None, None, Some(10));
/// assert_eq!(config.radius, 5.0);
/// assert_eq!(config.angular_velocity, SimulationConfig::default().angular_velocity);
/// assert_eq!(config.trail_length, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Radius in meters (or canvas units when driven by a renderer).
    pub radius: f64,
    /// Initial angular velocity in rad/s.
    pub angular_velocity: f64,
    /// Angular acceleration in rad/s². Zero means uniform motion.
    pub angular_acceleration: f64,
    /// Initial angle in radians.
    pub initial_angle: f64,
    /// Number of positions the simulator keeps for the trail.
    pub trail_length: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        DEFAULT_SIMULATION_CONFIG
    }
}

impl SimulationConfig {
    pub fn new(
        radius: Option<f64>,
        angular_velocity: Option<f64>,
        angular_acceleration: Option<f64>,
        initial_angle: Option<f64>,
        trail_length: Option<usize>,
    ) -> Self {
        let default = DEFAULT_SIMULATION_CONFIG;
        Self {
            radius: radius.unwrap_or(default.radius),
            angular_velocity: angular_velocity.unwrap_or(default.angular_velocity),
            angular_acceleration: angular_acceleration.unwrap_or(default.angular_acceleration),
            initial_angle: initial_angle.unwrap_or(default.initial_angle),
            trail_length: trail_length.unwrap_or(default.trail_length),
        }
    }
}
