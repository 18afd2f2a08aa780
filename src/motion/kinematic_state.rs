use std::f64::consts::TAU;
use crate::models::Vector2D;

/// A planar vector quantity together with its magnitude.
///
/// The magnitude is carried explicitly rather than recomputed so that each
/// quantity reports the closed-form magnitude of its own model (for example
/// `r·|ω|` for velocity).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KinematicVector {
    pub x: f64,
    pub y: f64,
    pub magnitude: f64,
}

impl KinematicVector {
    pub fn new(x: f64, y: f64, magnitude: f64) -> Self {
        Self { x, y, magnitude }
    }

    /// Builds a vector whose magnitude is the Euclidean length of its components.
    pub fn from_components(components: Vector2D) -> Self {
        Self::new(components.x, components.y, components.magnitude())
    }

    pub fn components(&self) -> Vector2D {
        Vector2D::new(self.x, self.y)
    }
}

/// Snapshot of a particle on its circular path at a given elapsed time.
///
/// Never stored by the model; always recomputed from the particle parameters and time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicState {
    /// Elapsed time in seconds.
    pub time: f64,
    /// Accumulated angular displacement in radians (not wrapped).
    pub angle: f64,
    /// Instantaneous angular velocity in rad/s.
    pub angular_velocity: f64,
    /// Angular acceleration in rad/s².
    pub angular_acceleration: f64,
    pub position: Vector2D,
    pub velocity: KinematicVector,
    pub centripetal_acceleration: KinematicVector,
    pub tangential_acceleration: KinematicVector,
    pub total_acceleration: KinematicVector,
}

impl KinematicState {
    /// The angle wrapped into `[0, 2π)`, convenient for drawing.
    pub fn normalized_angle(&self) -> f64 {
        self.angle.rem_euclid(TAU)
    }

    /// Number of complete turns made since `t = 0` (signed).
    pub fn revolutions(&self) -> f64 {
        self.angle / TAU
    }
}
