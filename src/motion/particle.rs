//! Closed-form kinematics of a particle on a circle.
//!
//! Uniform circular motion is the special case of uniformly accelerated
//! circular motion with zero angular acceleration, so a single
//! [`CircularParticle`] covers both regimes.
//!
//! # Example
//!
//! ```
//! use rs_kinematics::motion::CircularParticle;
//!
//! let particle = CircularParticle::accelerated(10.0, 0.0, 2.0).unwrap();
//! let state = particle.state(3.0);
//!
//! assert!((state.angle - 9.0).abs() < 1e-12);
//! assert!((state.angular_velocity - 6.0).abs() < 1e-12);
//! assert!((state.tangential_acceleration.magnitude - 20.0).abs() < 1e-9);
//! assert!((state.centripetal_acceleration.magnitude - 360.0).abs() < 1e-9);
//! ```
use rayon::prelude::*;
use crate::models::Vector2D;
use crate::motion::{KinematicState, KinematicVector};
use crate::utils::errors::ensure_finite;
use crate::utils::{PhysicsError, SimulationConfig};

/// Which circular-motion regime the particle's current parameters describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionRegime {
    /// Constant angular velocity (MCU).
    Uniform,
    /// Constant, non-zero angular acceleration (MCUA).
    UniformlyAccelerated,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CircularParticle {
    radius: f64,
    initial_angular_velocity: f64,
    angular_acceleration: f64,
    initial_angle: f64,
    center: Vector2D,
    /// Presentation only. Never read by the kinematics.
    color: String,
}

impl Default for CircularParticle {
    fn default() -> Self {
        let config = SimulationConfig::default();
        Self {
            radius: config.radius,
            initial_angular_velocity: config.angular_velocity,
            angular_acceleration: config.angular_acceleration,
            initial_angle: config.initial_angle,
            center: Vector2D::ZERO,
            color: String::from("#3b82f6"),
        }
    }
}

impl CircularParticle {
    /// Creates a particle from a [`SimulationConfig`], centered on the origin.
    ///
    /// # Errors
    /// Returns an error if the configured radius is negative or any parameter is not finite.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, PhysicsError> {
        let mut particle = Self::default();
        particle.set_mcua_parameters(
            config.radius,
            config.angular_velocity,
            config.angular_acceleration,
            Some(config.initial_angle),
        )?;
        Ok(particle)
    }

    /// Creates a particle in uniform circular motion.
    ///
    /// # Errors
    /// Returns an error if `radius` is negative or a parameter is not finite.
    ///
    /// # Example
    /// ```
    /// use rs_kinematics::motion::{CircularParticle, MotionRegime};
    ///
    /// let particle = CircularParticle::uniform(5.0, 2.0).unwrap();
    /// assert_eq!(particle.regime(), MotionRegime::Uniform);
    /// assert!(CircularParticle::uniform(-1.0, 2.0).is_err());
    /// ```
    pub fn uniform(radius: f64, angular_velocity: f64) -> Result<Self, PhysicsError> {
        Self::accelerated(radius, angular_velocity, 0.0)
    }

    /// Creates a particle in uniformly accelerated circular motion starting at angle zero.
    ///
    /// # Errors
    /// Returns an error if `radius` is negative or a parameter is not finite.
    pub fn accelerated(
        radius: f64,
        initial_angular_velocity: f64,
        angular_acceleration: f64,
    ) -> Result<Self, PhysicsError> {
        let mut particle = Self::default();
        particle.set_mcua_parameters(radius, initial_angular_velocity, angular_acceleration, Some(0.0))?;
        Ok(particle)
    }

    /// Builder-style center override.
    pub fn with_center(mut self, center: Vector2D) -> Self {
        self.center = center;
        self
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn initial_angular_velocity(&self) -> f64 {
        self.initial_angular_velocity
    }

    pub fn angular_acceleration(&self) -> f64 {
        self.angular_acceleration
    }

    pub fn initial_angle(&self) -> f64 {
        self.initial_angle
    }

    pub fn center(&self) -> Vector2D {
        self.center
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn regime(&self) -> MotionRegime {
        if self.angular_acceleration == 0.0 {
            MotionRegime::Uniform
        } else {
            MotionRegime::UniformlyAccelerated
        }
    }

    /// θ(t) = θ₀ + ω₀·t + ½·α·t²
    pub fn angle(&self, t: f64) -> f64 {
        self.initial_angle + self.initial_angular_velocity * t + 0.5 * self.angular_acceleration * t * t
    }

    /// ω(t) = ω₀ + α·t
    pub fn angular_velocity(&self, t: f64) -> f64 {
        self.initial_angular_velocity + self.angular_acceleration * t
    }

    pub fn position(&self, t: f64) -> Vector2D {
        let (sin, cos) = self.angle(t).sin_cos();
        Vector2D::new(
            self.center.x + self.radius * cos,
            self.center.y + self.radius * sin,
        )
    }

    /// Tangential velocity with magnitude `r·|ω(t)|`.
    pub fn velocity(&self, t: f64) -> KinematicVector {
        let (sin, cos) = self.angle(t).sin_cos();
        let omega = self.angular_velocity(t);
        KinematicVector::new(
            -self.radius * omega * sin,
            self.radius * omega * cos,
            self.radius * omega.abs(),
        )
    }

    /// Radial acceleration pointing at the center, magnitude `r·ω(t)²`.
    pub fn centripetal_acceleration(&self, t: f64) -> KinematicVector {
        let (sin, cos) = self.angle(t).sin_cos();
        let omega = self.angular_velocity(t);
        let magnitude = self.radius * omega * omega;
        KinematicVector::new(-magnitude * cos, -magnitude * sin, magnitude)
    }

    /// Acceleration along the path, magnitude `r·|α|`. Zero in uniform motion.
    pub fn tangential_acceleration(&self, t: f64) -> KinematicVector {
        let (sin, cos) = self.angle(t).sin_cos();
        let alpha = self.angular_acceleration;
        KinematicVector::new(
            -self.radius * alpha * sin,
            self.radius * alpha * cos,
            self.radius * alpha.abs(),
        )
    }

    /// Vector sum of the centripetal and tangential accelerations.
    pub fn total_acceleration(&self, t: f64) -> KinematicVector {
        let centripetal = self.centripetal_acceleration(t).components();
        let tangential = self.tangential_acceleration(t).components();
        KinematicVector::from_components(centripetal + tangential)
    }

    pub fn state(&self, t: f64) -> KinematicState {
        KinematicState {
            time: t,
            angle: self.angle(t),
            angular_velocity: self.angular_velocity(t),
            angular_acceleration: self.angular_acceleration,
            position: self.position(t),
            velocity: self.velocity(t),
            centripetal_acceleration: self.centripetal_acceleration(t),
            tangential_acceleration: self.tangential_acceleration(t),
            total_acceleration: self.total_acceleration(t),
        }
    }

    /// Evaluates the state at every given time. Samples are independent, so
    /// they are computed in parallel.
    ///
    /// # Example
    /// ```
    /// use rs_kinematics::motion::CircularParticle;
    ///
    /// let particle = CircularParticle::uniform(1.0, 1.0).unwrap();
    /// let path = particle.sample_path(&[0.0, 0.5, 1.0]);
    /// assert_eq!(path.len(), 3);
    /// assert_eq!(path[1].time, 0.5);
    /// ```
    pub fn sample_path(&self, times: &[f64]) -> Vec<KinematicState> {
        times.par_iter().map(|&t| self.state(t)).collect()
    }

    /// Samples `samples` evenly spaced states over `[start, end]`, both ends included.
    pub fn trajectory(&self, start: f64, end: f64, samples: usize) -> Vec<KinematicState> {
        let times: Vec<f64> = match samples {
            0 => Vec::new(),
            1 => vec![start],
            n => {
                let step = (end - start) / (n - 1) as f64;
                (0..n).map(|i| start + step * i as f64).collect()
            }
        };
        self.sample_path(&times)
    }

    /// # Errors
    /// Returns [`PhysicsError::InvalidRadius`] for a negative radius.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), PhysicsError> {
        self.radius = validate_radius(radius)?;
        Ok(())
    }

    pub fn set_initial_angular_velocity(&mut self, angular_velocity: f64) -> Result<(), PhysicsError> {
        self.initial_angular_velocity = ensure_finite("initial_angular_velocity", angular_velocity)?;
        Ok(())
    }

    pub fn set_angular_acceleration(&mut self, angular_acceleration: f64) -> Result<(), PhysicsError> {
        self.angular_acceleration = ensure_finite("angular_acceleration", angular_acceleration)?;
        Ok(())
    }

    pub fn set_initial_angle(&mut self, initial_angle: f64) -> Result<(), PhysicsError> {
        self.initial_angle = ensure_finite("initial_angle", initial_angle)?;
        Ok(())
    }

    pub fn set_center(&mut self, center: Vector2D) -> Result<(), PhysicsError> {
        ensure_finite("center.x", center.x)?;
        ensure_finite("center.y", center.y)?;
        self.center = center;
        Ok(())
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Switches to uniform motion with the given radius and angular velocity.
    /// The initial angle is kept when `initial_angle` is `None`.
    ///
    /// Either every parameter is applied or, on error, none is.
    pub fn set_parameters(
        &mut self,
        radius: f64,
        angular_velocity: f64,
        initial_angle: Option<f64>,
    ) -> Result<(), PhysicsError> {
        self.set_mcua_parameters(radius, angular_velocity, 0.0, initial_angle)
    }

    /// Sets every kinematic parameter at once. The initial angle is kept when
    /// `initial_angle` is `None`.
    ///
    /// Either every parameter is applied or, on error, none is.
    pub fn set_mcua_parameters(
        &mut self,
        radius: f64,
        initial_angular_velocity: f64,
        angular_acceleration: f64,
        initial_angle: Option<f64>,
    ) -> Result<(), PhysicsError> {
        let radius = validate_radius(radius)?;
        let initial_angular_velocity = ensure_finite("initial_angular_velocity", initial_angular_velocity)?;
        let angular_acceleration = ensure_finite("angular_acceleration", angular_acceleration)?;
        let initial_angle = match initial_angle {
            Some(angle) => ensure_finite("initial_angle", angle)?,
            None => self.initial_angle,
        };

        self.radius = radius;
        self.initial_angular_velocity = initial_angular_velocity;
        self.angular_acceleration = angular_acceleration;
        self.initial_angle = initial_angle;
        Ok(())
    }
}

fn validate_radius(radius: f64) -> Result<f64, PhysicsError> {
    let radius = ensure_finite("radius", radius)?;
    if radius < 0.0 {
        return Err(PhysicsError::InvalidRadius);
    }
    Ok(radius)
}
