use std::ops::{Add, Mul, Neg, Sub};

/// A point or vector in the plane of motion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a vector from a length and an angle measured counter-clockwise from +x.
    ///
    /// # Example
    /// ```
    /// use rs_kinematics::models::Vector2D;
    ///
    /// let v = Vector2D::from_polar(2.0, std::f64::consts::FRAC_PI_2);
    /// assert!(v.x.abs() < 1e-12);
    /// assert!((v.y - 2.0).abs() < 1e-12);
    /// ```
    pub fn from_polar(length: f64, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { x: length * cos, y: length * sin }
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn dot(&self, other: &Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Direction of the vector in radians, in `(-π, π]`.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn distance_to(&self, other: &Vector2D) -> f64 {
        (*self - *other).magnitude()
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, rhs: f64) -> Vector2D {
        Vector2D::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Vector2D {
    fn from(coords: (f64, f64)) -> Self {
        Vector2D::new(coords.0, coords.1)
    }
}

impl From<Vector2D> for (f64, f64) {
    fn from(v: Vector2D) -> Self {
        (v.x, v.y)
    }
}
