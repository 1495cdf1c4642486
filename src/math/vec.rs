use crate::errors::RenderError;

use super::Float;

use std::ops::{Add, Div, Mul, Neg, Sub};

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Vec3 {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Vec3 {
    pub const fn new(x: Float, y: Float, z: Float) -> Vec3 {
        Vec3 { x, y, z }
    }
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);
}

// dot product
impl Mul for Vec3 {
    type Output = Float;
    fn mul(self, other: Vec3) -> Float {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl Mul<Float> for Vec3 {
    type Output = Vec3;
    fn mul(self, other: Float) -> Vec3 {
        Vec3::new(self.x * other, self.y * other, self.z * other)
    }
}

impl Mul<Vec3> for Float {
    type Output = Vec3;
    fn mul(self, other: Vec3) -> Vec3 {
        other * self
    }
}

impl Div<Float> for Vec3 {
    type Output = Vec3;
    fn div(self, other: Float) -> Vec3 {
        Vec3::new(self.x / other, self.y / other, self.z / other)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl From<Float> for Vec3 {
    fn from(s: Float) -> Vec3 {
        Vec3::new(s, s, s)
    }
}

impl From<[Float; 3]> for Vec3 {
    fn from(data: [Float; 3]) -> Vec3 {
        Vec3::new(data[0], data[1], data[2])
    }
}

impl From<Vec3> for [Float; 3] {
    fn from(v: Vec3) -> [Float; 3] {
        [v.x, v.y, v.z]
    }
}

impl Vec3 {
    pub fn dot(&self, other: Vec3) -> Float {
        *self * other
    }

    pub fn norm_squared(&self) -> Float {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn norm(&self) -> Float {
        self.norm_squared().sqrt()
    }

    /// Divides each component by the magnitude.
    /// A zero vector produces NaN components, use [`Vec3::try_normalized`] on untrusted input.
    pub fn normalized(&self) -> Self {
        *self / self.norm()
    }

    pub fn try_normalized(&self, what: &str) -> Result<Self, RenderError> {
        let norm = self.norm();
        if norm == 0.0 || !norm.is_finite() {
            return Err(RenderError::DegenerateVector {
                what: what.to_string(),
            });
        }
        Ok(*self / norm)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}
