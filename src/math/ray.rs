use super::{Float, Point3, Vec3};

/// A half-line starting at `origin`.
/// Intersection routines expect `direction` to be unit length, which is not checked here.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    pub const fn new(origin: Point3, direction: Vec3) -> Self {
        Ray { origin, direction }
    }

    pub fn point_at_parameter(self, time: Float) -> Point3 {
        self.origin + self.direction * time
    }
}
