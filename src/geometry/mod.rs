mod sphere;

pub use sphere::Sphere;

use crate::hittable::Hittable;
use crate::math::*;

/// Every kind of surface a scene can hold.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
}

impl From<Sphere> for Primitive {
    fn from(data: Sphere) -> Self {
        Primitive::Sphere(data)
    }
}

impl Hittable for Primitive {
    fn intersect(&self, r: Ray) -> Option<Float> {
        match self {
            Primitive::Sphere(sphere) => sphere.intersect(r),
        }
    }
    fn normal_at(&self, point: Point3) -> Vec3 {
        match self {
            Primitive::Sphere(sphere) => sphere.normal_at(point),
        }
    }
    fn color(&self) -> Color {
        match self {
            Primitive::Sphere(sphere) => sphere.color(),
        }
    }
}
