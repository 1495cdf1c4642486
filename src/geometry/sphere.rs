use crate::hittable::Hittable;
use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub radius: Float,
    pub center: Point3,
    pub color: Color,
}

impl Sphere {
    pub fn new(radius: Float, center: Point3, color: Color) -> Sphere {
        Sphere {
            radius,
            center,
            color,
        }
    }
}

impl Hittable for Sphere {
    fn intersect(&self, r: Ray) -> Option<Float> {
        // the leading coefficient direction * direction is taken to be 1
        let oc: Vec3 = r.origin - self.center;
        let b = 2.0 * (oc * r.direction);
        let c = oc * oc - self.radius * self.radius;
        let discriminant = b * b - 4.0 * c;
        if discriminant < 0.0 {
            return None;
        }
        // only the near root is considered, so a ray starting inside the sphere misses it.
        let time = (-b - discriminant.sqrt()) / 2.0;
        if time > 0.0 {
            Some(time)
        } else {
            None
        }
    }
    fn normal_at(&self, point: Point3) -> Vec3 {
        (point - self.center).normalized()
    }
    fn color(&self) -> Color {
        self.color
    }
}
