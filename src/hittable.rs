use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitRecord {
    pub time: Float,
    pub point: Point3,
    pub normal: Vec3,
    pub color: Color,
    /// position of the primitive within the scene
    pub instance_id: usize,
}

impl HitRecord {
    pub fn new(time: Float, point: Point3, normal: Vec3, color: Color, instance_id: usize) -> Self {
        HitRecord {
            time,
            point,
            normal,
            color,
            instance_id,
        }
    }
}

pub trait Hittable {
    /// distance along `r` to the surface, if it is strictly in front of the ray origin
    fn intersect(&self, r: Ray) -> Option<Float>;
    // outward facing, unit length
    fn normal_at(&self, point: Point3) -> Vec3;
    fn color(&self) -> Color;
}
