use crate::errors::RenderError;
use crate::geometry::{Primitive, Sphere};
use crate::hittable::{HitRecord, Hittable};
use crate::math::*;

/// Larger than any distance a scene is expected to span.
pub const T_MAX: Float = 1e9;

/// An ordered, read-only collection of primitives.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new(primitives: Vec<Primitive>) -> Self {
        Scene { primitives }
    }

    /// The three spheres rendered when no scene is configured.
    pub fn default_spheres() -> Vec<Sphere> {
        vec![
            Sphere::new(1.0, Point3::new(0.0, 0.0, -5.0), Color::new(1.0, 0.0, 0.0)),
            Sphere::new(1.0, Point3::new(2.0, 0.0, -6.0), Color::new(0.0, 1.0, 0.0)),
            Sphere::new(1.0, Point3::new(-2.0, 0.0, -6.0), Color::new(0.0, 0.0, 1.0)),
        ]
    }

    pub fn from_spheres(spheres: Vec<Sphere>) -> Result<Self, RenderError> {
        for (index, sphere) in spheres.iter().enumerate() {
            if !(sphere.radius > 0.0 && sphere.radius.is_finite()) {
                return Err(RenderError::InvalidSphere {
                    index,
                    radius: sphere.radius,
                });
            }
            if !sphere.center.is_finite() {
                return Err(RenderError::DegenerateVector {
                    what: format!("center of sphere {}", index),
                });
            }
        }
        Ok(Scene::new(spheres.into_iter().map(Primitive::from).collect()))
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Finds the primitive with the smallest positive intersection distance.
    /// On an exact tie the primitive stored first wins.
    pub fn hit(&self, r: Ray) -> Option<HitRecord> {
        let mut closest_so_far: Float = T_MAX;
        let mut nearest: Option<(usize, &Primitive)> = None;
        for (index, primitive) in self.primitives.iter().enumerate() {
            if let Some(time) = primitive.intersect(r) {
                if time < closest_so_far {
                    closest_so_far = time;
                    nearest = Some((index, primitive));
                }
            }
        }
        nearest.map(|(index, primitive)| {
            let point = r.point_at_parameter(closest_so_far);
            HitRecord::new(
                closest_so_far,
                point,
                primitive.normal_at(point),
                primitive.color(),
                index,
            )
        })
    }
}
