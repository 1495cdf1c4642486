use super::Integrator;
use crate::errors::RenderError;
use crate::hittable::HitRecord;
use crate::math::*;
use crate::profile::Profile;
use crate::world::Scene;

/// Shades the nearest surface hit by `ray` with a single directional light.
/// `light_direction` must already be unit length.
pub fn trace(ray: Ray, scene: &Scene, light_direction: Vec3, background: Color) -> Color {
    match scene.hit(ray) {
        Some(hit) => shade(&hit, light_direction),
        None => background,
    }
}

// lambertian term only, no ambient and no shadow rays
fn shade(hit: &HitRecord, light_direction: Vec3) -> Color {
    let intensity = (hit.normal * light_direction).max(0.0);
    hit.color * intensity
}

pub struct DirectLightingIntegrator<'a> {
    pub scene: &'a Scene,
    pub light_direction: Vec3,
    pub background: Color,
}

impl<'a> DirectLightingIntegrator<'a> {
    pub fn new(
        scene: &'a Scene,
        light_direction: Vec3,
        background: Color,
    ) -> Result<Self, RenderError> {
        Ok(DirectLightingIntegrator {
            scene,
            light_direction: light_direction.try_normalized("light direction")?,
            background,
        })
    }
}

impl Integrator for DirectLightingIntegrator<'_> {
    fn color(&self, camera_ray: Ray, profile: &mut Profile) -> Color {
        profile.camera_rays += 1;
        match self.scene.hit(camera_ray) {
            Some(hit) => {
                profile.primitive_hits += 1;
                shade(&hit, self.light_direction)
            }
            None => {
                profile.background_hits += 1;
                self.background
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::Sphere;

    fn light() -> Vec3 {
        Vec3::new(1.0, 1.0, -1.0).normalized()
    }

    #[test]
    fn test_miss_returns_background() {
        let scene = Scene::from_spheres(Scene::default_spheres()).unwrap();
        let background = Color::new(0.2, 0.7, 0.8);
        let ray = Ray::new(Point3::ZERO, Vec3::Y);
        assert_eq!(trace(ray, &scene, light(), background), background);
    }

    #[test]
    fn test_single_sphere_on_axis() {
        let scene = Scene::from_spheres(vec![Sphere::new(
            1.0,
            Point3::new(0.0, 0.0, -5.0),
            Color::new(1.0, 0.0, 0.0),
        )])
        .unwrap();
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let color = trace(ray, &scene, light(), Color::new(0.2, 0.7, 0.8));
        // the normal at the near pole is +z, which faces away from the light
        let expected = Color::new(1.0, 0.0, 0.0) * (Vec3::Z * light()).max(0.0);
        assert!((color - expected).norm() < 1e-9, "{:?}", color);
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_lit_side_is_lambertian() {
        let scene = Scene::from_spheres(vec![Sphere::new(
            1.0,
            Point3::new(0.0, 0.0, -5.0),
            Color::new(0.5, 1.0, 0.25),
        )])
        .unwrap();
        // aim at the visible point of the sphere whose normal is the light direction itself
        let light_direction = Vec3::new(1.0, 1.0, 1.0).normalized();
        let target = Point3::new(0.0, 0.0, -5.0) + light_direction;
        let ray = Ray::new(Point3::ZERO, target.normalized());
        let color = trace(ray, &scene, light_direction, Color::ZERO);
        assert!((color - Color::new(0.5, 1.0, 0.25)).norm() < 1e-6, "{:?}", color);
    }

    #[test]
    fn test_facing_away_is_black() {
        let scene = Scene::from_spheres(vec![Sphere::new(
            1.0,
            Point3::new(0.0, 0.0, -5.0),
            Color::from(1.0),
        )])
        .unwrap();
        // light coming from straight behind the sphere
        let color = trace(
            Ray::new(Point3::ZERO, -Vec3::Z),
            &scene,
            -Vec3::Z,
            Color::from(1.0),
        );
        assert_eq!(color, Color::ZERO);
        // perpendicular
        let color = trace(
            Ray::new(Point3::ZERO, -Vec3::Z),
            &scene,
            Vec3::X,
            Color::from(1.0),
        );
        assert!(color.x >= 0.0 && color.y >= 0.0 && color.z >= 0.0);
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_integrator_matches_trace_and_counts() {
        let scene = Scene::from_spheres(Scene::default_spheres()).unwrap();
        let background = Color::new(0.2, 0.7, 0.8);
        let integrator =
            DirectLightingIntegrator::new(&scene, Vec3::new(1.0, 1.0, -1.0), background).unwrap();
        let mut profile = Profile::default();

        let rays = [
            Ray::new(Point3::ZERO, Vec3::new(0.05, 0.05, -1.0).normalized()),
            Ray::new(Point3::ZERO, Vec3::new(0.35, 0.0, -1.0).normalized()),
            Ray::new(Point3::ZERO, Vec3::Y),
        ];
        for ray in rays {
            assert_eq!(
                integrator.color(ray, &mut profile),
                trace(ray, &scene, light(), background)
            );
        }
        assert_eq!(profile.camera_rays, 3);
        assert_eq!(profile.primitive_hits, 2);
        assert_eq!(profile.background_hits, 1);
    }

    #[test]
    fn test_zero_light_direction_rejected() {
        let scene = Scene::default();
        assert!(matches!(
            DirectLightingIntegrator::new(&scene, Vec3::ZERO, Color::ZERO),
            Err(RenderError::DegenerateVector { .. })
        ));
    }
}
