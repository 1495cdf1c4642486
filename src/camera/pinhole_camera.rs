use crate::math::*;

/// All rays leave `origin` and pass through an image plane one unit down the -z axis.
/// There is no field of view and no aspect ratio correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinholeCamera {
    pub origin: Point3,
}

impl PinholeCamera {
    pub fn new(origin: Point3) -> Self {
        PinholeCamera { origin }
    }

    /// Image plane coordinates for pixel (x, y), with y = 0 as the top row.
    pub fn image_plane_uv(x: usize, y: usize, width: usize, height: usize) -> (Float, Float) {
        let (w, h) = (width as Float, height as Float);
        let u = (x as Float - w / 2.0) / w;
        let v = (h / 2.0 - y as Float) / h;
        (u, v)
    }

    pub fn get_ray(&self, x: usize, y: usize, width: usize, height: usize) -> Ray {
        let (u, v) = Self::image_plane_uv(x, y, width, height);
        Ray::new(self.origin, Vec3::new(u, v, -1.0).normalized())
    }
}

impl Default for PinholeCamera {
    fn default() -> Self {
        PinholeCamera::new(Point3::ZERO)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_image_plane_corners() {
        assert_eq!(PinholeCamera::image_plane_uv(0, 0, 800, 600), (-0.5, 0.5));
        assert_eq!(PinholeCamera::image_plane_uv(400, 300, 800, 600), (0.0, 0.0));
        assert_eq!(
            PinholeCamera::image_plane_uv(799, 599, 800, 600),
            (399.0 / 800.0, -299.0 / 600.0)
        );
        // odd sizes put the center between pixels
        assert_eq!(PinholeCamera::image_plane_uv(1, 1, 3, 3), (-0.5 / 3.0, 0.5 / 3.0));
    }

    #[test]
    fn test_center_ray_looks_down_negative_z() {
        let camera = PinholeCamera::new(Point3::new(1.0, 2.0, 3.0));
        let ray = camera.get_ray(400, 300, 800, 600);
        assert_eq!(ray.origin, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(ray.direction, -Vec3::Z);
    }

    #[test]
    fn test_directions_are_unit_length() {
        let camera = PinholeCamera::default();
        for (x, y) in [(0, 0), (799, 0), (0, 599), (123, 456), (799, 599)] {
            let ray = camera.get_ray(x, y, 800, 600);
            assert!((ray.direction.norm() - 1.0).abs() < 1e-9);
            assert!(ray.direction.z < 0.0);
        }
        // top left pixel points up and to the left
        let ray = camera.get_ray(0, 0, 800, 600);
        assert!(ray.direction.x < 0.0 && ray.direction.y > 0.0);
    }
}
