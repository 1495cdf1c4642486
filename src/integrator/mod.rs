mod direct;

pub use direct::{trace, DirectLightingIntegrator};

use crate::math::*;
use crate::profile::Profile;

pub trait Integrator: Sync + Send {
    fn color(&self, camera_ray: Ray, profile: &mut Profile) -> Color;
}
