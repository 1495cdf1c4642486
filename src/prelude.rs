pub use crate::camera::PinholeCamera;
pub use crate::errors::RenderError;
pub use crate::geometry::{Primitive, Sphere};
pub use crate::hittable::{HitRecord, Hittable};
pub use crate::integrator::{trace, DirectLightingIntegrator, Integrator};
pub use crate::parsing::config::{Config, OutputFormat, RendererType, Resolution, TOMLConfig};
pub use crate::renderer::{output_film, render, Renderer, Vec2D};
pub use crate::tonemap::{Clamp, Tonemapper};
pub use crate::world::Scene;

pub use crate::math::*;
