pub use crate::camera::PinholeCamera;
pub use crate::errors::RenderError;
pub use crate::integrator::Integrator;
pub use crate::math::Color;
pub use crate::parsing::config::Resolution;
pub use crate::profile::Profile;

pub use super::{Renderer, Vec2D};
