mod clamp;

pub use clamp::Clamp;

use crate::math::Color;

/// Maps a linear color to 8 bit channels for output.
pub trait Tonemapper: Send + Sync {
    fn map(&self, color: Color) -> [u8; 3];
}
