use super::Tonemapper;
use crate::math::{Color, Float};

/// Scales each channel by 255, truncates toward zero and clamps to 255.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Clamp {}

impl Clamp {
    pub fn new() -> Self {
        Clamp {}
    }

    fn quantize(&self, channel: Float) -> u8 {
        // `as` truncates toward zero, NaN becomes 0
        let scaled = channel * 255.0;
        (scaled as i64).clamp(0, 255) as u8
    }
}

impl Tonemapper for Clamp {
    fn map(&self, color: Color) -> [u8; 3] {
        [
            self.quantize(color.x),
            self.quantize(color.y),
            self.quantize(color.z),
        ]
    }
}
