mod ray;
mod vec;

pub use ray::Ray;
pub use vec::Vec3;

pub type Float = f64;

/// Positions share the vector representation.
pub type Point3 = Vec3;

/// RGB intensities, nominally in [0, 1] per channel before quantization.
pub type Color = Vec3;
