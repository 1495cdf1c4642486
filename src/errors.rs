use std::io;

use thiserror::Error;

/// Anything that can abort a render.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("i/o failure on image sink: {0}")]
    Io(#[from] io::Error),
    #[error("cannot normalize zero-length or non-finite {what}")]
    DegenerateVector { what: String },
    #[error("sphere {index} has invalid radius {radius}, radius must be positive and finite")]
    InvalidSphere { index: usize, radius: f64 },
    #[error("invalid resolution {width}x{height}")]
    InvalidResolution { width: usize, height: usize },
    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
}
