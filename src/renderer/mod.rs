mod prelude;
mod vec2d;

mod naive;
mod parallel;

pub use vec2d::Vec2D;

pub use naive::NaiveRenderer;
pub use parallel::ParallelRenderer;

use crate::camera::PinholeCamera;
use crate::errors::RenderError;
use crate::film::{write_film, PixelSink, PngSink, PpmSink};
use crate::integrator::{DirectLightingIntegrator, Integrator};
use crate::math::Color;
use crate::parsing::config::{Config, OutputFormat, RendererType, Resolution};
use crate::profile::Profile;
use crate::tonemap::Clamp;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

pub trait Renderer {
    fn render(
        &self,
        integrator: &dyn Integrator,
        camera: &PinholeCamera,
        resolution: Resolution,
    ) -> Result<(Vec2D<Color>, Profile), RenderError>;
}

pub fn construct_renderer(renderer_type: RendererType, show_progress: bool) -> Box<dyn Renderer> {
    match renderer_type {
        RendererType::Naive => Box::new(NaiveRenderer::new()),
        RendererType::Parallel { threads } => {
            let threads = threads.map_or_else(num_cpus::get, usize::from);
            Box::new(ParallelRenderer::new(threads, show_progress))
        }
    }
}

/// Renders the configured scene into a film of linear colors.
pub fn render(config: &Config, show_progress: bool) -> Result<(Vec2D<Color>, Profile), RenderError> {
    info!(
        "rendering {} primitives, light direction {:?}",
        config.scene.len(),
        config.light_direction
    );
    let integrator =
        DirectLightingIntegrator::new(&config.scene, config.light_direction, config.background)?;
    let renderer = construct_renderer(config.renderer, show_progress);
    renderer.render(&integrator, &config.camera, config.resolution)
}

/// Writes `film` to the configured output file and returns its path.
pub fn output_film(config: &Config, film: &Vec2D<Color>) -> Result<PathBuf, RenderError> {
    let path = PathBuf::from(&config.output.filename);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let tonemapper = Clamp::new();
    let mut sink = construct_sink(config.output.format, &path)?;
    info!("saving image to {}", path.to_string_lossy());
    write_film(film, &tonemapper, sink.as_mut())?;
    Ok(path)
}

fn construct_sink(format: OutputFormat, path: &Path) -> Result<Box<dyn PixelSink>, RenderError> {
    Ok(match format {
        OutputFormat::Ppm => Box::new(PpmSink::create(path)?),
        OutputFormat::Png => Box::new(PngSink::new(path)),
    })
}
