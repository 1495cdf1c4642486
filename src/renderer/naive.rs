use super::prelude::*;

use std::time::Instant;

use tracing::info;

/// Single threaded, visits pixels in row-major order.
#[derive(Default)]
pub struct NaiveRenderer {}

impl NaiveRenderer {
    pub fn new() -> NaiveRenderer {
        NaiveRenderer {}
    }
}

impl Renderer for NaiveRenderer {
    fn render(
        &self,
        integrator: &dyn Integrator,
        camera: &PinholeCamera,
        resolution: Resolution,
    ) -> Result<(Vec2D<Color>, Profile), RenderError> {
        let Resolution { width, height } = resolution;
        info!("starting render with film resolution {}x{}", width, height);
        let now = Instant::now();

        let mut film = Vec2D::new(width, height, Color::ZERO);
        let mut profile = Profile::default();
        for y in 0..height {
            for x in 0..width {
                let r = camera.get_ray(x, y, width, height);
                film.write_at(x, y, integrator.color(r, &mut profile));
            }
        }

        let elapsed = (now.elapsed().as_millis() as f32) / 1000.0;
        info!("took {}s", elapsed);
        profile.pretty_print(elapsed, 1);
        Ok((film, profile))
    }
}
