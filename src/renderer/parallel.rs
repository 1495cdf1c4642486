use super::prelude::*;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
#[cfg(feature = "progress")]
use std::thread;
#[cfg(feature = "progress")]
use std::time::Duration;
use std::time::Instant;

#[cfg(feature = "progress")]
use pbr::ProgressBar;
use rayon::prelude::*;
use tracing::info;
#[cfg(feature = "progress")]
use tracing::warn;

/// Splits the film across a rayon thread pool. Every pixel writes only its own slot,
/// so the film is identical to what [`super::NaiveRenderer`] produces.
pub struct ParallelRenderer {
    pub threads: usize,
    pub show_progress: bool,
}

impl ParallelRenderer {
    pub fn new(threads: usize, show_progress: bool) -> ParallelRenderer {
        ParallelRenderer {
            threads: threads.max(1),
            show_progress,
        }
    }
}

impl Renderer for ParallelRenderer {
    fn render(
        &self,
        integrator: &dyn Integrator,
        camera: &PinholeCamera,
        resolution: Resolution,
    ) -> Result<(Vec2D<Color>, Profile), RenderError> {
        let Resolution { width, height } = resolution;
        info!(
            "starting render with film resolution {}x{} on {} threads",
            width, height, self.threads
        );
        let now = Instant::now();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()?;

        let mut film = Vec2D::new(width, height, Color::ZERO);
        #[cfg(feature = "progress")]
        let total_pixels = film.total_pixels();

        let pixel_count = Arc::new(AtomicUsize::new(0));
        #[cfg(feature = "progress")]
        let progress_thread = if self.show_progress {
            let clone1 = pixel_count.clone();
            Some(thread::spawn(move || {
                let mut pb = ProgressBar::new(total_pixels as u64);
                let mut local_index = 0;
                while local_index < total_pixels {
                    let pixels_to_increment = clone1.load(Ordering::Relaxed) - local_index;
                    pb.add(pixels_to_increment as u64);
                    local_index += pixels_to_increment;

                    thread::sleep(Duration::from_millis(250));
                }
                pb.finish();
            }))
        } else {
            None
        };

        let clone2 = pixel_count.clone();
        let profile = pool.install(|| {
            film.buffer
                .par_iter_mut()
                .enumerate()
                .map(|(pixel_index, pixel_ref)| {
                    let mut profile = Profile::default();
                    let y: usize = pixel_index / width;
                    let x: usize = pixel_index - width * y;
                    let r = camera.get_ray(x, y, width, height);
                    *pixel_ref = integrator.color(r, &mut profile);
                    clone2.fetch_add(1, Ordering::Relaxed);
                    profile
                })
                .reduce(Profile::default, |a, b| a.combine(b))
        });
        debug_assert_eq!(pixel_count.load(Ordering::Relaxed), film.total_pixels());

        #[cfg(feature = "progress")]
        {
            if let Some(thread) = progress_thread {
                if let Err(panic) = thread.join() {
                    warn!(
                        "progress bar incrementing thread threw an error {:?}",
                        panic
                    );
                }
            }
        }

        let elapsed = (now.elapsed().as_millis() as f32) / 1000.0;
        info!("took {}s", elapsed);
        profile.pretty_print(elapsed, self.threads);
        Ok((film, profile))
    }
}
