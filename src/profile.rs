use tracing::info;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Profile {
    pub camera_rays: usize,     // one per pixel
    pub primitive_hits: usize,  // camera rays that hit a primitive
    pub background_hits: usize, // camera rays that escaped the scene
}

impl Profile {
    pub fn new(camera_rays: usize, primitive_hits: usize, background_hits: usize) -> Self {
        Profile {
            camera_rays,
            primitive_hits,
            background_hits,
        }
    }
    pub fn combine(&self, other: Self) -> Self {
        Profile::new(
            self.camera_rays + other.camera_rays,
            self.primitive_hits + other.primitive_hits,
            self.background_hits + other.background_hits,
        )
    }

    pub fn pretty_print(&self, elapsed: f32, threads: usize) {
        let &Profile {
            camera_rays,
            primitive_hits,
            background_hits,
        } = self;
        info!(
            "{} total camera rays at {} per second and {} per second per thread",
            camera_rays,
            camera_rays as f32 / elapsed,
            camera_rays as f32 / elapsed / (threads as f32)
        );
        info!(
            "{} primitive hits, {} background hits",
            primitive_hits, background_hits
        );
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn test_combine() {
        let a = Profile::new(10, 7, 3);
        let b = Profile::new(5, 1, 4);
        assert_eq!(a.combine(b), Profile::new(15, 8, 7));
        assert_eq!(a.combine(Profile::default()), a);
    }
}
