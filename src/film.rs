//! Sinks that consume quantized pixels in row-major order.

use crate::errors::RenderError;
use crate::math::Color;
use crate::renderer::Vec2D;
use crate::tonemap::Tonemapper;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub trait PixelSink {
    fn begin(&mut self, width: usize, height: usize) -> Result<(), RenderError>;
    fn push(&mut self, rgb: [u8; 3]) -> Result<(), RenderError>;
    fn finish(&mut self) -> Result<(), RenderError>;
}

/// Plain text "P3" netpbm writer, one pixel per line.
pub struct PpmSink<W: Write> {
    writer: W,
}

impl<W: Write> PpmSink<W> {
    pub fn new(writer: W) -> Self {
        PpmSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl PpmSink<BufWriter<File>> {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, RenderError> {
        Ok(PpmSink::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> PixelSink for PpmSink<W> {
    fn begin(&mut self, width: usize, height: usize) -> Result<(), RenderError> {
        write!(self.writer, "P3\n{} {}\n255\n", width, height)?;
        Ok(())
    }
    fn push(&mut self, rgb: [u8; 3]) -> Result<(), RenderError> {
        let [r, g, b] = rgb;
        writeln!(self.writer, "{} {} {}", r, g, b)?;
        Ok(())
    }
    fn finish(&mut self) -> Result<(), RenderError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Buffers the whole image and encodes it when finished.
pub struct PngSink {
    path: PathBuf,
    img: image::RgbImage,
    next_pixel: usize,
}

impl PngSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        PngSink {
            path: path.as_ref().to_path_buf(),
            img: image::RgbImage::new(0, 0),
            next_pixel: 0,
        }
    }
}

impl PixelSink for PngSink {
    fn begin(&mut self, width: usize, height: usize) -> Result<(), RenderError> {
        let (w, h) = match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => return Err(RenderError::InvalidResolution { width, height }),
        };
        self.img = image::ImageBuffer::new(w, h);
        self.next_pixel = 0;
        Ok(())
    }
    fn push(&mut self, rgb: [u8; 3]) -> Result<(), RenderError> {
        let width = self.img.width() as usize;
        let (x, y) = (self.next_pixel % width, self.next_pixel / width);
        self.img.put_pixel(x as u32, y as u32, image::Rgb(rgb));
        self.next_pixel += 1;
        Ok(())
    }
    fn finish(&mut self) -> Result<(), RenderError> {
        self.img.save(&self.path)?;
        Ok(())
    }
}

/// Quantizes every pixel of `film` and feeds it to `sink`, top-left first.
pub fn write_film<S: PixelSink + ?Sized>(
    film: &Vec2D<Color>,
    tonemapper: &dyn Tonemapper,
    sink: &mut S,
) -> Result<(), RenderError> {
    sink.begin(film.width, film.height)?;
    for pixel in film.buffer.iter() {
        sink.push(tonemapper.map(*pixel))?;
    }
    sink.finish()
}
