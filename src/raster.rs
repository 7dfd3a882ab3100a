use image::{ImageBuffer, Rgb, RgbImage};

use crate::color::Color;
use crate::config::{BACKGROUND, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::stroke::Segment;

/// The pixels behind the canvas. What is saved is exactly what is shown,
/// because the canvas view displays this buffer.
#[derive(Debug, Clone)]
pub struct RasterBuffer {
    image: RgbImage,
    // Bumped on every change so the view knows when to re-upload
    revision: u64,
}

impl Default for RasterBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl RasterBuffer {
    /// A blank white canvas of the fixed canvas size
    pub fn new() -> Self {
        Self::blank(CANVAS_WIDTH, CANVAS_HEIGHT)
    }

    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            image: ImageBuffer::from_pixel(width, height, Rgb::<u8>::from(BACKGROUND)),
            revision: 0,
        }
    }

    /// Swaps in a fresh blank buffer of the same size. The revision keeps
    /// counting so the view still notices the change.
    pub fn reset(&mut self) {
        let revision = self.revision + 1;
        *self = Self::blank(self.width(), self.height());
        self.revision = revision;
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Raw RGB8 bytes, row-major
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width() && y < self.height() {
            Some(Color::from(*self.image.get_pixel(x, y)))
        } else {
            None
        }
    }

    pub fn is_blank(&self) -> bool {
        let bg = Rgb::<u8>::from(BACKGROUND);
        self.image.pixels().all(|p| *p == bg)
    }

    /// Paints a segment with round caps. Pixels whose sample point lies within
    /// the brush radius of the segment are filled, so the line is exactly
    /// `width` pixels across; anything off-canvas is clipped.
    pub fn draw_segment(&mut self, segment: &Segment) {
        let radius = segment.radius();
        let offset = segment.sample_offset();
        let reach = radius.ceil() as i32 + 1;

        let min_x = (segment.from.x.min(segment.to.x) - reach).max(0);
        let min_y = (segment.from.y.min(segment.to.y) - reach).max(0);
        let max_x = (segment.from.x.max(segment.to.x) + reach).min(self.width() as i32 - 1);
        let max_y = (segment.from.y.max(segment.to.y) + reach).min(self.height() as i32 - 1);

        let fill = Rgb::<u8>::from(segment.color);
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                if segment.distance_to(x as f32 + offset, y as f32 + offset) <= radius {
                    self.image.put_pixel(x as u32, y as u32, fill);
                }
            }
        }

        self.revision += 1;
    }
}
