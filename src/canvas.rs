use thiserror::Error;

use crate::color::Color;
use crate::config::BACKGROUND;
use crate::raster::RasterBuffer;
use crate::state::ToolState;
use crate::stroke::{Point, Segment};

/// Errors raised by canvas operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CanvasError {
    #[error("brush size must be a positive number of pixels, got {0}")]
    InvalidBrushSize(u32),
}

/// Everything the user is editing: the raster buffer and the pen settings.
///
/// Owned by the app and handed by `&mut` to the input handler and the
/// toolbar; there is no shared or global drawing state.
#[derive(Debug, Clone, Default)]
pub struct CanvasState {
    raster: RasterBuffer,
    tools: ToolState,
}

impl CanvasState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raster(&self) -> &RasterBuffer {
        &self.raster
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    /// Throws the drawing away and starts over on a blank white buffer.
    /// Pen settings survive.
    pub fn clear(&mut self) {
        log::info!("Clearing canvas");
        self.raster.reset();
    }

    /// Width, in pixels, of segments committed from now on
    pub fn set_brush_size(&mut self, size: u32) -> Result<(), CanvasError> {
        if size == 0 {
            log::warn!("Rejected brush size 0");
            return Err(CanvasError::InvalidBrushSize(size));
        }
        log::debug!("Brush size set to {}", size);
        self.tools.set_brush_size(size);
        Ok(())
    }

    /// Applies the result of the color picker. `None` means the picker was
    /// canceled and nothing changes.
    pub fn set_color(&mut self, color: Option<Color>) {
        let Some(color) = color else {
            log::debug!("Color selection canceled");
            return;
        };

        self.tools.change_pen(color);
        log::info!("Pen color set to {}", color);
    }

    /// Switches to painting with the background color
    pub fn use_eraser(&mut self) {
        self.tools.change_pen(BACKGROUND);
        log::info!("Eraser selected");
    }

    /// Swaps the pen with the remembered previous color
    pub fn revert_color(&mut self) {
        self.tools.swap_with_previous();
        log::info!("Pen color reverted to {}", self.tools.pen());
    }

    /// Draws one segment with the current pen into the buffer and returns
    /// what was drawn.
    pub fn commit_segment(&mut self, from: Point, to: Point) -> Segment {
        let segment = Segment::new(from, to, self.tools.pen(), self.tools.brush_size());
        self.raster.draw_segment(&segment);
        segment
    }
}
