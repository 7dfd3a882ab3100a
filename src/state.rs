use crate::color::Color;
use crate::config::{BACKGROUND, DEFAULT_BRUSH_SIZE, DEFAULT_PEN};

/// Pen settings shared by the toolbar and the input handler.
///
/// Only one previous color is remembered. Changing the pen pushes the old
/// color into that slot, and reverting swaps the two, so repeated reverts
/// toggle between exactly two colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolState {
    pen: Color,
    previous: Color,
    brush_size: u32,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            pen: DEFAULT_PEN,
            previous: DEFAULT_PEN,
            brush_size: DEFAULT_BRUSH_SIZE,
        }
    }
}

impl ToolState {
    pub fn pen(&self) -> Color {
        self.pen
    }

    pub fn previous(&self) -> Color {
        self.previous
    }

    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    pub fn is_erasing(&self) -> bool {
        self.pen == BACKGROUND
    }

    /// Sets the pen. Whatever was active just before goes into the previous
    /// slot, even when it is the same color.
    pub fn change_pen(&mut self, color: Color) {
        self.previous = self.pen;
        self.pen = color;
    }

    pub fn swap_with_previous(&mut self) {
        std::mem::swap(&mut self.pen, &mut self.previous);
    }

    pub(crate) fn set_brush_size(&mut self, size: u32) {
        self.brush_size = size;
    }
}
