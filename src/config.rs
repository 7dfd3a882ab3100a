use crate::color::Color;

/// Width of the drawing surface in pixels
pub const CANVAS_WIDTH: u32 = 600;
/// Height of the drawing surface in pixels
pub const CANVAS_HEIGHT: u32 = 400;

/// Color of a freshly cleared canvas, and the color the eraser paints with
pub const BACKGROUND: Color = Color::WHITE;
/// Pen color on startup
pub const DEFAULT_PEN: Color = Color::BLACK;

/// Brush widths offered by the toolbar, smallest first
pub const BRUSH_SIZES: [u32; 4] = [1, 2, 5, 10];
pub const DEFAULT_BRUSH_SIZE: u32 = BRUSH_SIZES[0];

pub const WINDOW_TITLE: &str = "Sketchpad - draw and save to PNG";

// Room for the toolbar row above the canvas
const TOOLBAR_HEIGHT: f32 = 40.0;
const WINDOW_MARGIN: f32 = 16.0;

/// Window settings for the native event loop.
pub fn native_options() -> eframe::NativeOptions {
    let size = [
        CANVAS_WIDTH as f32 + WINDOW_MARGIN * 2.0,
        CANVAS_HEIGHT as f32 + TOOLBAR_HEIGHT + WINDOW_MARGIN * 2.0,
    ];

    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(size)
            .with_min_inner_size(size),
        ..Default::default()
    }
}
