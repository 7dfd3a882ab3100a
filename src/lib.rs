#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod panels;
pub mod raster;
pub mod renderer;
pub mod shell;
pub mod state;
pub mod stroke;

pub use app::PaintApp;
pub use canvas::{CanvasError, CanvasState};
pub use color::{Color, ColorParseError};
pub use error::{PaintError, PaintResult};
pub use export::{ExportError, Notifier, SaveDialog, SaveOutcome};
pub use input::{InputHandler, PointerEvent, PointerSource, StrokeState};
pub use raster::RasterBuffer;
pub use renderer::Renderer;
pub use state::ToolState;
pub use stroke::{Point, Segment};
