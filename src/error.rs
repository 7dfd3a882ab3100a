use thiserror::Error;

use crate::canvas::CanvasError;
use crate::export::ExportError;

/// Anything that can go wrong in the application
#[derive(Debug, Error)]
pub enum PaintError {
    #[error(transparent)]
    Canvas(#[from] CanvasError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("window failed: {0}")]
    Ui(#[from] eframe::Error),

    #[error("unexpected failure: {0}")]
    Panic(String),
}

/// Result type for application-level operations
pub type PaintResult<T> = Result<T, PaintError>;
