use std::ffi::OsString;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use thiserror::Error;

use crate::canvas::CanvasState;
use crate::raster::RasterBuffer;

/// Errors that can occur while writing the canvas to disk
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Result of a save request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    /// The user closed the dialog without choosing a file
    Canceled,
}

/// Asks the user where the image should go
pub trait SaveDialog {
    fn choose_path(&mut self) -> Option<PathBuf>;
}

/// Tells the user how a save went
pub trait Notifier {
    fn info(&mut self, title: &str, message: &str);
    fn error(&mut self, title: &str, message: &str);
}

/// Native "Save as" dialog filtered to PNG files
#[derive(Debug, Default)]
pub struct RfdSaveDialog;

impl SaveDialog for RfdSaveDialog {
    fn choose_path(&mut self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Save drawing")
            .add_filter("PNG files", &["png"])
            .save_file()
    }
}

/// Native message boxes
#[derive(Debug, Default)]
pub struct RfdNotifier;

impl RfdNotifier {
    fn show(level: rfd::MessageLevel, title: &str, message: &str) {
        rfd::MessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}

impl Notifier for RfdNotifier {
    fn info(&mut self, title: &str, message: &str) {
        Self::show(rfd::MessageLevel::Info, title, message);
    }

    fn error(&mut self, title: &str, message: &str) {
        Self::show(rfd::MessageLevel::Error, title, message);
    }
}

/// Appends `.png` unless the raw path already ends in exactly `.png`.
/// The check is case-sensitive, so `drawing.PNG` becomes `drawing.PNG.png`.
pub fn with_png_extension(path: PathBuf) -> PathBuf {
    if path.as_os_str().as_encoded_bytes().ends_with(b".png") {
        return path;
    }

    // Push onto the whole name so "notes.v2" becomes "notes.v2.png"
    let mut name: OsString = path.into_os_string();
    name.push(".png");
    PathBuf::from(name)
}

/// Encodes the buffer as an RGB PNG at `path`
pub fn write_png(raster: &RasterBuffer, path: &Path) -> Result<(), ExportError> {
    raster
        .image()
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| ExportError::Encode {
            path: path.to_path_buf(),
            source,
        })
}

/// Runs the whole save flow: pick a path, fix up its extension, write, and
/// report back to the user. Canceling the dialog is not an error.
pub fn save(
    canvas: &CanvasState,
    dialog: &mut dyn SaveDialog,
    notifier: &mut dyn Notifier,
) -> Result<SaveOutcome, ExportError> {
    let Some(chosen) = dialog.choose_path() else {
        log::debug!("Save canceled");
        return Ok(SaveOutcome::Canceled);
    };

    let path = with_png_extension(chosen);
    match write_png(canvas.raster(), &path) {
        Ok(()) => {
            log::info!("Saved drawing to {}", path.display());
            notifier.info("Information", "Image saved successfully!");
            Ok(SaveOutcome::Saved(path))
        }
        Err(err) => {
            notifier.error("Save failed", &err.to_string());
            Err(err)
        }
    }
}
