use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};

use crate::raster::RasterBuffer;

/// Keeps a GPU texture in step with the raster buffer.
///
/// The canvas on screen is this texture, so whatever has been committed to
/// the buffer is what the user sees.
#[derive(Default)]
pub struct Renderer {
    texture: Option<TextureHandle>,
    uploaded_revision: Option<u64>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the buffer has changed since the last upload
    pub fn needs_upload(&self, raster: &RasterBuffer) -> bool {
        self.texture.is_none() || self.uploaded_revision != Some(raster.revision())
    }

    /// Returns the canvas texture, uploading the buffer first if it changed
    pub fn texture(&mut self, ctx: &egui::Context, raster: &RasterBuffer) -> &TextureHandle {
        let needs_upload = self.needs_upload(raster);
        let image = || to_color_image(raster);

        let texture = match self.texture.take() {
            Some(mut texture) => {
                if needs_upload {
                    texture.set(image(), TextureOptions::NEAREST);
                }
                texture
            }
            None => ctx.load_texture("canvas", image(), TextureOptions::NEAREST),
        };

        self.uploaded_revision = Some(raster.revision());
        self.texture.insert(texture)
    }

    /// Paints the canvas into `rect`
    pub fn render(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: egui::Rect, raster: &RasterBuffer) {
        let texture = self.texture(ctx, raster);
        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        painter.image(texture.id(), rect, uv, egui::Color32::WHITE);
    }
}

fn to_color_image(raster: &RasterBuffer) -> ColorImage {
    ColorImage::from_rgb(
        [raster.width() as usize, raster.height() as usize],
        raster.as_raw(),
    )
}
