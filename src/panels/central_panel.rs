use eframe::egui;

use crate::PaintApp;

/// The drawing surface: shows the raster buffer and feeds drags on it to
/// the input handler.
pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::central_panel(&ctx.style()).fill(egui::Color32::from_gray(64)))
        .show(ctx, |ui| {
            let raster = app.canvas().raster();
            let size = egui::vec2(raster.width() as f32, raster.height() as f32);

            // No drawing while the color picker is up
            let sense = if app.color_dialog().is_open() {
                egui::Sense::hover()
            } else {
                egui::Sense::drag()
            };

            let (response, painter) = ui.allocate_painter(size, sense);
            let canvas_rect = response.rect;

            app.handle_input(&response);

            // Paint after input so this frame already shows the new segments
            let (renderer, canvas) = app.renderer_and_canvas();
            renderer.render(ctx, &painter, canvas_rect, canvas.raster());

            if response.hovered() {
                ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
            }
        });
}
