use eframe::egui;

use crate::config::BRUSH_SIZES;
use crate::state::ToolState;

/// Something the user asked for from the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    Clear,
    PickColor,
    Save,
    SetBrushSize(u32),
    Eraser,
    RevertColor,
}

/// Draws the toolbar row and reports the button the user pressed, if any.
pub fn toolbar(ui: &mut egui::Ui, tools: &ToolState) -> Option<ToolbarAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.button("Clear").clicked() {
            action = Some(ToolbarAction::Clear);
        }
        if ui.button("Pick color").clicked() {
            action = Some(ToolbarAction::PickColor);
        }
        if ui.button("Save").clicked() {
            action = Some(ToolbarAction::Save);
        }

        egui::ComboBox::from_id_salt("brush_size")
            .selected_text(format!("{} px", tools.brush_size()))
            .width(64.0)
            .show_ui(ui, |ui| {
                for size in BRUSH_SIZES {
                    let selected = tools.brush_size() == size;
                    if ui.selectable_label(selected, format!("{size} px")).clicked() && !selected {
                        action = Some(ToolbarAction::SetBrushSize(size));
                    }
                }
            });

        if ui
            .selectable_label(tools.is_erasing(), "Eraser")
            .on_hover_text("Paint with the background color")
            .clicked()
        {
            action = Some(ToolbarAction::Eraser);
        }
        if ui
            .button("Revert color")
            .on_hover_text(format!("Back to {}", tools.previous()))
            .clicked()
        {
            action = Some(ToolbarAction::RevertColor);
        }

        ui.separator();
        pen_swatch(ui, tools);
    });

    action
}

// Small square showing the active pen
fn pen_swatch(ui: &mut egui::Ui, tools: &ToolState) {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(20.0, 20.0), egui::Sense::hover());
    if ui.is_rect_visible(rect) {
        ui.painter().rect_filled(rect, 3.0, egui::Color32::from(tools.pen()));
        ui.painter()
            .rect_stroke(rect, 3.0, egui::Stroke::new(1.0, egui::Color32::GRAY));
    }
    response.on_hover_text(format!("Pen {}", tools.pen()));
}
