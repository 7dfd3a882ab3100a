use eframe::egui::{self, Color32};
use eframe::egui::color_picker::{Alpha, color_picker_color32};

use crate::color::Color;

/// How the color dialog was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    Picked(Color),
    Canceled,
}

impl ColorChoice {
    /// The picked color, or `None` if the user backed out
    pub fn color(self) -> Option<Color> {
        match self {
            Self::Picked(color) => Some(color),
            Self::Canceled => None,
        }
    }
}

#[derive(Debug)]
struct Draft {
    color: Color32,
    typed: String,
    typed_error: Option<String>,
}

/// In-app color picker window with OK and Cancel.
#[derive(Debug, Default)]
pub struct ColorDialog {
    draft: Option<Draft>,
}

impl ColorDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    /// Opens the dialog showing `initial`
    pub fn open(&mut self, initial: Color) {
        self.draft = Some(Draft {
            color: initial.into(),
            typed: initial.to_string(),
            typed_error: None,
        });
    }

    /// Closes the dialog as the user would with OK
    pub fn confirm(&mut self) -> Option<ColorChoice> {
        self.draft
            .take()
            .map(|draft| ColorChoice::Picked(draft.color.into()))
    }

    /// Closes the dialog as the user would with Cancel
    pub fn cancel(&mut self) -> Option<ColorChoice> {
        self.draft.take().map(|_| ColorChoice::Canceled)
    }

    /// Shows the window while open. Returns the user's decision on the frame
    /// the dialog closes.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<ColorChoice> {
        let draft = self.draft.as_mut()?;

        let mut window_open = true;
        let mut ok = false;
        let mut cancel = false;

        egui::Window::new("Pick color")
            .collapsible(false)
            .resizable(false)
            .open(&mut window_open)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                if color_picker_color32(ui, &mut draft.color, Alpha::Opaque) {
                    draft.typed = Color::from(draft.color).to_string();
                    draft.typed_error = None;
                }

                ui.horizontal(|ui| {
                    ui.label("Hex or name:");
                    let edit = ui.text_edit_singleline(&mut draft.typed);
                    if edit.changed() {
                        match draft.typed.parse::<Color>() {
                            Ok(color) => {
                                draft.color = color.into();
                                draft.typed_error = None;
                            }
                            Err(err) => draft.typed_error = Some(err.to_string()),
                        }
                    }
                });
                if let Some(err) = &draft.typed_error {
                    ui.colored_label(ui.visuals().error_fg_color, err);
                }

                ui.separator();
                ui.horizontal(|ui| {
                    ok = ui.button("OK").clicked();
                    cancel = ui.button("Cancel").clicked();
                });
            });

        if ok {
            self.confirm()
        } else if cancel || !window_open {
            self.cancel()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_dialog_reports_nothing() {
        let mut dialog = ColorDialog::new();
        assert!(!dialog.is_open());
        assert_eq!(dialog.confirm(), None);
        assert_eq!(dialog.cancel(), None);
    }

    #[test]
    fn test_confirm_returns_initial_color() {
        let teal = Color::rgb(0, 128, 128);
        let mut dialog = ColorDialog::new();
        dialog.open(teal);
        assert!(dialog.is_open());

        assert_eq!(dialog.confirm(), Some(ColorChoice::Picked(teal)));
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_cancel_yields_no_color() {
        let mut dialog = ColorDialog::new();
        dialog.open(Color::BLACK);

        let choice = dialog.cancel();
        assert_eq!(choice, Some(ColorChoice::Canceled));
        assert_eq!(choice.and_then(ColorChoice::color), None);
    }
}
