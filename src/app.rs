use crate::canvas::CanvasState;
use crate::error::PaintResult;
use crate::export::{self, Notifier, RfdNotifier, RfdSaveDialog, SaveDialog, SaveOutcome};
use crate::input::{EguiPointerSource, InputHandler};
use crate::panels::{self, ColorDialog, ToolbarAction};
use crate::renderer::Renderer;

/// Top-level application: owns the canvas and everything that acts on it.
pub struct PaintApp {
    canvas: CanvasState,
    input: InputHandler,
    pointer: EguiPointerSource,
    renderer: Renderer,
    color_dialog: ColorDialog,
    save_dialog: Box<dyn SaveDialog>,
    notifier: Box<dyn Notifier>,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_dialogs(Box::new(RfdSaveDialog), Box::new(RfdNotifier))
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Builds the app with custom save dialog and notifier, e.g. for tests
    pub fn with_dialogs(save_dialog: Box<dyn SaveDialog>, notifier: Box<dyn Notifier>) -> Self {
        Self {
            canvas: CanvasState::new(),
            input: InputHandler::new(),
            pointer: EguiPointerSource::new(),
            renderer: Renderer::new(),
            color_dialog: ColorDialog::new(),
            save_dialog,
            notifier,
        }
    }

    pub fn canvas(&self) -> &CanvasState {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut CanvasState {
        &mut self.canvas
    }

    pub fn input(&self) -> &InputHandler {
        &self.input
    }

    pub fn color_dialog(&self) -> &ColorDialog {
        &self.color_dialog
    }

    pub fn color_dialog_mut(&mut self) -> &mut ColorDialog {
        &mut self.color_dialog
    }

    pub(crate) fn renderer_and_canvas(&mut self) -> (&mut Renderer, &CanvasState) {
        (&mut self.renderer, &self.canvas)
    }

    /// Feeds this frame's drags on the canvas widget through the stroke
    /// state machine.
    pub fn handle_input(&mut self, response: &egui::Response) {
        self.pointer.observe(response);
        self.input.pump(&mut self.pointer, &mut self.canvas);
    }

    /// Carries out a toolbar request
    pub fn apply(&mut self, action: ToolbarAction) -> PaintResult<()> {
        match action {
            ToolbarAction::Clear => self.canvas.clear(),
            ToolbarAction::PickColor => self.color_dialog.open(self.canvas.tools().pen()),
            ToolbarAction::Save => {
                let outcome = export::save(
                    &self.canvas,
                    self.save_dialog.as_mut(),
                    self.notifier.as_mut(),
                )?;
                if let SaveOutcome::Saved(path) = outcome {
                    log::debug!("Save finished: {}", path.display());
                }
            }
            ToolbarAction::SetBrushSize(size) => self.canvas.set_brush_size(size)?,
            ToolbarAction::Eraser => self.canvas.use_eraser(),
            ToolbarAction::RevertColor => self.canvas.revert_color(),
        }
        Ok(())
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dialog_open = self.color_dialog.is_open();

        let action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| {
                // The picker is modal: the rest of the toolbar waits for it
                ui.add_enabled_ui(!dialog_open, |ui| panels::toolbar(ui, self.canvas.tools()))
                    .inner
            })
            .inner;

        if let Some(action) = action {
            if let Err(err) = self.apply(action) {
                log::error!("{}", err);
            }
        }

        if let Some(choice) = self.color_dialog.show(ctx) {
            self.canvas.set_color(choice.color());
        }

        panels::central_panel(self, ctx);
    }
}
