mod central_panel;
mod color_dialog;
mod toolbar;

pub use central_panel::central_panel;
pub use color_dialog::{ColorChoice, ColorDialog};
pub use toolbar::{ToolbarAction, toolbar};
