mod central_panel;
mod sticker_dialog;
mod tools_panel;

pub use central_panel::central_panel;
pub use sticker_dialog::sticker_dialog;
pub use tools_panel::tools_panel;
