/// Notifications emitted by the session after each state change.
/// Every one of them means the canvas needs repainting.
#[derive(Debug, Clone, PartialEq)]
pub enum SketchEvent {
    /// The displayed history changed (commit, replace, undo, redo, clear)
    DrawingChanged,
    /// Only the preview changed
    ToolMoved,
    /// A different tool became active
    ToolChanged { tool: String },
    /// A sticker was added to the sticker set
    StickerAdded { glyph: String },
}
