use egui::Pos2;

use crate::command::Preview;
use crate::state::EditorState;
use crate::sticker::StickerSet;

/// Tool trait defines the interface for the canvas tools
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> String;

    /// Handle pointer press on the canvas: the drag state the press starts.
    /// The session commits the state's head operation right away.
    fn on_pointer_down(&self, pos: Pos2) -> EditorState;

    /// What the tool would draw at `pos`
    fn preview(&self, pos: Pos2) -> Preview;
}

mod marker;
pub use marker::MarkerTool;

mod sticker;
pub use sticker::StickerTool;

/// Enum representing all available tool types
#[derive(Debug, Clone, PartialEq)]
pub enum ToolType {
    Marker(MarkerTool),
    Sticker(StickerTool),
}

impl Tool for ToolType {
    fn name(&self) -> String {
        match self {
            Self::Marker(tool) => tool.name(),
            Self::Sticker(tool) => tool.name(),
        }
    }

    fn on_pointer_down(&self, pos: Pos2) -> EditorState {
        match self {
            Self::Marker(tool) => tool.on_pointer_down(pos),
            Self::Sticker(tool) => tool.on_pointer_down(pos),
        }
    }

    fn preview(&self, pos: Pos2) -> Preview {
        match self {
            Self::Marker(tool) => tool.preview(pos),
            Self::Sticker(tool) => tool.preview(pos),
        }
    }
}

impl ToolType {
    pub fn marker(width: f32) -> Self {
        Self::Marker(MarkerTool::new(width))
    }

    pub fn sticker(glyph: impl Into<String>) -> Self {
        Self::Sticker(StickerTool::new(glyph))
    }
}

/// The active tool and the stickers that can be selected
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    active: ToolType,
    stickers: StickerSet,
}

impl ToolState {
    pub fn new(active: ToolType, stickers: StickerSet) -> Self {
        Self { active, stickers }
    }

    pub fn active(&self) -> &ToolType {
        &self.active
    }

    pub fn is_active(&self, tool: &ToolType) -> bool {
        &self.active == tool
    }

    /// Switch tools. Returns false if `tool` was already active.
    pub fn select(&mut self, tool: ToolType) -> bool {
        if self.active == tool {
            return false;
        }
        self.active = tool;
        true
    }

    pub fn stickers(&self) -> &StickerSet {
        &self.stickers
    }

    pub fn stickers_mut(&mut self) -> &mut StickerSet {
        &mut self.stickers
    }
}
