use egui::Pos2;

use crate::command::Preview;
use crate::state::EditorState;
use crate::sticker::StickerPlacement;
use crate::tools::Tool;

/// Stamps one glyph per click
#[derive(Debug, Clone, PartialEq)]
pub struct StickerTool {
    glyph: String,
}

impl StickerTool {
    pub fn new(glyph: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
        }
    }
}

impl Tool for StickerTool {
    fn name(&self) -> String {
        format!("Sticker {}", self.glyph)
    }

    fn on_pointer_down(&self, pos: Pos2) -> EditorState {
        EditorState::Placing {
            sticker: StickerPlacement::new(pos, self.glyph.clone()),
        }
    }

    fn preview(&self, pos: Pos2) -> Preview {
        Preview::sticker(pos, self.glyph.clone())
    }
}
