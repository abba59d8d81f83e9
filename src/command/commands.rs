use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::sticker::StickerPlacement;
use crate::stroke::Stroke;

/// Render operations kept in the drawing history.
///
/// Each variant carries only the data needed to redraw itself; the
/// [`Renderer`](crate::Renderer) maps variants to drawing primitives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// A freehand stroke
    AddStroke(Stroke),
    /// A sticker stamped on the canvas
    PlaceSticker(StickerPlacement),
    /// Wipes everything drawn before it
    Clear,
}

impl Command {
    pub fn stroke(points: Vec<Pos2>, width: f32) -> Self {
        Command::AddStroke(Stroke::new(points, width))
    }

    pub fn sticker(position: Pos2, glyph: impl Into<String>) -> Self {
        Command::PlaceSticker(StickerPlacement::new(position, glyph))
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Command::AddStroke(stroke) => Some(stroke),
            _ => None,
        }
    }

    /// Short label for the history readout
    pub fn label(&self) -> &'static str {
        match self {
            Command::AddStroke(_) => "Stroke",
            Command::PlaceSticker(_) => "Sticker",
            Command::Clear => "Clear",
        }
    }
}

/// What the next stroke or sticker would look like. Never part of the history.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    /// Circle showing the marker size at the cursor
    Tool { position: Pos2, radius: f32 },
    /// The selected sticker at the cursor
    Sticker(StickerPlacement),
}

impl Preview {
    pub fn tool(position: Pos2, radius: f32) -> Self {
        Preview::Tool { position, radius }
    }

    pub fn sticker(position: Pos2, glyph: impl Into<String>) -> Self {
        Preview::Sticker(StickerPlacement::new(position, glyph))
    }
}
