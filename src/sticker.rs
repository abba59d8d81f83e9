use egui::Pos2;
use serde::{Deserialize, Serialize};

/// A glyph stamped on the canvas. Dragging before release replaces the placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerPlacement {
    pub position: Pos2,
    pub glyph: String,
}

impl StickerPlacement {
    pub fn new(position: Pos2, glyph: impl Into<String>) -> Self {
        Self {
            position,
            glyph: glyph.into(),
        }
    }

    /// The same sticker at another position
    pub fn moved_to(&self, position: Pos2) -> Self {
        Self {
            position,
            glyph: self.glyph.clone(),
        }
    }
}

/// The stickers offered as tools, in button order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StickerSet {
    glyphs: Vec<String>,
}

impl StickerSet {
    pub fn new(glyphs: Vec<String>) -> Self {
        let mut set = Self::default();
        for glyph in glyphs {
            set.add(&glyph);
        }
        set
    }

    /// Append a user-entered sticker. Returns the stored glyph, or `None` when the
    /// entry is blank or already present.
    pub fn add(&mut self, entry: &str) -> Option<&str> {
        let glyph = entry.trim();
        if glyph.is_empty() || self.contains(glyph) {
            return None;
        }
        self.glyphs.push(glyph.to_owned());
        self.glyphs.last().map(String::as_str)
    }

    pub fn contains(&self, glyph: &str) -> bool {
        self.glyphs.iter().any(|g| g == glyph)
    }

    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
