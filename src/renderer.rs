// src/renderer.rs
use egui::{Pos2, Vec2};

use crate::command::{Command, CommandHistory, Preview};
use crate::config::SketchpadConfig;
use crate::sticker::StickerPlacement;
use crate::stroke::Stroke;
use crate::surface::Surface;

/// Fixed drawing parameters that are not part of the operations themselves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    /// Line width of the tool preview circle, whatever marker is selected
    pub preview_line_width: f32,
    pub sticker_font_size: f32,
    /// Added to a sticker's position to find the text anchor
    pub sticker_offset: Vec2,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::from(&SketchpadConfig::default())
    }
}

impl From<&SketchpadConfig> for RenderStyle {
    fn from(config: &SketchpadConfig) -> Self {
        Self {
            preview_line_width: config.preview_line_width,
            sticker_font_size: config.sticker_font_size,
            sticker_offset: Vec2::from(config.sticker_offset),
        }
    }
}

/// Replays render operations against a [`Surface`]
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    style: RenderStyle,
}

impl Renderer {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    /// Clears the surface, replays the history in commit order, then draws the
    /// preview on top of everything.
    ///
    /// Args:
    ///     surface: where to draw
    ///     history: committed operations; only `done` is drawn
    ///     preview: the ephemeral tool or sticker preview, if any
    pub fn redraw(&self, surface: &mut dyn Surface, history: &CommandHistory, preview: Option<&Preview>) {
        surface.clear();
        self.replay(surface, history.done());
        if let Some(preview) = preview {
            self.render_preview(preview, surface);
        }
    }

    /// Draws operations in order without clearing first
    pub fn replay(&self, surface: &mut dyn Surface, commands: &[Command]) {
        for command in commands {
            self.render_command(command, surface);
        }
    }

    pub fn render_command(&self, command: &Command, surface: &mut dyn Surface) {
        match command {
            Command::AddStroke(stroke) => self.render_stroke(stroke, surface),
            Command::PlaceSticker(sticker) => self.render_sticker(sticker, surface),
            Command::Clear => surface.clear(),
        }
    }

    pub fn render_preview(&self, preview: &Preview, surface: &mut dyn Surface) {
        match preview {
            Preview::Tool { position, radius } => self.render_tool_preview(*position, *radius, surface),
            Preview::Sticker(sticker) => self.render_sticker(sticker, surface),
        }
    }

    fn render_stroke(&self, stroke: &Stroke, surface: &mut dyn Surface) {
        let Some(first) = stroke.points().first() else {
            return;
        };
        surface.set_line_width(stroke.width());
        surface.begin_path();
        surface.move_to(*first);
        for point in stroke.points() {
            surface.line_to(*point);
        }
        surface.stroke_path();
    }

    fn render_tool_preview(&self, position: Pos2, radius: f32, surface: &mut dyn Surface) {
        surface.set_line_width(self.style.preview_line_width);
        surface.begin_path();
        surface.circle(position, radius);
        surface.stroke_path();
    }

    fn render_sticker(&self, sticker: &StickerPlacement, surface: &mut dyn Surface) {
        surface.fill_text(
            &sticker.glyph,
            sticker.position + self.style.sticker_offset,
            self.style.sticker_font_size,
        );
    }
}
