use egui::Pos2;

use crate::command::{Command, CommandHistory, Preview};
use crate::config::SketchpadConfig;
use crate::event::{EventBus, EventHandler, SketchEvent};
use crate::input::{InputEvent, InputLocation};
use crate::renderer::Renderer;
use crate::state::EditorState;
use crate::sticker::StickerSet;
use crate::surface::Surface;
use crate::tools::{Tool, ToolState, ToolType};

/// One drawing session: the history, the active tool, the pointer state machine
/// and the preview. Every state change is followed by an event on the bus, before
/// the next input is processed.
#[derive(Debug)]
pub struct Session {
    history: CommandHistory,
    tools: ToolState,
    state: EditorState,
    preview: Option<Preview>,
    /// Last pointer position while it is over the canvas
    pointer: Option<Pos2>,
    events: EventBus,
}

impl Session {
    pub fn new(tools: ToolState) -> Self {
        Self {
            history: CommandHistory::new(),
            tools,
            state: EditorState::Idle,
            preview: None,
            pointer: None,
            events: EventBus::new(),
        }
    }

    /// Thin marker selected, default stickers available
    pub fn from_config(config: &SketchpadConfig) -> Self {
        Self::new(ToolState::new(
            ToolType::marker(config.thin_width),
            StickerSet::new(config.default_stickers.clone()),
        ))
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.events.subscribe(handler);
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    /// Repaint `surface` from the history and the current preview
    pub fn redraw(&self, renderer: &Renderer, surface: &mut dyn Surface) {
        renderer.redraw(surface, &self.history, self.preview.as_ref());
    }

    pub fn handle_input(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerDown { location } => self.pointer_down(*location),
            InputEvent::PointerMove {
                location,
                primary_held,
            } => self.pointer_move(*location, *primary_held),
            InputEvent::PointerUp { location } => self.pointer_up(*location),
            InputEvent::PointerLeave => self.pointer_leave(),
        }
    }

    /// Start a stroke or a sticker placement and commit it right away
    pub fn pointer_down(&mut self, location: InputLocation) {
        if !location.is_in_canvas {
            return;
        }
        if self.state.is_dragging() {
            // The matching release never arrived
            self.finish_drag(location);
        }

        let pos = location.position;
        self.pointer = Some(pos);
        self.state = self.tools.active().on_pointer_down(pos);
        log::debug!("Pointer down at {pos:?}: {}", self.state.name());

        if let Some(command) = self.state.head_command() {
            self.history.commit(command);
        }
        self.preview = None;
        self.events.emit(SketchEvent::DrawingChanged);
    }

    pub fn pointer_move(&mut self, location: InputLocation, primary_held: bool) {
        self.pointer = location.is_in_canvas.then_some(location.position);

        if self.state.is_dragging() {
            if primary_held {
                self.state.drag_to(location.position);
                if let Some(command) = self.state.head_command() {
                    self.history.replace_top(command);
                }
                self.events.emit(SketchEvent::DrawingChanged);
                return;
            }
            self.finish_drag(location);
            return;
        }

        // Previews stay hidden while a button is held without a drag of ours
        let preview = if primary_held {
            None
        } else {
            self.tool_preview()
        };
        self.set_preview(preview);
    }

    /// Finish the current drag. Single-point strokes are dropped.
    pub fn pointer_up(&mut self, location: InputLocation) {
        self.pointer = location.is_in_canvas.then_some(location.position);
        if self.state.is_dragging() {
            self.finish_drag(location);
        } else {
            self.set_preview(self.tool_preview());
        }
    }

    /// Hide the preview. A drag in progress keeps following the pointer.
    pub fn pointer_leave(&mut self) {
        self.pointer = None;
        self.preview = None;
        self.events.emit(SketchEvent::DrawingChanged);
    }

    pub fn undo(&mut self) -> bool {
        if self.refuse_while_dragging("undo") {
            return false;
        }
        let changed = self.history.undo();
        if changed {
            self.events.emit(SketchEvent::DrawingChanged);
        }
        changed
    }

    pub fn redo(&mut self) -> bool {
        if self.refuse_while_dragging("redo") {
            return false;
        }
        let changed = self.history.redo();
        if changed {
            self.events.emit(SketchEvent::DrawingChanged);
        }
        changed
    }

    /// Wipe the canvas with an undoable [`Command::Clear`]. Does nothing when the
    /// canvas already shows nothing.
    pub fn clear(&mut self) -> bool {
        if self.refuse_while_dragging("clear") {
            return false;
        }
        if matches!(self.history.top(), None | Some(Command::Clear)) {
            return false;
        }
        self.history.commit(Command::Clear);
        self.events.emit(SketchEvent::DrawingChanged);
        true
    }

    /// Make `tool` the active tool and recompute the preview for it
    pub fn select_tool(&mut self, tool: ToolType) {
        if self.tools.select(tool) {
            self.events.emit(SketchEvent::ToolChanged {
                tool: self.tools.active().name(),
            });
        }
        if !self.state.is_dragging() {
            self.set_preview(self.tool_preview());
        }
    }

    pub fn select_marker(&mut self, width: f32) {
        self.select_tool(ToolType::marker(width));
    }

    pub fn select_sticker(&mut self, glyph: &str) {
        self.select_tool(ToolType::sticker(glyph));
    }

    /// Add a sticker from the entry dialog. `None`, blank and duplicate entries are ignored.
    pub fn add_sticker(&mut self, entry: Option<&str>) -> Option<String> {
        let glyph = self.tools.stickers_mut().add(entry?)?.to_owned();
        self.events.emit(SketchEvent::StickerAdded {
            glyph: glyph.clone(),
        });
        Some(glyph)
    }

    pub fn set_stickers(&mut self, stickers: StickerSet) {
        *self.tools.stickers_mut() = stickers;
    }

    fn finish_drag(&mut self, location: InputLocation) {
        let state = std::mem::take(&mut self.state);
        if let EditorState::Drawing { stroke } = &state {
            if stroke.points().len() < 2 {
                log::debug!("Discarding single-point stroke");
                self.history.discard_top();
                self.events.emit(SketchEvent::DrawingChanged);
            }
        }
        self.pointer = location.is_in_canvas.then_some(location.position);
        self.set_preview(self.tool_preview());
    }

    fn tool_preview(&self) -> Option<Preview> {
        self.pointer.map(|pos| self.tools.active().preview(pos))
    }

    fn set_preview(&mut self, preview: Option<Preview>) {
        self.preview = preview;
        self.events.emit(SketchEvent::ToolMoved);
    }

    fn refuse_while_dragging(&self, action: &str) -> bool {
        if self.state.is_dragging() {
            log::debug!("Ignoring {action} during {}", self.state.name());
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::from_config(&SketchpadConfig::default())
    }

    #[test]
    fn test_down_commits_immediately() {
        let mut session = session();
        session.pointer_down(InputLocation::inside(Pos2::new(5.0, 5.0)));
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.state().name(), "Drawing");
        assert!(session.preview().is_none());
    }

    #[test]
    fn test_down_outside_canvas_ignored() {
        let mut session = session();
        session.pointer_down(InputLocation::outside(Pos2::new(-5.0, 5.0)));
        assert!(session.history().is_empty());
        assert!(!session.state().is_dragging());
    }

    #[test]
    fn test_undo_refused_mid_drag() {
        let mut session = session();
        session.pointer_down(InputLocation::inside(Pos2::new(5.0, 5.0)));
        assert!(!session.undo());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_clear_on_empty_canvas_is_noop() {
        let mut session = session();
        assert!(!session.clear());
        assert!(session.history().is_empty());
    }
}
