use crate::event::{EventHandler, SketchEvent};

/// Asks egui for a new frame whenever the sketch changes
pub struct RepaintEventHandler {
    ctx: egui::Context,
}

impl RepaintEventHandler {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl EventHandler for RepaintEventHandler {
    fn handle_event(&mut self, _event: &SketchEvent) {
        self.ctx.request_repaint();
    }
}

/// Logs user-visible changes; preview movement is too chatty for anything but trace
#[derive(Debug, Default)]
pub struct LogEventHandler;

impl EventHandler for LogEventHandler {
    fn handle_event(&mut self, event: &SketchEvent) {
        match event {
            SketchEvent::ToolMoved => log::trace!("Tool moved"),
            SketchEvent::DrawingChanged => log::debug!("Drawing changed"),
            SketchEvent::ToolChanged { tool } => log::info!("Tool selected: {tool}"),
            SketchEvent::StickerAdded { glyph } => log::info!("Sticker added: {glyph}"),
        }
    }
}
