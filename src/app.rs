use crate::config::SketchpadConfig;
use crate::event::{LogEventHandler, RepaintEventHandler};
use crate::export::{self, ExportSettings};
use crate::input::InputHandler;
use crate::panels::{central_panel, sticker_dialog, tools_panel};
use crate::renderer::{RenderStyle, Renderer};
use crate::session::Session;
use crate::sticker::StickerSet;

/// Storage key for the sticker set, so custom stickers survive restarts
const STICKERS_KEY: &str = "sticker_sketchpad.stickers";

pub struct SketchpadApp {
    config: SketchpadConfig,
    session: Session,
    renderer: Renderer,
    input: Option<InputHandler>,
    /// Text of the "Add Sticker" dialog while it is open
    sticker_entry: Option<String>,
    status: Option<String>,
}

impl SketchpadApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: SketchpadConfig) -> Self {
        let mut app = Self::with_config(config);

        if let Some(storage) = cc.storage {
            if let Some(stickers) = eframe::get_value::<StickerSet>(storage, STICKERS_KEY) {
                log::info!("Restored {} stickers", stickers.len());
                app.session.set_stickers(stickers);
            }
        }

        app.session
            .subscribe(Box::new(RepaintEventHandler::new(cc.egui_ctx.clone())));
        app
    }

    /// An app without a window, for driving the UI logic directly
    pub fn with_config(config: SketchpadConfig) -> Self {
        let session = Session::from_config(&config);
        session.subscribe(Box::new(LogEventHandler));
        Self {
            renderer: Renderer::new(RenderStyle::from(&config)),
            session,
            config,
            input: None,
            sticker_entry: None,
            status: None,
        }
    }

    pub fn config(&self) -> &SketchpadConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Feed this frame's pointer input on the canvas to the session.
    ///
    /// `canvas` is the canvas widget's response. The canvas takes no new presses
    /// while another layer covers it or the sticker dialog is open.
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas: &egui::Response) {
        let canvas_rect = canvas.rect;
        let canvas_hovered = canvas.contains_pointer() && !self.is_sticker_dialog_open();
        let input = self
            .input
            .get_or_insert_with(|| InputHandler::new(canvas_rect, 1.0));
        input.set_canvas_rect(canvas_rect, 1.0);

        for event in input.process_input(ctx, canvas_hovered) {
            self.session.handle_input(&event);
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if self.is_sticker_dialog_open() {
            return;
        }
        let (undo, redo) = ctx.input_mut(|i| {
            // Check the shifted combination first, plain COMMAND+Z would also match it
            let redo = i.consume_key(egui::Modifiers::COMMAND | egui::Modifiers::SHIFT, egui::Key::Z)
                || i.consume_key(egui::Modifiers::COMMAND, egui::Key::Y);
            let undo = i.consume_key(egui::Modifiers::COMMAND, egui::Key::Z);
            (undo, redo)
        });
        if undo {
            self.session.undo();
        }
        if redo {
            self.session.redo();
        }
    }

    /// Write the drawing as a PNG to the configured export path
    pub fn export(&mut self) {
        let path = self.config.export_path.clone();
        let result = export::save_png(
            self.session.history(),
            &self.renderer,
            ExportSettings::from(&self.config),
            &path,
        );
        self.status = Some(match result {
            Ok(()) => format!("Exported to {}", path.display()),
            Err(err) => {
                log::error!("Export failed: {err}");
                format!("Export failed: {err}")
            }
        });
    }

    pub fn open_sticker_dialog(&mut self) {
        self.sticker_entry = Some(self.config.sticker_prompt_default.clone());
    }

    pub fn is_sticker_dialog_open(&self) -> bool {
        self.sticker_entry.is_some()
    }

    pub fn sticker_entry_mut(&mut self) -> Option<&mut String> {
        self.sticker_entry.as_mut()
    }

    /// Close the dialog; `entry` is `None` when it was cancelled
    pub fn close_sticker_dialog(&mut self, entry: Option<String>) {
        self.sticker_entry = None;
        if let Some(glyph) = self.session.add_sticker(entry.as_deref()) {
            self.status = Some(format!("Added sticker {glyph}"));
        }
    }
}

impl eframe::App for SketchpadApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, STICKERS_KEY, self.session.tools().stickers());
    }

    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

impl SketchpadApp {
    /// Lay out one frame of the whole UI
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.handle_shortcuts(ctx);
        tools_panel(self, ctx);
        central_panel(self, ctx);
        sticker_dialog(self, ctx);
    }
}
