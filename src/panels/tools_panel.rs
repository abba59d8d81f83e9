use crate::SketchpadApp;
use crate::command::Command;
use crate::components::ToolButton;
use crate::tools::{Tool, ToolType};

pub fn tools_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            // Nothing here reacts while the sticker dialog is open
            if app.is_sticker_dialog_open() {
                ui.disable();
            }
            ui.heading("Tools");

            // Marker widths; the active one is disabled
            let thin = app.config().thin_width;
            let thick = app.config().thick_width;
            ui.horizontal(|ui| {
                for (label, width) in [("Thin", thin), ("Thick", thick)] {
                    let active = app.session().tools().is_active(&ToolType::marker(width));
                    if ui.add_enabled(!active, egui::Button::new(label)).clicked() {
                        log::info!("Tool selected from UI: {label}");
                        app.session_mut().select_marker(width);
                    }
                }
            });

            ui.separator();
            ui.label("Stickers");

            // Collect glyphs first to avoid borrowing issues
            let glyphs = app.session().tools().stickers().glyphs().to_vec();
            ui.horizontal_wrapped(|ui| {
                for glyph in &glyphs {
                    let active = app.session().tools().is_active(&ToolType::sticker(glyph.as_str()));
                    if ToolButton::new(glyph, active).show(ui).clicked() {
                        log::info!("Tool selected from UI: sticker {glyph}");
                        app.session_mut().select_sticker(glyph);
                    }
                }
            });
            if ui.button("Add Sticker").clicked() {
                app.open_sticker_dialog();
            }

            ui.separator();

            // Clear/Undo/Redo section
            ui.horizontal(|ui| {
                let history = app.session().history();
                let can_clear = !matches!(history.top(), None | Some(Command::Clear));
                let can_undo = history.can_undo();
                let can_redo = history.can_redo();

                if ui.add_enabled(can_clear, egui::Button::new("Clear")).clicked() {
                    app.session_mut().clear();
                }
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.session_mut().undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.session_mut().redo();
                }
            });

            if ui.button("Export").clicked() {
                app.export();
            }

            ui.separator();

            let history = app.session().history();
            ui.horizontal(|ui| {
                ui.label(format!("Undo stack size: {}", history.done().len()));
                ui.label(format!("Redo stack size: {}", history.undone().len()));
            });

            egui::Grid::new("command_history_grid")
                .num_columns(2)
                .spacing([40.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.strong("Undo Stack");
                    ui.strong("Redo Stack");
                    ui.end_row();

                    let undo_stack = history.done();
                    let redo_stack = history.undone();
                    let max_len = undo_stack.len().max(redo_stack.len());

                    for i in 0..max_len {
                        ui.label(undo_stack.get(i).map(Command::label).unwrap_or(""));
                        ui.label(redo_stack.get(i).map(Command::label).unwrap_or(""));
                        ui.end_row();
                    }
                });

            ui.separator();
            ui.label(format!(
                "Tool: {} ({})",
                app.session().tools().active().name(),
                app.session().state().name()
            ));
        });
}
