use crate::SketchpadApp;

/// Modal entry for a custom sticker, shown while the app has an open entry
pub fn sticker_dialog(app: &mut SketchpadApp, ctx: &egui::Context) {
    let Some(entry) = app.sticker_entry_mut() else {
        return;
    };

    // Some(Some(text)) when confirmed, Some(None) when cancelled
    let mut outcome: Option<Option<String>> = None;
    egui::Window::new("Add Sticker")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Enter sticker:");
            let response = ui.text_edit_singleline(&mut *entry);
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.horizontal(|ui| {
                if ui.button("OK").clicked() || submitted {
                    outcome = Some(Some(entry.clone()));
                }
                if ui.button("Cancel").clicked() {
                    outcome = Some(None);
                }
            });
        });

    if let Some(result) = outcome {
        app.close_sticker_dialog(result);
    }
}
