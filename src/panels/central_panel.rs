use crate::SketchpadApp;
use crate::surface::PainterSurface;

pub fn central_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(crate::APP_NAME);

        let side = app.config().canvas_size;
        let (response, painter) =
            ui.allocate_painter(egui::vec2(side, side), egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        // Handle input before painting so this frame shows its effect
        app.handle_input(ctx, &response);

        let mut surface = PainterSurface::new(&painter, canvas_rect, 1.0);
        app.session().redraw(app.renderer(), &mut surface);
        painter.rect_stroke(canvas_rect, 0.0, egui::Stroke::new(1.0, egui::Color32::GRAY));

        // The preview replaces the system cursor on the canvas
        if response.hovered() && app.session().preview().is_some() {
            ctx.set_cursor_icon(egui::CursorIcon::None);
        }

        if let Some(status) = app.status() {
            ui.label(status);
        }
    });
}
