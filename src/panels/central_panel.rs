use egui::{CursorIcon, Sense};

use crate::PaintApp;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::both().show(ui, |ui| {
            let size = app.editor.document.size().to_vec2();
            let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());

            let cursor = if app.editor.state.pending_text().is_some() {
                CursorIcon::Text
            } else {
                CursorIcon::Crosshair
            };
            let response = response.on_hover_cursor(cursor);

            let over_canvas = response.contains_pointer();
            app.handle_canvas_input(ctx, response.rect, ui.clip_rect(), over_canvas);
            app.renderer.render(&painter, response.rect, app.editor.document.canvas());
        });
    });
}
