use crate::color;
use crate::PaintApp;

pub fn status_panel(app: &PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
        let editor = &app.editor;
        ui.horizontal(|ui| {
            ui.label(format!("Canvas {}", editor.document.size()));
            ui.separator();
            ui.label(format!("Pen {}", color::to_hex(editor.state.pen_color)));
            ui.separator();
            ui.label(format!("Width {}", editor.state.brush_width));
            ui.separator();
            ui.label(editor.state.mode_label());

            if let Some(text) = editor.state.pending_text() {
                ui.separator();
                ui.label(format!("Click on the canvas to place {:?}", text));
            }

            let texts = editor.document.canvas().text_count();
            if texts > 0 {
                ui.separator();
                ui.colored_label(
                    ui.visuals().warn_fg_color,
                    format!("{} text item(s) are not included in saved images", texts),
                );
            }
        });
    });
}
