use egui::{Button, ComboBox, Layout, Slider};

use crate::color;
use crate::config::BRUSH_WIDTH_RANGE;
use crate::dialogs::{ColorTarget, Dialog};
use crate::PaintApp;

const SWATCH_SIZE: egui::Vec2 = egui::vec2(60.0, 18.0);

pub fn controls_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("controls_panel").show(ctx, |ui| {
        ui.add_enabled_ui(!app.is_modal_open(), |ui| {
            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    app.editor.clear();
                }
                if ui.button("Choose Color").on_hover_text("Ctrl+C").clicked() {
                    app.open_dialog(Dialog::choose_color(ColorTarget::Pen, app.editor.state.pen_color));
                }

                let pen = app.editor.state.pen_color;
                ui.label("Pen color:");
                egui::color_picker::show_color(ui, pen, SWATCH_SIZE);
                ui.monospace(color::to_hex(pen));

                if ui.button("Save").on_hover_text("Ctrl+S").clicked() {
                    app.save();
                }

                ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Resize Canvas").clicked() {
                        app.open_dialog(Dialog::resize_canvas(app.editor.document.size()));
                    }
                });
            });

            ui.horizontal(|ui| {
                let mut width = app.editor.state.brush_width;
                ui.add(Slider::new(&mut width, BRUSH_WIDTH_RANGE).text("Brush size"));
                ComboBox::from_id_salt("brush_size_menu")
                    .selected_text(width.to_string())
                    .width(48.0)
                    .show_ui(ui, |ui| {
                        for size in BRUSH_WIDTH_RANGE {
                            ui.selectable_value(&mut width, size, size.to_string());
                        }
                    });
                app.editor.state.set_brush_width(width);

                let toggle_label = if app.editor.state.is_erasing() {
                    "Brush"
                } else {
                    "Eraser"
                };
                if ui.add(Button::new(toggle_label).min_size(egui::vec2(64.0, 0.0))).clicked() {
                    app.editor.toggle_eraser();
                }

                ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Set Text").clicked() {
                        app.open_dialog(Dialog::enter_text());
                    }
                    if ui.button("Change Background").clicked() {
                        app.open_dialog(Dialog::choose_color(
                            ColorTarget::Background,
                            app.editor.document.background(),
                        ));
                    }
                });
            });
        });
    });
}
