use egui::color_picker::{self, Alpha};
use egui::{Align2, Color32, Context, DragValue, Key, Ui};

use crate::color;
use crate::config::CANVAS_DIMENSION_RANGE;
use crate::document::CanvasSize;

/// What a color dialog applies to once confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    Pen,
    Background,
}

/// A modal prompt. While one is open the canvas and shortcuts ignore input.
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    ChooseColor {
        target: ColorTarget,
        color: Color32,
        hex: String,
    },
    ResizeCanvas {
        width: u32,
        height: u32,
    },
    EnterText {
        text: String,
    },
    Notice {
        title: String,
        message: String,
    },
}

/// Result of showing a dialog for one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogOutcome {
    /// Still waiting for the user
    Open,
    /// Closed without a value; callers must leave their state untouched
    Cancelled,
    Color { target: ColorTarget, color: Color32 },
    Resize(CanvasSize),
    Text(String),
    /// A notice was acknowledged
    Dismissed,
}

impl Dialog {
    pub fn choose_color(target: ColorTarget, current: Color32) -> Self {
        Self::ChooseColor {
            target,
            color: current,
            hex: color::to_hex(current),
        }
    }

    pub fn resize_canvas(current: CanvasSize) -> Self {
        Self::ResizeCanvas {
            width: current.width,
            height: current.height,
        }
    }

    pub fn enter_text() -> Self {
        Self::EnterText {
            text: String::new(),
        }
    }

    pub fn notice(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Notice {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::ChooseColor {
                target: ColorTarget::Pen,
                ..
            } => "Choose pen color",
            Self::ChooseColor {
                target: ColorTarget::Background,
                ..
            } => "Change background",
            Self::ResizeCanvas { .. } => "Resize canvas",
            Self::EnterText { .. } => "Insert text",
            Self::Notice { title, .. } => title,
        }
    }

    /// Shows the dialog centred on the screen and reports what the user did this frame.
    pub fn show(&mut self, ctx: &Context) -> DialogOutcome {
        let title = self.title().to_owned();
        let mut outcome = DialogOutcome::Open;

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_TOP, [0.0, 80.0])
            .show(ctx, |ui| {
                outcome = match self {
                    Self::ChooseColor { target, color, hex } => color_ui(ui, *target, color, hex),
                    Self::ResizeCanvas { width, height } => resize_ui(ui, width, height),
                    Self::EnterText { text } => text_ui(ui, text),
                    Self::Notice { message, .. } => notice_ui(ui, message),
                };
            });

        if outcome == DialogOutcome::Open && ctx.input(|i| i.key_pressed(Key::Escape)) {
            outcome = match self {
                Self::Notice { .. } => DialogOutcome::Dismissed,
                _ => DialogOutcome::Cancelled,
            };
        }
        outcome
    }
}

fn ok_cancel(ui: &mut Ui) -> (bool, bool) {
    ui.horizontal(|ui| (ui.button("OK").clicked(), ui.button("Cancel").clicked()))
        .inner
}

fn color_ui(ui: &mut Ui, target: ColorTarget, color: &mut Color32, hex: &mut String) -> DialogOutcome {
    if color_picker::color_picker_color32(ui, color, Alpha::Opaque) {
        *hex = color::to_hex(*color);
    }

    ui.horizontal(|ui| {
        ui.label("Hex:");
        if ui.text_edit_singleline(hex).changed() {
            if let Some(parsed) = color::parse_hex(hex) {
                *color = parsed;
            }
        }
    });

    match ok_cancel(ui) {
        (true, _) => DialogOutcome::Color {
            target,
            color: *color,
        },
        (_, true) => DialogOutcome::Cancelled,
        _ => DialogOutcome::Open,
    }
}

fn resize_ui(ui: &mut Ui, width: &mut u32, height: &mut u32) -> DialogOutcome {
    egui::Grid::new("resize_canvas_grid").num_columns(2).show(ui, |ui| {
        ui.label("Width:");
        ui.add(DragValue::new(width).range(CANVAS_DIMENSION_RANGE).suffix(" px"));
        ui.end_row();
        ui.label("Height:");
        ui.add(DragValue::new(height).range(CANVAS_DIMENSION_RANGE).suffix(" px"));
        ui.end_row();
    });
    ui.weak("The current drawing will be discarded.");

    match ok_cancel(ui) {
        (true, _) => match CanvasSize::new(*width, *height) {
            Ok(size) => DialogOutcome::Resize(size),
            Err(err) => {
                log::warn!("{}", err);
                DialogOutcome::Open
            }
        },
        (_, true) => DialogOutcome::Cancelled,
        _ => DialogOutcome::Open,
    }
}

fn text_ui(ui: &mut Ui, text: &mut String) -> DialogOutcome {
    ui.label("Enter text, then click on the canvas to place it:");
    let response = ui.text_edit_singleline(text);
    if ui.memory(|mem| mem.focused().is_none()) {
        response.request_focus();
    }
    ui.weak("Text is shown on the canvas only and is not included in saved images.");

    let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
    match ok_cancel(ui) {
        (true, _) => DialogOutcome::Text(text.clone()),
        _ if submitted => DialogOutcome::Text(text.clone()),
        (_, true) => DialogOutcome::Cancelled,
        _ => DialogOutcome::Open,
    }
}

fn notice_ui(ui: &mut Ui, message: &str) -> DialogOutcome {
    ui.label(message);
    if ui.button("OK").clicked() {
        DialogOutcome::Dismissed
    } else {
        DialogOutcome::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_color_dialog_starts_from_current_color() {
        let dialog = Dialog::choose_color(ColorTarget::Pen, Color32::from_rgb(0x12, 0x34, 0x56));
        assert_eq!(
            dialog,
            Dialog::ChooseColor {
                target: ColorTarget::Pen,
                color: Color32::from_rgb(0x12, 0x34, 0x56),
                hex: "#123456".into(),
            }
        );
        assert_eq!(dialog.title(), "Choose pen color");
    }

    #[test]
    fn test_resize_dialog_starts_from_current_size() {
        let dialog = Dialog::resize_canvas(CanvasSize::DEFAULT);
        assert_eq!(
            dialog,
            Dialog::ResizeCanvas {
                width: 600,
                height: 400
            }
        );
    }

    #[test]
    fn test_untouched_dialog_stays_open() {
        let ctx = Context::default();
        let mut dialog = Dialog::enter_text();
        let mut outcome = DialogOutcome::Cancelled;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            outcome = dialog.show(ctx);
        });
        assert_eq!(outcome, DialogOutcome::Open);
    }
}
