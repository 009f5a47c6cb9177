use egui::Rect;

use crate::config::AppConfig;
use crate::dialogs::{ColorTarget, Dialog, DialogOutcome};
use crate::editor::Editor;
use crate::file_handler::{self, SaveOutcome};
use crate::input::{InputEvent, InputHandler, Shortcut};
use crate::panels;
use crate::renderer::Renderer;

/// The eframe application: one editor, one canvas, at most one open dialog.
pub struct PaintApp {
    pub(crate) editor: Editor,
    pub(crate) renderer: Renderer,
    input: InputHandler,
    dialog: Option<Dialog>,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_config(config)
    }

    /// Builds the application state without a window.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            editor: Editor::new(&config),
            renderer: Renderer::default(),
            input: InputHandler::new(Rect::NOTHING),
            dialog: None,
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.dialog.is_some()
    }

    /// Opens `dialog` unless another one is already showing.
    pub fn open_dialog(&mut self, dialog: Dialog) {
        if let Some(open) = &self.dialog {
            log::debug!("Ignoring {:?}: {:?} is still open", dialog.title(), open.title());
            return;
        }
        self.dialog = Some(dialog);
    }

    /// Asks for a destination and exports the drawing, reporting the result in a notice.
    pub fn save(&mut self) {
        let path = file_handler::ask_save_path();
        self.finish_save(self.editor.save(path));
    }

    pub(crate) fn finish_save(&mut self, outcome: SaveOutcome) {
        match outcome {
            SaveOutcome::Cancelled => {}
            SaveOutcome::Saved(path) => self.open_dialog(Dialog::notice(
                "Information",
                format!("Image saved successfully to {}", path.display()),
            )),
            SaveOutcome::Failed(err) => {
                self.open_dialog(Dialog::notice("Save failed", err.to_string()));
            }
        }
    }

    /// Applies a closed dialog's result. Cancellation changes nothing.
    pub fn apply_dialog_outcome(&mut self, outcome: DialogOutcome) {
        match outcome {
            DialogOutcome::Open => return,
            DialogOutcome::Cancelled | DialogOutcome::Dismissed => {}
            DialogOutcome::Color {
                target: ColorTarget::Pen,
                color,
            } => self.editor.set_pen_color(color),
            DialogOutcome::Color {
                target: ColorTarget::Background,
                color,
            } => self.editor.set_background(color),
            DialogOutcome::Resize(size) => {
                if let Err(err) = self.editor.resize(size) {
                    log::warn!("{}", err);
                }
            }
            DialogOutcome::Text(text) => {
                self.editor.set_text(text);
            }
        }
        self.dialog = None;
    }

    pub(crate) fn handle_canvas_input(
        &mut self,
        ctx: &egui::Context,
        canvas_rect: Rect,
        clip_rect: Rect,
        pointer_over_canvas: bool,
    ) {
        self.input
            .set_canvas_rect(canvas_rect, clip_rect, pointer_over_canvas);
        let events = self.input.process_input(ctx);
        self.dispatch_events(&events);
    }

    /// Routes shortcuts to the app and everything else to the editor.
    /// Nothing is routed while a dialog is open.
    pub fn dispatch_events(&mut self, events: &[InputEvent]) {
        if self.is_modal_open() {
            return;
        }

        for event in events {
            match Shortcut::from_event(event) {
                Some(shortcut) => self.handle_shortcut(shortcut),
                None => self.editor.handle_input(event),
            }
            if self.is_modal_open() {
                // The rest of this frame's input belongs to the dialog.
                break;
            }
        }
    }

    fn handle_shortcut(&mut self, shortcut: Shortcut) {
        match shortcut {
            Shortcut::Save => self.save(),
            Shortcut::ChooseColor => self.open_dialog(Dialog::choose_color(
                ColorTarget::Pen,
                self.editor.state.pen_color,
            )),
            Shortcut::Cancel => self.editor.cancel_text(),
        }
    }

    fn show_dialog(&mut self, ctx: &egui::Context) {
        if let Some(dialog) = &mut self.dialog {
            let outcome = dialog.show(ctx);
            self.apply_dialog_outcome(outcome);
        }
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::controls_panel(self, ctx);
        panels::status_panel(self, ctx);
        panels::central_panel(self, ctx);
        self.show_dialog(ctx);
    }
}
