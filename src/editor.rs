use std::path::PathBuf;

use egui::{Color32, PointerButton};

use crate::config::AppConfig;
use crate::document::{CanvasSize, Document};
use crate::error::PaintResult;
use crate::file_handler::{self, SaveOutcome};
use crate::input::InputEvent;
use crate::state::EditorState;
use crate::tools::{eraser, eyedropper, stroke, text};

/// Everything a handler may touch: the document and the editor state.
#[derive(Debug, Clone)]
pub struct Editor {
    pub document: Document,
    pub state: EditorState,
}

impl Editor {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            document: Document::new(config.canvas_size, config.background),
            state: EditorState::new(config),
        }
    }

    /// Routes one pointer event to the matching tool.
    pub fn handle_input(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerDown {
                location,
                button: PointerButton::Primary,
            } if location.is_in_canvas => {
                if !text::place(&mut self.state, &mut self.document, location.position) {
                    stroke::begin(&mut self.state, location.position);
                }
            }
            InputEvent::PointerMove {
                location,
                held_buttons,
            } if held_buttons.contains(&PointerButton::Primary) => {
                stroke::paint(&mut self.state, &mut self.document, location.position);
            }
            InputEvent::PointerUp {
                button: PointerButton::Primary,
                ..
            } => stroke::end(&mut self.state),
            InputEvent::PointerDown {
                location,
                button: PointerButton::Secondary,
            } if location.is_in_canvas => {
                eyedropper::pick(&mut self.state, &self.document, location.position);
            }
            _ => {}
        }
    }

    pub fn set_pen_color(&mut self, color: Color32) {
        log::debug!("Pen color {:?}", color);
        self.state.pen_color = color;
    }

    pub fn set_background(&mut self, color: Color32) {
        let old = self.document.background();
        self.document.set_background(color);
        eraser::follow_background(&mut self.state, old, color);
    }

    pub fn toggle_eraser(&mut self) {
        eraser::toggle(&mut self.state, self.document.background());
    }

    pub fn clear(&mut self) {
        stroke::end(&mut self.state);
        self.document.clear();
    }

    pub fn resize(&mut self, size: CanvasSize) -> PaintResult<()> {
        self.document.resize(size)?;
        stroke::end(&mut self.state);
        Ok(())
    }

    /// Arms text placement; returns `false` if `text` was empty.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        text::arm(&mut self.state, text)
    }

    pub fn cancel_text(&mut self) {
        text::disarm(&mut self.state);
    }

    /// Exports the raster buffer to the chosen path. `None` means the save
    /// dialog was cancelled.
    pub fn save(&self, path: Option<PathBuf>) -> SaveOutcome {
        file_handler::save_document(&self.document, path)
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
