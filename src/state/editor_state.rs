//! Mutable editor state shared by every tool handler.
//!
//! The pointer and text-placement behaviour are explicit state machines:
//!
//! ```text
//!  Gesture:    Idle ──primary press──► Stroking { last } ──release──► Idle
//!                 └──press places text──► Consumed ──release──► Idle
//!
//!  Placement:  Idle ──"Set Text" confirmed──► AwaitingClick { text }
//!                 ◄──────next primary press in canvas──────┘
//! ```
use egui::{Color32, Pos2};

use crate::config::{AppConfig, BRUSH_WIDTH_RANGE};

/// Which pen the user is holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    #[default]
    Brush,
    /// Drawing in the background color; the brush settings are kept for restore.
    Eraser {
        saved_color: Color32,
        saved_width: u32,
    },
}

/// Whether the next primary press places pending text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Placement {
    #[default]
    Idle,
    AwaitingClick {
        text: String,
    },
}

/// What the primary button is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// A stroke is in progress; `last` is the previous sample, if any.
    Stroking {
        last: Option<Pos2>,
    },
    /// The press was used for something else (text placement) and draws nothing.
    Consumed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    pub pen_color: Color32,
    pub brush_width: u32,
    pub tool: ToolMode,
    pub placement: Placement,
    pub gesture: Gesture,
}

impl EditorState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            pen_color: config.pen_color,
            brush_width: config.brush_width.clamp(*BRUSH_WIDTH_RANGE.start(), *BRUSH_WIDTH_RANGE.end()),
            tool: ToolMode::Brush,
            placement: Placement::Idle,
            gesture: Gesture::Idle,
        }
    }

    /// Sets the brush width, clamped to [`BRUSH_WIDTH_RANGE`].
    pub fn set_brush_width(&mut self, width: u32) {
        self.brush_width = width.clamp(*BRUSH_WIDTH_RANGE.start(), *BRUSH_WIDTH_RANGE.end());
    }

    /// Position of the previous stroke sample, `None` between strokes.
    pub fn last_pos(&self) -> Option<Pos2> {
        match self.gesture {
            Gesture::Stroking { last } => last,
            _ => None,
        }
    }

    pub fn is_erasing(&self) -> bool {
        matches!(self.tool, ToolMode::Eraser { .. })
    }

    /// True while the eraser is engaged and still paints the background.
    pub fn paints_background(&self, background: Color32) -> bool {
        self.is_erasing() && self.pen_color == background
    }

    pub fn pending_text(&self) -> Option<&str> {
        match &self.placement {
            Placement::AwaitingClick { text } => Some(text),
            Placement::Idle => None,
        }
    }

    pub fn mode_label(&self) -> &'static str {
        match (&self.placement, self.tool) {
            (Placement::AwaitingClick { .. }, _) => "Placing text",
            (Placement::Idle, ToolMode::Eraser { .. }) => "Eraser",
            (Placement::Idle, ToolMode::Brush) => "Brush",
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brush_width_is_clamped() {
        let mut state = EditorState::default();
        state.set_brush_width(0);
        assert_eq!(state.brush_width, 1);
        state.set_brush_width(42);
        assert_eq!(state.brush_width, 10);
        state.set_brush_width(7);
        assert_eq!(state.brush_width, 7);
    }

    #[test]
    fn test_last_pos_only_while_stroking() {
        let mut state = EditorState::default();
        assert_eq!(state.last_pos(), None);

        state.gesture = Gesture::Stroking {
            last: Some(Pos2::new(3.0, 4.0)),
        };
        assert_eq!(state.last_pos(), Some(Pos2::new(3.0, 4.0)));

        state.gesture = Gesture::Consumed;
        assert_eq!(state.last_pos(), None);
    }

    #[test]
    fn test_mode_label_prefers_pending_text() {
        let mut state = EditorState::default();
        assert_eq!(state.mode_label(), "Brush");

        state.tool = ToolMode::Eraser {
            saved_color: Color32::BLACK,
            saved_width: 1,
        };
        assert_eq!(state.mode_label(), "Eraser");

        state.placement = Placement::AwaitingClick { text: "Hi".into() };
        assert_eq!(state.mode_label(), "Placing text");
    }
}
