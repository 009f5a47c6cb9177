use egui::Pos2;

use crate::document::Document;
use crate::state::{EditorState, Gesture, Placement};

/// Arms text placement for the next primary press. Replaces any text that
/// is already pending; empty text leaves the state unchanged.
pub fn arm(state: &mut EditorState, text: impl Into<String>) -> bool {
    let text = text.into();
    if text.is_empty() {
        return false;
    }
    log::debug!("Waiting for a click to place {:?}", text);
    state.placement = Placement::AwaitingClick { text };
    true
}

/// Drops any pending text without placing it.
pub fn disarm(state: &mut EditorState) {
    state.placement = Placement::Idle;
}

/// Places the pending text at `pos` in the pen color, if any is pending.
///
/// The press that places the text is consumed: it does not start a stroke.
pub fn place(state: &mut EditorState, document: &mut Document, pos: Pos2) -> bool {
    let Placement::AwaitingClick { text } = std::mem::take(&mut state.placement) else {
        return false;
    };
    document.place_text(pos, text, state.pen_color);
    state.gesture = Gesture::Consumed;
    true
}
