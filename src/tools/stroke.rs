use egui::Pos2;

use crate::document::Document;
use crate::state::{EditorState, Gesture};

/// Starts a stroke at the press position.
pub fn begin(state: &mut EditorState, pos: Pos2) {
    log::debug!("Stroke started at {:?}", pos);
    state.gesture = Gesture::Stroking { last: Some(pos) };
}

/// Extends the current stroke to `pos`, drawing a segment from the previous
/// sample on both surfaces. Does nothing unless a stroke is in progress.
pub fn paint(state: &mut EditorState, document: &mut Document, pos: Pos2) {
    // An eyedropper pick while erasing turns the eraser into a plain pen.
    let erasing = state.paints_background(document.background());
    let Gesture::Stroking { last } = &mut state.gesture else {
        return;
    };

    if let Some(from) = *last {
        if from != pos {
            if erasing {
                document.erase_segment(from, pos, state.brush_width);
            } else {
                document.draw_segment(from, pos, state.brush_width, state.pen_color);
            }
        }
    }
    *last = Some(pos);
}

/// Ends the current gesture so the next stroke does not connect to this one.
pub fn end(state: &mut EditorState) {
    if state.gesture != Gesture::Idle {
        log::debug!("Stroke ended");
    }
    state.gesture = Gesture::Idle;
}
