use egui::Pos2;

use crate::color;
use crate::document::Document;
use crate::state::EditorState;

/// Samples the raster buffer under `pos` and makes it the pen color.
/// Outside the buffer the pen is left alone.
pub fn pick(state: &mut EditorState, document: &Document, pos: Pos2) {
    let Some(picked) = document.sample(pos) else {
        log::debug!("Eyedropper outside the canvas at {:?}", pos);
        return;
    };
    log::debug!("Eyedropper picked {} at {:?}", color::to_hex(picked), pos);
    state.pen_color = picked;
}
