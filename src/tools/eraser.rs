use egui::Color32;

use crate::state::{EditorState, ToolMode};

/// Switches to the eraser: the pen takes the background color and the brush
/// color and width are remembered. No-op if the eraser is already engaged.
pub fn engage(state: &mut EditorState, background: Color32) {
    if state.is_erasing() {
        return;
    }
    state.tool = ToolMode::Eraser {
        saved_color: state.pen_color,
        saved_width: state.brush_width,
    };
    state.pen_color = background;
    log::debug!("Eraser engaged");
}

/// Switches back to the brush, restoring the remembered color and width.
pub fn release(state: &mut EditorState) {
    if let ToolMode::Eraser {
        saved_color,
        saved_width,
    } = state.tool
    {
        state.pen_color = saved_color;
        state.set_brush_width(saved_width);
        state.tool = ToolMode::Brush;
        log::debug!("Brush restored");
    }
}

/// Flips between eraser and brush.
pub fn toggle(state: &mut EditorState, background: Color32) {
    if state.is_erasing() {
        release(state);
    } else {
        engage(state, background);
    }
}

/// Keeps the eraser pen in step with a background color change.
pub fn follow_background(state: &mut EditorState, old: Color32, new: Color32) {
    if state.is_erasing() && state.pen_color == old {
        state.pen_color = new;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_engage_uses_background_color() {
        let mut state = EditorState::default();
        state.pen_color = Color32::RED;
        engage(&mut state, Color32::WHITE);

        assert!(state.is_erasing());
        assert_eq!(state.pen_color, Color32::WHITE);
    }

    #[test]
    fn test_engaging_twice_keeps_first_saved_brush() {
        let mut state = EditorState::default();
        state.pen_color = Color32::RED;
        engage(&mut state, Color32::WHITE);
        engage(&mut state, Color32::WHITE);
        release(&mut state);

        assert_eq!(state.pen_color, Color32::RED);
    }

    #[test]
    fn test_release_without_eraser_changes_nothing() {
        let mut state = EditorState::default();
        state.pen_color = Color32::GREEN;
        state.set_brush_width(4);
        let before = state.clone();
        release(&mut state);

        assert_eq!(state, before);
    }

    #[test]
    fn test_follow_background_only_while_erasing() {
        let mut state = EditorState::default();
        follow_background(&mut state, Color32::WHITE, Color32::YELLOW);
        assert_eq!(state.pen_color, Color32::BLACK);

        engage(&mut state, Color32::WHITE);
        follow_background(&mut state, Color32::WHITE, Color32::YELLOW);
        assert_eq!(state.pen_color, Color32::YELLOW);
    }
}
