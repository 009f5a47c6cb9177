//! Pointer- and button-driven handlers. Each one mutates the [`EditorState`]
//! and, where it draws, the [`Document`].
//!
//! [`EditorState`]: crate::state::EditorState
//! [`Document`]: crate::document::Document

pub mod eraser;
pub mod eyedropper;
pub mod stroke;
pub mod text;
