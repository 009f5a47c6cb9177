#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod color;
pub mod config;
pub mod dialogs;
pub mod document;
pub mod editor;
pub mod error;
pub mod file_handler;
pub mod input;
pub mod panels;
pub mod raster;
pub mod renderer;
pub mod state;
pub mod tools;

pub use app::PaintApp;
pub use document::{CanvasSize, Document};
pub use editor::Editor;
pub use error::{PaintError, PaintResult};
pub use input::{InputEvent, InputLocation};
pub use renderer::Renderer;
pub use state::EditorState;
