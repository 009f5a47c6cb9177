use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by document operations
#[derive(Debug, Error)]
pub enum PaintError {
    #[error("canvas size {width}x{height} is outside the allowed range {min}..={max}")]
    InvalidCanvasSize {
        width: u32,
        height: u32,
        min: u32,
        max: u32,
    },

    #[error("failed to write image to {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Result type for document operations
pub type PaintResult<T> = Result<T, PaintError>;
