use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::error::PaintError;

/// Extension enforced on exported files.
pub const PNG_EXTENSION: &str = "png";

/// Result of a save request
#[derive(Debug)]
pub enum SaveOutcome {
    /// The user dismissed the dialog; nothing was written
    Cancelled,
    /// The image was written to this path
    Saved(PathBuf),
    /// Writing failed; the document is unchanged
    Failed(PaintError),
}

/// Shows the native save dialog restricted to PNG files.
pub fn ask_save_path() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Save image")
        .add_filter("PNG files", &[PNG_EXTENSION])
        .set_file_name("drawing.png")
        .save_file()
}

/// Appends `.png` unless the path already ends with it (case-insensitive).
///
/// Any other extension is kept, so `sketch.jpg` becomes `sketch.jpg.png`.
pub fn with_png_extension(path: PathBuf) -> PathBuf {
    if has_png_extension(&path) {
        return path;
    }
    let mut raw = path.into_os_string();
    raw.push(".");
    raw.push(PNG_EXTENSION);
    PathBuf::from(raw)
}

fn has_png_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PNG_EXTENSION))
}

/// Writes the document's raster buffer to `path` after normalising the extension.
pub fn save_document(document: &Document, path: Option<PathBuf>) -> SaveOutcome {
    let Some(path) = path.filter(|path| !path.as_os_str().is_empty()) else {
        log::debug!("Save cancelled");
        return SaveOutcome::Cancelled;
    };
    let path = with_png_extension(path);

    match document.export_png(&path) {
        Ok(()) => SaveOutcome::Saved(path),
        Err(err) => {
            log::error!("{}", err);
            SaveOutcome::Failed(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_png_extension_is_appended() {
        assert_eq!(with_png_extension("out".into()), PathBuf::from("out.png"));
        assert_eq!(with_png_extension("dir/out.jpg".into()), PathBuf::from("dir/out.jpg.png"));
    }

    #[test]
    fn test_existing_png_extension_is_kept() {
        assert_eq!(with_png_extension("out.png".into()), PathBuf::from("out.png"));
        assert_eq!(with_png_extension("OUT.PNG".into()), PathBuf::from("OUT.PNG"));
    }

    #[test]
    fn test_empty_path_counts_as_cancel() {
        let document = Document::default();
        assert!(matches!(
            save_document(&document, Some(PathBuf::new())),
            SaveOutcome::Cancelled
        ));
    }
}
