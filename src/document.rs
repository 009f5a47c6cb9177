use std::path::Path;

use egui::{Color32, Pos2};

use crate::canvas::{CanvasItem, CanvasSurface};
use crate::config::CANVAS_DIMENSION_RANGE;
use crate::error::{PaintError, PaintResult};
use crate::raster::RasterBuffer;

/// Validated canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub const DEFAULT: Self = Self {
        width: 600,
        height: 400,
    };

    /// Creates a size, rejecting dimensions outside [`CANVAS_DIMENSION_RANGE`].
    pub fn new(width: u32, height: u32) -> PaintResult<Self> {
        if CANVAS_DIMENSION_RANGE.contains(&width) && CANVAS_DIMENSION_RANGE.contains(&height) {
            Ok(Self { width, height })
        } else {
            Err(PaintError::InvalidCanvasSize {
                width,
                height,
                min: *CANVAS_DIMENSION_RANGE.start(),
                max: *CANVAS_DIMENSION_RANGE.end(),
            })
        }
    }

    pub fn to_vec2(self) -> egui::Vec2 {
        egui::vec2(self.width as f32, self.height as f32)
    }
}

impl std::fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// The drawing being edited.
///
/// Owns the visible canvas and the backing raster buffer and is the only
/// place that mutates either, so the two always share dimensions and stroke
/// content. Text annotations are the exception: they live on the canvas only
/// and never reach the buffer or an exported file.
#[derive(Debug, Clone)]
pub struct Document {
    canvas: CanvasSurface,
    buffer: RasterBuffer,
}

impl Document {
    pub fn new(size: CanvasSize, background: Color32) -> Self {
        Self {
            canvas: CanvasSurface::new(size, background),
            buffer: RasterBuffer::new(size, background),
        }
    }

    pub fn size(&self) -> CanvasSize {
        self.canvas.size()
    }

    pub fn background(&self) -> Color32 {
        self.canvas.background()
    }

    pub fn canvas(&self) -> &CanvasSurface {
        &self.canvas
    }

    pub fn buffer(&self) -> &RasterBuffer {
        &self.buffer
    }

    /// Draws one pen segment on both surfaces.
    pub fn draw_segment(&mut self, from: Pos2, to: Pos2, width: u32, color: Color32) {
        self.push_segment(from, to, width, color, false);
    }

    /// Draws one eraser segment on both surfaces in the background color.
    pub fn erase_segment(&mut self, from: Pos2, to: Pos2, width: u32) {
        self.push_segment(from, to, width, self.background(), true);
    }

    fn push_segment(&mut self, from: Pos2, to: Pos2, width: u32, color: Color32, erase: bool) {
        let width = width as f32;
        log::trace!(
            "Segment {:?} -> {:?} (width {}, color {:?}, erase {})",
            from,
            to,
            width,
            color,
            erase
        );
        self.canvas.push(CanvasItem::Segment {
            from,
            to,
            width,
            color,
            erase,
        });
        self.buffer.draw_line(from, to, width, color);
    }

    /// Places a text annotation on the canvas. The raster buffer is left untouched.
    pub fn place_text(&mut self, pos: Pos2, text: impl Into<String>, color: Color32) {
        let text = text.into();
        log::info!("Placing text {:?} at {:?} (canvas only, not exported)", text, pos);
        self.canvas.push(CanvasItem::Text { pos, text, color });
    }

    /// Replaces both surfaces with blank ones at the current size.
    pub fn clear(&mut self) {
        log::info!("Clearing canvas ({})", self.size());
        self.replace_surfaces(self.size());
    }

    /// Replaces both surfaces with blank ones at `size`, discarding all content.
    pub fn resize(&mut self, size: CanvasSize) -> PaintResult<()> {
        let size = CanvasSize::new(size.width, size.height)?;
        log::info!("Resizing canvas {} -> {}", self.size(), size);
        self.replace_surfaces(size);
        Ok(())
    }

    /// Changes the background color on both surfaces.
    ///
    /// The buffer is rebuilt by replaying the stroke segments onto a fresh
    /// background, so blank and erased areas take the new color while pen
    /// strokes keep theirs, whatever color they were drawn in.
    pub fn set_background(&mut self, background: Color32) {
        let old = self.background();
        if old == background {
            return;
        }
        log::info!("Background {:?} -> {:?}", old, background);
        self.canvas.set_background(background);

        let mut buffer = RasterBuffer::new(self.size(), background);
        for item in self.canvas.items() {
            if let CanvasItem::Segment {
                from,
                to,
                width,
                color,
                ..
            } = item
            {
                buffer.draw_line(*from, *to, *width, *color);
            }
        }
        self.buffer = buffer;
    }

    /// Reads the buffer color nearest to `pos`.
    pub fn sample(&self, pos: Pos2) -> Option<Color32> {
        self.buffer.pixel_at(pos)
    }

    /// Writes the raster buffer to `path` as PNG.
    pub fn export_png(&self, path: &Path) -> PaintResult<()> {
        self.buffer.save_png(path)?;
        log::info!("Exported {} image to {}", self.size(), path.display());
        Ok(())
    }

    fn replace_surfaces(&mut self, size: CanvasSize) {
        let background = self.background();
        *self = Self::new(size, background);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(CanvasSize::DEFAULT, Color32::WHITE)
    }
}
