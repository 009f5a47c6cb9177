use egui::{Color32, Pos2};

use crate::document::CanvasSize;

/// A single thing drawn on the interactive canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasItem {
    /// One segment of a freehand stroke
    Segment {
        from: Pos2,
        to: Pos2,
        width: f32,
        color: Color32,
        /// Drawn by the eraser; always painted in the current background
        erase: bool,
    },
    /// A text annotation anchored at its top-left corner
    Text {
        pos: Pos2,
        text: String,
        color: Color32,
    },
}

/// The visible drawing surface: a background and an ordered display list.
#[derive(Debug, Clone)]
pub struct CanvasSurface {
    size: CanvasSize,
    background: Color32,
    items: Vec<CanvasItem>,
}

impl CanvasSurface {
    pub fn new(size: CanvasSize, background: Color32) -> Self {
        Self {
            size,
            background,
            items: Vec::new(),
        }
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn items(&self) -> &[CanvasItem] {
        &self.items
    }

    pub fn push(&mut self, item: CanvasItem) {
        self.items.push(item);
    }

    /// Switches the background. Eraser segments take the new color; everything
    /// drawn with a pen keeps its own.
    pub fn set_background(&mut self, background: Color32) {
        for item in &mut self.items {
            if let CanvasItem::Segment {
                color, erase: true, ..
            } = item
            {
                *color = background;
            }
        }
        self.background = background;
    }

    /// Number of text annotations, which are not part of the exported image.
    pub fn text_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, CanvasItem::Text { .. }))
            .count()
    }
}
