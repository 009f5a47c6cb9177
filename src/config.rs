use std::ops::RangeInclusive;

use egui::Color32;

use crate::document::CanvasSize;

/// Title shown in the native window decoration.
pub const WINDOW_TITLE: &str = "Sketchpad: draw and save to PNG";

/// Allowed range for each canvas dimension, in pixels.
pub const CANVAS_DIMENSION_RANGE: RangeInclusive<u32> = 100..=1000;

/// Allowed range for the brush width, in pixels.
pub const BRUSH_WIDTH_RANGE: RangeInclusive<u32> = 1..=10;

/// Font size used for text annotations placed on the canvas.
pub const TEXT_FONT_SIZE: f32 = 14.0;

/// Startup defaults for the editor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    pub canvas_size: CanvasSize,
    pub background: Color32,
    pub pen_color: Color32,
    pub brush_width: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas_size: CanvasSize::DEFAULT,
            background: Color32::WHITE,
            pen_color: Color32::BLACK,
            brush_width: 1,
        }
    }
}

impl AppConfig {
    /// Builds the eframe window options, leaving room around the canvas for the controls.
    pub fn native_options(&self) -> eframe::NativeOptions {
        let width = self.canvas_size.width as f32 + 40.0;
        let height = self.canvas_size.height as f32 + 160.0;

        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(WINDOW_TITLE)
                .with_inner_size([width, height])
                .with_min_inner_size([480.0, 320.0]),
            ..Default::default()
        }
    }
}
