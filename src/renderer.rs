use egui::{Align2, FontId, Painter, Rect, Shape, Stroke};

use crate::canvas::{CanvasItem, CanvasSurface};
use crate::config::TEXT_FONT_SIZE;

/// Paints the canvas display list with egui shapes.
#[derive(Debug, Clone)]
pub struct Renderer {
    text_font: FontId,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            text_font: FontId::proportional(TEXT_FONT_SIZE),
        }
    }
}

impl Renderer {
    /// Draws `canvas` with its top-left corner at `rect.min`, clipped to `rect`.
    pub fn render(&self, painter: &Painter, rect: Rect, canvas: &CanvasSurface) {
        let painter = painter.with_clip_rect(rect);
        let origin = rect.min.to_vec2();

        painter.rect_filled(rect, 0.0, canvas.background());

        for item in canvas.items() {
            match item {
                CanvasItem::Segment {
                    from,
                    to,
                    width,
                    color,
                    ..
                } => {
                    let (from, to) = (*from + origin, *to + origin);
                    // Round caps hide the joints between consecutive segments.
                    let radius = width / 2.0;
                    painter.extend([
                        Shape::line_segment([from, to], Stroke::new(*width, *color)),
                        Shape::circle_filled(from, radius, *color),
                        Shape::circle_filled(to, radius, *color),
                    ]);
                }
                CanvasItem::Text { pos, text, color } => {
                    painter.text(
                        *pos + origin,
                        Align2::LEFT_TOP,
                        text,
                        self.text_font.clone(),
                        *color,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::CanvasSize;
    use egui::{Color32, Pos2};

    #[test]
    fn test_render_segments_and_text() {
        let mut canvas = CanvasSurface::new(CanvasSize::DEFAULT, Color32::WHITE);
        canvas.push(CanvasItem::Segment {
            from: Pos2::new(1.0, 1.0),
            to: Pos2::new(30.0, 40.0),
            width: 4.0,
            color: Color32::RED,
            erase: false,
        });
        canvas.push(CanvasItem::Text {
            pos: Pos2::new(50.0, 50.0),
            text: "Hi".into(),
            color: Color32::BLUE,
        });

        let renderer = Renderer::default();
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            let painter = ctx.layer_painter(egui::LayerId::background());
            let rect = Rect::from_min_size(Pos2::new(10.0, 10.0), CanvasSize::DEFAULT.to_vec2());
            renderer.render(&painter, rect, &canvas);
        });
    }
}
