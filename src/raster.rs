use std::path::Path;

use egui::{Color32, Pos2};
use image::{ImageFormat, Rgb, RgbImage};

use crate::document::CanvasSize;
use crate::error::{PaintError, PaintResult};

/// Off-screen RGB pixel grid mirroring the visible canvas.
///
/// Pixel `(x, y)` is centred on the integer coordinate `(x, y)`, so a pointer
/// position maps to the pixel it is nearest to.
#[derive(Clone)]
pub struct RasterBuffer {
    image: RgbImage,
}

impl RasterBuffer {
    /// Allocates a buffer filled with `background`.
    pub fn new(size: CanvasSize, background: Color32) -> Self {
        Self {
            image: RgbImage::from_pixel(size.width, size.height, to_rgb(background)),
        }
    }

    pub fn size(&self) -> CanvasSize {
        CanvasSize {
            width: self.image.width(),
            height: self.image.height(),
        }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Draws a capsule-shaped segment of the given width.
    ///
    /// Every pixel whose centre lies within `width / 2` of the segment is
    /// painted; anything outside the buffer is clipped.
    pub fn draw_line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        let radius = (width / 2.0).max(0.5);
        let pixel = to_rgb(color);

        let min_x = (from.x.min(to.x) - radius).floor().max(0.0);
        let min_y = (from.y.min(to.y) - radius).floor().max(0.0);
        let max_x = (from.x.max(to.x) + radius).ceil().min(self.image.width() as f32 - 1.0);
        let max_y = (from.y.max(to.y) + radius).ceil().min(self.image.height() as f32 - 1.0);
        if max_x < min_x || max_y < min_y {
            return;
        }

        for y in min_y as u32..=max_y as u32 {
            for x in min_x as u32..=max_x as u32 {
                let center = Pos2::new(x as f32, y as f32);
                if distance_sq_to_segment(center, from, to) <= radius * radius {
                    self.image.put_pixel(x, y, pixel);
                }
            }
        }
    }

    /// Returns the color of the pixel nearest to `pos`, or `None` outside the buffer.
    pub fn pixel_at(&self, pos: Pos2) -> Option<Color32> {
        let x = pos.x.round();
        let y = pos.y.round();
        if x < 0.0 || y < 0.0 {
            return None;
        }
        self.image
            .get_pixel_checked(x as u32, y as u32)
            .map(|Rgb([r, g, b])| Color32::from_rgb(*r, *g, *b))
    }

    /// Encodes the buffer as an RGB PNG at `path`.
    pub fn save_png(&self, path: &Path) -> PaintResult<()> {
        self.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| PaintError::Export {
                path: path.to_path_buf(),
                source,
            })
    }
}

impl std::fmt::Debug for RasterBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterBuffer")
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .finish()
    }
}

fn to_rgb(color: Color32) -> Rgb<u8> {
    Rgb([color.r(), color.g(), color.b()])
}

fn distance_sq_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq == 0.0 {
        return p.distance_sq(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance_sq(a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn buffer() -> RasterBuffer {
        RasterBuffer::new(CanvasSize::new(100, 100).unwrap(), Color32::WHITE)
    }

    #[test]
    fn test_new_buffer_is_filled_with_background() {
        let buffer = RasterBuffer::new(CanvasSize::new(120, 110).unwrap(), Color32::from_rgb(1, 2, 3));
        assert_eq!(buffer.size(), CanvasSize::new(120, 110).unwrap());
        assert!(buffer.image().pixels().all(|p| *p == Rgb([1, 2, 3])));
    }

    #[test]
    fn test_thin_horizontal_line_covers_one_row() {
        let mut buffer = buffer();
        buffer.draw_line(Pos2::new(10.0, 20.0), Pos2::new(30.0, 20.0), 1.0, Color32::RED);

        for x in 10..=30 {
            assert_eq!(buffer.pixel_at(Pos2::new(x as f32, 20.0)), Some(Color32::RED));
        }
        assert_eq!(buffer.pixel_at(Pos2::new(20.0, 19.0)), Some(Color32::WHITE));
        assert_eq!(buffer.pixel_at(Pos2::new(20.0, 21.0)), Some(Color32::WHITE));
        assert_eq!(buffer.pixel_at(Pos2::new(31.0, 20.0)), Some(Color32::WHITE));
    }

    #[test]
    fn test_wide_line_has_round_caps() {
        let mut buffer = buffer();
        buffer.draw_line(Pos2::new(50.0, 50.0), Pos2::new(50.0, 50.0), 9.0, Color32::BLUE);

        assert_eq!(buffer.pixel_at(Pos2::new(54.0, 50.0)), Some(Color32::BLUE));
        assert_eq!(buffer.pixel_at(Pos2::new(50.0, 46.0)), Some(Color32::BLUE));
        // Corner of the bounding square lies outside the disc.
        assert_eq!(buffer.pixel_at(Pos2::new(54.0, 54.0)), Some(Color32::WHITE));
    }

    #[test]
    fn test_diagonal_line_is_connected() {
        let mut buffer = buffer();
        buffer.draw_line(Pos2::new(0.0, 0.0), Pos2::new(40.0, 20.0), 1.0, Color32::BLACK);

        for x in 0..=40 {
            let painted = (0..100).any(|y| {
                buffer.pixel_at(Pos2::new(x as f32, y as f32)) == Some(Color32::BLACK)
            });
            assert!(painted, "column {x} has no painted pixel");
        }
    }

    #[test]
    fn test_lines_are_clipped_to_buffer() {
        let mut buffer = buffer();
        buffer.draw_line(Pos2::new(-50.0, 10.0), Pos2::new(150.0, 10.0), 3.0, Color32::GREEN);
        buffer.draw_line(Pos2::new(-50.0, -50.0), Pos2::new(-10.0, -10.0), 3.0, Color32::GREEN);

        assert_eq!(buffer.pixel_at(Pos2::new(0.0, 10.0)), Some(Color32::GREEN));
        assert_eq!(buffer.pixel_at(Pos2::new(99.0, 10.0)), Some(Color32::GREEN));
        assert_eq!(buffer.pixel_at(Pos2::new(0.0, 0.0)), Some(Color32::WHITE));
    }

    #[test]
    fn test_pixel_at_outside_buffer_is_none() {
        let buffer = buffer();
        assert_eq!(buffer.pixel_at(Pos2::new(-1.0, 5.0)), None);
        assert_eq!(buffer.pixel_at(Pos2::new(5.0, 100.0)), None);
        assert_eq!(buffer.pixel_at(Pos2::new(99.4, 99.4)), Some(Color32::WHITE));
    }
}
