use image::RgbaImage;

use super::{GlyphMetrics, GlyphRasterizer, TextExtent, blend_coverage};
use crate::engine::layouter::Color;

/// Fallback glyph face.
///
/// This implementation does not rely on any font engine.
/// Every character advances by a fixed fraction of the font size and every
/// non-whitespace character is drawn as a solid box.
/// Intended for testing, bring-up, and environments without font support.
#[derive(Debug, Clone, Copy)]
pub struct FallbackFace {
    pub size_px: u32,
    pub avg_char_width_ratio: f32,
}

impl FallbackFace {
    pub fn new(size_px: u32) -> Self {
        Self {
            size_px: size_px.max(1),
            ..Self::default()
        }
    }

    fn advance(&self) -> u32 {
        ((self.size_px as f32 * self.avg_char_width_ratio).round() as u32).max(1)
    }
}

impl Default for FallbackFace {
    fn default() -> Self {
        Self {
            size_px: 16,
            avg_char_width_ratio: 0.5,
        }
    }
}

impl GlyphMetrics for FallbackFace {
    fn measure(&self, text: &str) -> TextExtent {
        let count = text.chars().count() as u32;
        if count == 0 {
            return TextExtent::ZERO;
        }
        // 空白だけのランはインクが無いので高さ 0
        let height = if text.chars().all(char::is_whitespace) {
            0
        } else {
            self.size_px
        };
        TextExtent::new(count * self.advance(), height)
    }
}

impl GlyphRasterizer for FallbackFace {
    fn draw(&self, canvas: &mut RgbaImage, x: i32, y: i32, text: &str, color: Color) {
        let advance = self.advance() as i64;
        // leave a one pixel gap between boxes so runs stay distinguishable
        let ink_w = (advance - 1).max(1);
        let mut pen = x as i64;
        for ch in text.chars() {
            if !ch.is_whitespace() {
                for dy in 0..self.size_px as i64 {
                    for dx in 0..ink_w {
                        blend_coverage(canvas, pen + dx, y as i64 + dy, color, 255);
                    }
                }
            }
            pen += advance;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_measure_simple() {
        let face = FallbackFace::new(10);
        let extent = face.measure("abc");
        assert_eq!(extent, TextExtent::new(15, 10));
    }

    #[test]
    fn fallback_measure_empty_and_blank() {
        let face = FallbackFace::new(10);
        assert_eq!(face.measure(""), TextExtent::ZERO);
        assert_eq!(face.measure("  "), TextExtent::new(10, 0));
    }

    #[test]
    fn fallback_draw_stays_inside_measured_box() {
        let face = FallbackFace::new(10);
        let mut canvas = RgbaImage::new(40, 20);
        face.draw(&mut canvas, 2, 3, "ab", Color::WHITE);

        let extent = face.measure("ab");
        for (x, y, px) in canvas.enumerate_pixels() {
            if px.0[3] != 0 {
                assert!((2..2 + extent.width).contains(&x), "x={x} outside run");
                assert!((3..3 + extent.height).contains(&y), "y={y} outside run");
            }
        }
        assert_eq!(canvas.get_pixel(2, 3).0, [255, 255, 255, 255]);
    }

    #[test]
    fn fallback_draw_clips_out_of_bounds() {
        let face = FallbackFace::new(10);
        let mut canvas = RgbaImage::new(4, 4);
        face.draw(&mut canvas, -3, -3, "xyz", Color::WHITE);
        assert_eq!(canvas.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }
}
