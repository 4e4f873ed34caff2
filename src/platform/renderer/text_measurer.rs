use fontdue::Font as FontDue;
use image::RgbaImage;

use crate::engine::bridge::text::{GlyphMetrics, GlyphRasterizer, TextExtent, blend_coverage};
use crate::engine::layouter::Color;

/// fontdue で計測・描画するフォント
///
/// Measuring and drawing share [`FontdueFace::walk`], so a drawn run never
/// leaves the box reported by `measure`.
pub struct FontdueFace {
    font: FontDue,
    size_px: f32,
    /// Baseline offset from the top of a run.
    ascent: i32,
}

/// One glyph placed by [`FontdueFace::walk`], relative to the run origin.
struct PlacedGlyph {
    ch: char,
    left: i32,
    top: i32,
    width: u32,
    height: u32,
}

impl FontdueFace {
    /// バイト列からフォントを読み込んで初期化
    pub fn from_bytes(bytes: Vec<u8>, size_px: u32) -> Result<Self, &'static str> {
        let font = FontDue::from_bytes(bytes, fontdue::FontSettings::default())?;
        let size_px = size_px.max(1) as f32;
        let ascent = font
            .horizontal_line_metrics(size_px)
            .map(|m| m.ascent)
            .unwrap_or(size_px * 0.8)
            .round() as i32;
        Ok(Self {
            font,
            size_px,
            ascent,
        })
    }

    /// Lays the glyphs of `text` out on a single pen line.
    ///
    /// Returns the placed glyphs and the final pen advance.
    fn walk(&self, text: &str) -> (Vec<PlacedGlyph>, f32) {
        let mut glyphs = Vec::with_capacity(text.len());
        let mut pen = 0.0f32;
        let mut prev: Option<char> = None;

        for ch in text.chars() {
            if let Some(p) = prev {
                pen += self.font.horizontal_kern(p, ch, self.size_px).unwrap_or(0.0);
            }
            let m = self.font.metrics(ch, self.size_px);
            glyphs.push(PlacedGlyph {
                ch,
                left: pen.round() as i32 + m.xmin,
                top: self.ascent - (m.ymin + m.height as i32),
                width: m.width as u32,
                height: m.height as u32,
            });
            pen += m.advance_width;
            prev = Some(ch);
        }
        (glyphs, pen)
    }
}

impl GlyphMetrics for FontdueFace {
    fn measure(&self, text: &str) -> TextExtent {
        if text.is_empty() {
            return TextExtent::ZERO;
        }

        let (glyphs, advance) = self.walk(text);
        let mut right = advance.ceil() as i32;
        let mut bottom = 0i32;
        for g in glyphs.iter().filter(|g| g.width > 0 && g.height > 0) {
            right = right.max(g.left + g.width as i32);
            bottom = bottom.max(g.top + g.height as i32);
        }
        TextExtent::new(right.max(0) as u32, bottom.max(0) as u32)
    }
}

impl GlyphRasterizer for FontdueFace {
    fn draw(&self, canvas: &mut RgbaImage, x: i32, y: i32, text: &str, color: Color) {
        let (glyphs, _) = self.walk(text);
        for g in glyphs.iter().filter(|g| g.width > 0 && g.height > 0) {
            let (_, bitmap) = self.font.rasterize(g.ch, self.size_px);
            let gx = x as i64 + g.left as i64;
            let gy = y as i64 + g.top as i64;
            for row in 0..g.height as usize {
                for col in 0..g.width as usize {
                    let coverage = bitmap[row * g.width as usize + col];
                    blend_coverage(canvas, gx + col as i64, gy + row as i64, color, coverage);
                }
            }
        }
    }
}

impl std::fmt::Debug for FontdueFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontdueFace")
            .field("size_px", &self.size_px)
            .field("ascent", &self.ascent)
            .finish_non_exhaustive()
    }
}
