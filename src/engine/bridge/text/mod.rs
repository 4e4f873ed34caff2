//! Glyph measurement and drawing abstraction.
//!
//! # Overview
//!
//! The layouter only needs to know how large a run of text will be, and the
//! banner rasterizer only needs to put that run onto a canvas. Both go through
//! the traits defined here so the layout pipeline stays independent from the
//! font engine that backs it.
//!
//! # Conventions
//!
//! Extents follow an ascender-anchored bounding box:
//!
//! - the origin is the top-left corner of the pen position
//! - the baseline sits `ascent` pixels below the origin
//! - `width` is the larger of the total advance and the rightmost ink edge
//! - `height` is the lowest ink edge measured from the origin
//!
//! An empty run measures `0 x 0`.
//!
//! # Data Flow
//!
//! ```text
//! Phrase::new → GlyphMetrics::measure → TextExtent
//! banner      → GlyphRasterizer::draw  → RgbaImage
//! ```

use image::RgbaImage;

use crate::engine::layouter::Color;

/* ============================
 * Measure Result
 * ============================ */

/// Rendered bounding box of a text run, in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextExtent {
    pub width: u32,
    pub height: u32,
}

impl TextExtent {
    pub const ZERO: TextExtent = TextExtent {
        width: 0,
        height: 0,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/* ============================
 * Traits
 * ============================ */

/// A loaded font at a fixed pixel size that can measure text runs.
pub trait GlyphMetrics {
    fn measure(&self, text: &str) -> TextExtent;
}

/// A [`GlyphMetrics`] implementation that can also draw the runs it measures.
///
/// `draw` must place glyphs with the same pen arithmetic as `measure`, so a
/// run drawn at `(x, y)` occupies at most `(x, y)..(x + width, y + height)`.
pub trait GlyphRasterizer: GlyphMetrics {
    fn draw(&self, canvas: &mut RgbaImage, x: i32, y: i32, text: &str, color: Color);
}

impl<T: GlyphMetrics + ?Sized> GlyphMetrics for &T {
    fn measure(&self, text: &str) -> TextExtent {
        (**self).measure(text)
    }
}

impl<T: GlyphRasterizer + ?Sized> GlyphRasterizer for &T {
    fn draw(&self, canvas: &mut RgbaImage, x: i32, y: i32, text: &str, color: Color) {
        (**self).draw(canvas, x, y, text, color)
    }
}

/// Lerps every channel of the pixel at `(x, y)` toward `color` by `coverage`.
///
/// Out-of-bounds coordinates are ignored.
pub(crate) fn blend_coverage(canvas: &mut RgbaImage, x: i64, y: i64, color: Color, coverage: u8) {
    if coverage == 0 || x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= canvas.width() || y >= canvas.height() {
        return;
    }

    let ink = color.to_array();
    let px = canvas.get_pixel_mut(x, y);
    let c = coverage as u32;
    for (dst, src) in px.0.iter_mut().zip(ink) {
        *dst = ((*dst as u32 * (255 - c) + src as u32 * c + 127) / 255) as u8;
    }
}

/* ============================
 * Fallback
 * ============================ */

pub mod fallback;
pub use fallback::FallbackFace;
