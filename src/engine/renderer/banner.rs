use image::RgbaImage;

use crate::engine::bridge::text::GlyphRasterizer;
use crate::engine::layouter::{Color, TextBlock};

/// Translucent band carrying the drawn title.
#[derive(Debug, Clone)]
pub struct Banner {
    pub image: RgbaImage,
    /// Top-left origin of every line, in drawing order.
    pub line_origins: Vec<(i32, i32)>,
}

impl Banner {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Allocates a `width x (block.height + 2 * padding_y)` band filled with
/// `fill` and draws every phrase of `block` onto it.
///
/// The block is centred vertically and each line horizontally on its own.
/// Positions come only from the extents stored in `block`.
pub fn rasterize_banner(
    width: u32,
    block: &TextBlock,
    padding_y: u32,
    fill: Color,
    face: &dyn GlyphRasterizer,
) -> Banner {
    let height = block.height() + 2 * padding_y;
    let mut image = RgbaImage::from_pixel(width, height, fill.to_rgba());

    let mut line_origins = Vec::with_capacity(block.lines().len());
    let mut cur_y = height as i32 / 2 - block.height() as i32 / 2;
    for line in block.lines() {
        let mut cur_x = width as i32 / 2 - line.width() as i32 / 2;
        line_origins.push((cur_x, cur_y));
        for phrase in line.phrases() {
            face.draw(&mut image, cur_x, cur_y, phrase.text(), phrase.color());
            cur_x += phrase.width() as i32;
        }
        // 改行: the advance after the last line is never read
        cur_y += (line.height() + block.line_spacing()) as i32;
    }

    log::debug!(
        target: "Banner::rasterize",
        "banner {}x{} lines={}",
        width,
        height,
        line_origins.len()
    );

    Banner {
        image,
        line_origins,
    }
}
