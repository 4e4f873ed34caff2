use crate::engine::bridge::text::GlyphMetrics;

use super::types::{Color, Emphasis, LayoutStyle};

/// A run of text sharing one color; the atomic drawable unit.
///
/// The extent is measured once at construction and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Phrase {
    text: String,
    emphasis: Emphasis,
    color: Color,
    width: u32,
    height: u32,
}

impl Phrase {
    pub fn new(
        text: impl Into<String>,
        emphasis: Emphasis,
        color: Color,
        metrics: &dyn GlyphMetrics,
    ) -> Self {
        let text = text.into();
        let extent = metrics.measure(&text);
        Self {
            text,
            emphasis,
            color,
            width: extent.width,
            height: extent.height,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn emphasis(&self) -> Emphasis {
        self.emphasis
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Splits one line on the emphasis delimiter.
///
/// The delimiter itself is dropped. Segment `i` is normal when `i` is even
/// and emphasised when odd, so an unmatched delimiter simply leaves the rest
/// of the line emphasised. Empty segments are kept as zero-width phrases.
pub fn segment_line(line: &str, style: &LayoutStyle, metrics: &dyn GlyphMetrics) -> Vec<Phrase> {
    line.split(style.delimiter)
        .enumerate()
        .map(|(i, part)| {
            let emphasis = Emphasis::from_index(i);
            Phrase::new(part, emphasis, style.color_for(emphasis), metrics)
        })
        .collect()
}
