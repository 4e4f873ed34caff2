use super::phrase::Phrase;

/// One explicit line of the title.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    phrases: Vec<Phrase>,
    width: u32,
    height: u32,
}

impl Line {
    pub fn new(phrases: Vec<Phrase>) -> Self {
        let width = phrases.iter().map(Phrase::width).sum();
        let height = phrases.iter().map(Phrase::height).max().unwrap_or(0);
        Self {
            phrases,
            width,
            height,
        }
    }

    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    /// Sum of the phrase widths.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Tallest phrase.
    pub fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::bridge::text::{GlyphMetrics, TextExtent};
    use crate::engine::layouter::{Color, Emphasis};

    struct MockMetrics;
    impl GlyphMetrics for MockMetrics {
        fn measure(&self, text: &str) -> TextExtent {
            // 文字数 x 7、"g" を含むと下に伸びる
            let h = if text.contains('g') { 14 } else { 10 };
            TextExtent::new(text.len() as u32 * 7, if text.is_empty() { 0 } else { h })
        }
    }

    #[test]
    fn line_sums_widths_and_takes_max_height() {
        let m = MockMetrics;
        let line = Line::new(vec![
            Phrase::new("ab", Emphasis::Normal, Color::WHITE, &m),
            Phrase::new("gg", Emphasis::Strong, Color::CYAN, &m),
            Phrase::new("", Emphasis::Normal, Color::WHITE, &m),
        ]);
        assert_eq!(line.width(), 28);
        assert_eq!(line.height(), 14);
        assert_eq!(line.phrases().len(), 3);
    }

    #[test]
    fn line_of_empty_phrase_is_zero_sized() {
        let m = MockMetrics;
        let line = Line::new(vec![Phrase::new("", Emphasis::Normal, Color::WHITE, &m)]);
        assert_eq!((line.width(), line.height()), (0, 0));
    }
}
