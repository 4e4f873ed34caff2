use crate::engine::bridge::text::GlyphMetrics;

use super::line::Line;
use super::phrase::segment_line;
use super::types::LayoutStyle;

/// The fully measured multi-line title.
///
/// Built in one pass before anything is drawn; the banner is sized from
/// [`TextBlock::height`] and every draw position derives from the stored
/// extents.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    lines: Vec<Line>,
    line_spacing: u32,
    width: u32,
    height: u32,
}

impl TextBlock {
    /// Splits `text` into lines (`\n`, `\r\n` and a lone `\r` each end a
    /// line) and segments each one independently, so emphasis never carries
    /// over a line break.
    ///
    /// Every break produces a line, including empty ones, which keeps the
    /// line count at `1 + breaks`.
    pub fn layout(text: &str, style: &LayoutStyle, metrics: &dyn GlyphMetrics) -> Self {
        let lines = split_lines(text)
            .into_iter()
            .map(|raw| Line::new(segment_line(raw, style, metrics)))
            .collect();
        Self::from_lines(lines, style.line_spacing)
    }

    pub fn from_lines(lines: Vec<Line>, line_spacing: u32) -> Self {
        let width = lines.iter().map(Line::width).max().unwrap_or(0);
        let gaps = lines.len().saturating_sub(1) as u32;
        let height = lines.iter().map(Line::height).sum::<u32>() + gaps * line_spacing;
        log::debug!(
            target: "TextBlock::layout",
            "lines={} size={}x{}",
            lines.len(),
            width,
            height
        );
        Self {
            lines,
            line_spacing,
            width,
            height,
        }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line_spacing(&self) -> u32 {
        self.line_spacing
    }

    /// Widest line.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Sum of line heights plus one spacing between each pair of lines.
    pub fn height(&self) -> u32 {
        self.height
    }
}

/// 改行で分割する。`\r\n` は 1 つの改行として扱う
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, ch)) = chars.next() {
        match ch {
            '\n' => {}
            '\r' => {
                if chars.next_if(|&(_, c)| c == '\n').is_some() {
                    lines.push(&text[start..i]);
                    start = i + 2;
                    continue;
                }
            }
            _ => continue,
        }
        lines.push(&text[start..i]);
        start = i + 1;
    }
    lines.push(&text[start..]);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::bridge::text::FallbackFace;
    use crate::engine::layouter::Emphasis;

    #[test]
    fn two_lines_are_spaced_once() {
        let face = FallbackFace::new(10);
        let style = LayoutStyle::default();
        let block = TextBlock::layout("A\nB", &style, &face);

        assert_eq!(block.lines().len(), 2);
        assert_eq!(block.lines()[0].phrases()[0].text(), "A");
        assert_eq!(block.lines()[1].phrases()[0].text(), "B");
        let expected = block.lines()[0].height() + style.line_spacing + block.lines()[1].height();
        assert_eq!(block.height(), expected);
    }

    #[test]
    fn line_count_follows_break_count() {
        let face = FallbackFace::new(10);
        let style = LayoutStyle::default();
        for text in ["", "x", "x\n", "\n\n", "a\n\nb\nc", "$a\n$b", "a\rb\r\nc"] {
            let block = TextBlock::layout(text, &style, &face);
            let breaks = text.replace("\r\n", "\n").matches(['\n', '\r']).count();
            assert_eq!(block.lines().len(), 1 + breaks, "{text:?}");
        }
    }

    #[test]
    fn empty_line_is_single_empty_phrase() {
        let face = FallbackFace::new(10);
        let block = TextBlock::layout("a\n\nb", &LayoutStyle::default(), &face);
        let empty = &block.lines()[1];
        assert_eq!(empty.phrases().len(), 1);
        assert_eq!(empty.phrases()[0].text(), "");
        assert_eq!(empty.height(), 0);
    }

    #[test]
    fn emphasis_does_not_carry_across_lines() {
        let face = FallbackFace::new(10);
        let block = TextBlock::layout("a$b\nc", &LayoutStyle::default(), &face);
        assert_eq!(block.lines()[0].phrases()[1].emphasis(), Emphasis::Strong);
        assert_eq!(block.lines()[1].phrases()[0].emphasis(), Emphasis::Normal);
    }

    #[test]
    fn crlf_is_one_break() {
        let face = FallbackFace::new(10);
        let block = TextBlock::layout("ab\r\ncd", &LayoutStyle::default(), &face);
        assert_eq!(block.lines().len(), 2);
        assert_eq!(block.lines()[0].phrases()[0].text(), "ab");
    }

    #[test]
    fn lone_cr_is_a_break() {
        let face = FallbackFace::new(10);
        let block = TextBlock::layout("a\rb", &LayoutStyle::default(), &face);
        assert_eq!(block.lines().len(), 2);
        assert_eq!(block.lines()[0].phrases()[0].text(), "a");
        assert_eq!(block.lines()[1].phrases()[0].text(), "b");
    }

    #[test]
    fn mixed_breaks_split_like_text_lines() {
        assert_eq!(split_lines("a\r\n\rb\n\r\nc\r"), vec!["a", "", "b", "", "c", ""]);
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(split_lines("\r\r\n"), vec!["", "", ""]);
    }

    #[test]
    fn block_width_is_widest_line() {
        let face = FallbackFace::new(10);
        let block = TextBlock::layout("abc\nabcdef\nab", &LayoutStyle::default(), &face);
        assert_eq!(block.width(), 30);
    }
}
