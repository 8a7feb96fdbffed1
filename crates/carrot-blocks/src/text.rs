#![forbid(unsafe_code)]

//! Text block.
//!
//! Text is split on `\n` (a trailing `\r` is dropped from each line) and
//! every line is segmented into extended grapheme clusters, one per cell.
//! Each line starts at column 0 of its own row. Tabs advance to the next
//! multiple of the target's tab width.

use carrot_core::{Extent, TargetInfo};
use carrot_render::{GlyphStyle, Result, Surface};
use carrot_style::{Style, StyleQuery, element};
use unicode_segmentation::UnicodeSegmentation;

use crate::Block;

/// A block of literal text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBlock {
    text: String,
    id: Option<String>,
    tags: Vec<String>,
}

impl TextBlock {
    /// Create a text block.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            id: None,
            tags: Vec::new(),
        }
    }

    /// Set the id used for style matching.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a tag used for style matching.
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// The text content.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    fn query(&self) -> StyleQuery<'_> {
        StyleQuery::element(element::TEXT)
            .with_id(self.id.as_deref())
            .with_tags(&self.tags)
    }

    fn lines(&self) -> impl Iterator<Item = &str> {
        self.text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
    }
}

/// Walk one line cell by cell, calling `place(col, grapheme)` for each
/// occupied cell. Returns the line width.
fn layout_line(line: &str, tab_width: usize, mut place: impl FnMut(usize, &str)) -> usize {
    let tab_stop = tab_width.max(1);
    let mut col = 0;
    for grapheme in line.graphemes(true) {
        if grapheme == "\t" {
            let next = (col / tab_stop + 1) * tab_stop;
            for c in col..next {
                place(c, " ");
            }
            col = next;
        } else {
            place(col, grapheme);
            col += 1;
        }
    }
    col
}

impl Block for TextBlock {
    fn render(&self, surface: &mut dyn Surface, style: &Style) -> Result<()> {
        let glyph_style = GlyphStyle::resolve(style, &self.query(), None)?;
        let tab_width = surface.target().tab_width;

        for (row, line) in self.lines().enumerate() {
            layout_line(line, tab_width, |col, grapheme| {
                surface.set_glyph(glyph_style.glyph(grapheme), row, col);
            });
        }
        Ok(())
    }

    fn extent(&self, target: &TargetInfo, _style: &Style) -> Result<Extent> {
        let mut extent = Extent::ZERO;
        for line in self.lines() {
            let width = layout_line(line, target.tab_width, |_, _| {});
            extent.width = extent.width.max(width);
            extent.height += 1;
        }
        Ok(extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_within_extent, canvas_of, draw};
    use carrot_render::GlyphFlags;
    use carrot_style::{Color, StyleRule, attr};

    fn extent_of(text: &str) -> Extent {
        TextBlock::new(text)
            .extent(&TargetInfo::file(), &Style::new())
            .unwrap()
    }

    #[test]
    fn single_line_extent() {
        assert_eq!(extent_of("Hello, world!"), Extent::new(13, 1));
    }

    #[test]
    fn multi_line_extent_uses_widest_line() {
        assert_eq!(extent_of("a\nlonger\nab"), Extent::new(6, 3));
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(extent_of(""), Extent::new(0, 1));
        assert_eq!(draw(&TextBlock::new(""), &Style::new()), "");
    }

    #[test]
    fn trailing_newline_adds_a_row() {
        assert_eq!(extent_of("a\n"), Extent::new(1, 2));
    }

    #[test]
    fn crlf_is_one_line_break() {
        assert_eq!(extent_of("ab\r\ncd"), Extent::new(2, 2));
        assert_eq!(draw(&TextBlock::new("ab\r\ncd"), &Style::new()), "ab\ncd\n");
    }

    #[test]
    fn each_line_starts_at_column_zero() {
        let out = draw(&TextBlock::new("abc\nd\nef"), &Style::new());
        assert_eq!(out, "abc\nd\nef\n");
    }

    #[test]
    fn graphemes_occupy_one_cell_each() {
        // e + combining acute, a flag (two regional indicators), a family emoji.
        let text = "e\u{301}\u{1F1EB}\u{1F1F7}\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
        assert_eq!(extent_of(text), Extent::new(3, 1));

        let canvas = canvas_of(&TextBlock::new(text), &Style::new());
        assert_eq!(canvas.cols(), 3);
        assert_eq!(canvas.glyph(0, 0).unwrap().content, "e\u{301}");
        assert_eq!(canvas.glyph(0, 1).unwrap().content, "\u{1F1EB}\u{1F1F7}");
    }

    #[test]
    fn tabs_advance_to_next_stop() {
        assert_eq!(extent_of("\tx"), Extent::new(5, 1));
        assert_eq!(extent_of("ab\tx"), Extent::new(5, 1));
        assert_eq!(extent_of("abcd\tx"), Extent::new(9, 1));
        assert_eq!(draw(&TextBlock::new("a\tb"), &Style::new()), "a   b\n");

        let wide = TargetInfo::file().with_tab_width(8);
        let extent = TextBlock::new("a\tb").extent(&wide, &Style::new()).unwrap();
        assert_eq!(extent, Extent::new(9, 1));
    }

    #[test]
    fn zero_tab_width_advances_one_column() {
        let target = TargetInfo::file().with_tab_width(0);
        let block = TextBlock::new("a\tb");
        assert_eq!(
            block.extent(&target, &Style::new()).unwrap(),
            Extent::new(3, 1)
        );

        let mut canvas = carrot_render::Canvas::new(target);
        block.render(&mut canvas, &Style::new()).unwrap();
        assert_eq!(canvas.serialize(true).unwrap(), "a b\n");
        assert_eq!(extent_of("\t\t").width, 8);
    }

    #[test]
    fn glyphs_carry_resolved_style() {
        let style = Style::new()
            .rule(
                StyleRule::new()
                    .element(element::TEXT)
                    .id("title")
                    .set(attr::COLOR, Color::rgb(255, 0, 0)),
            )
            .rule(StyleRule::new().tag("loud").set(attr::BOLD, true));

        let title = canvas_of(&TextBlock::new("t").id("title"), &style);
        assert_eq!(title.glyph(0, 0).unwrap().fg, Color::rgb(255, 0, 0));

        let loud = canvas_of(&TextBlock::new("l").tag("loud"), &style);
        assert_eq!(loud.glyph(0, 0).unwrap().flags, GlyphFlags::BOLD);

        let plain = canvas_of(&TextBlock::new("p"), &style);
        assert_eq!(plain.glyph(0, 0).unwrap().fg, Color::Default);
    }

    #[test]
    fn style_type_errors_abort_render() {
        let style = Style::new().rule(StyleRule::new().set(attr::BOLD, 1_i64));
        let mut canvas = carrot_render::Canvas::new(TargetInfo::file());
        assert!(TextBlock::new("x").render(&mut canvas, &style).is_err());
    }

    mod property {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn extent_is_pure(text in "[a-z \t\n]{0,40}") {
                let block = TextBlock::new(text);
                let style = Style::with_defaults();
                let first = block.extent(&TargetInfo::file(), &style).unwrap();
                prop_assert_eq!(block.extent(&TargetInfo::file(), &style).unwrap(), first);
            }

            #[test]
            fn render_stays_within_extent(text in "\\PC{0,30}(\n\\PC{0,30}){0,3}") {
                assert_within_extent(&TextBlock::new(text), &Style::with_defaults());
            }
        }
    }
}
