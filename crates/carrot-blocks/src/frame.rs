#![forbid(unsafe_code)]

//! ASCII frames.
//!
//! Both frame blocks draw the same shape: `-` along the top and bottom rows,
//! `|` down the left and right columns (corners are `-`), and the child
//! inside, separated from the border by a margin.
//!
//! ```text
//! ----------
//! |        |   margin_y = 1
//! |  text  |   margin_x = 2
//! |        |
//! ----------
//! ```
//!
//! [`FrameBlock`] takes its margins from the constructor, [`FramedBlock`]
//! from the `margin-x` / `margin-y` attributes of element `framed-block`.

use carrot_core::{Extent, TargetInfo};
use carrot_render::{GlyphStyle, Result, Surface, View};
use carrot_style::{Style, StyleQuery, attr, element};

use crate::Block;

/// Horizontal and vertical space between border and child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Margins {
    /// Columns on each side.
    pub x: usize,
    /// Rows above and below.
    pub y: usize,
}

impl Margins {
    /// Create margins.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Outer extent of a frame around a child of `inner` size.
    #[must_use]
    pub const fn outer(self, inner: Extent) -> Extent {
        inner.grow(2 * self.x + 2, 2 * self.y + 2)
    }
}

fn render_framed(
    child: &dyn Block,
    margins: Margins,
    element_name: &str,
    surface: &mut dyn Surface,
    style: &Style,
) -> Result<()> {
    let border = GlyphStyle::resolve(style, &StyleQuery::element(element_name), None)?;
    let inner = child.extent(surface.target(), style)?;
    let outer = margins.outer(inner);
    let (last_row, last_col) = (outer.height - 1, outer.width - 1);

    for col in 0..outer.width {
        surface.set_glyph(border.glyph('-'), 0, col);
        surface.set_glyph(border.glyph('-'), last_row, col);
    }
    for row in 1..last_row {
        surface.set_glyph(border.glyph('|'), row, 0);
        surface.set_glyph(border.glyph('|'), row, last_col);
    }

    child.render(&mut View::new(surface, 1 + margins.y, 1 + margins.x), style)
}

/// A frame with fixed margins.
#[derive(Debug, Clone)]
pub struct FrameBlock<B> {
    child: B,
    margins: Margins,
}

impl<B: Block> FrameBlock<B> {
    /// Frame `child` with `margin_x` columns and `margin_y` rows of padding.
    pub const fn new(child: B, margin_x: usize, margin_y: usize) -> Self {
        Self {
            child,
            margins: Margins::new(margin_x, margin_y),
        }
    }

    /// The configured margins.
    pub const fn margins(&self) -> Margins {
        self.margins
    }
}

impl<B: Block> Block for FrameBlock<B> {
    fn render(&self, surface: &mut dyn Surface, style: &Style) -> Result<()> {
        render_framed(&self.child, self.margins, element::FRAME, surface, style)
    }

    fn extent(&self, target: &TargetInfo, style: &Style) -> Result<Extent> {
        Ok(self.margins.outer(self.child.extent(target, style)?))
    }
}

/// A frame whose margins come from the style.
#[derive(Debug, Clone)]
pub struct FramedBlock<B> {
    child: B,
}

impl<B: Block> FramedBlock<B> {
    /// Frame `child`.
    pub const fn new(child: B) -> Self {
        Self { child }
    }

    /// Margins resolved from `style`; unset margins are 0.
    ///
    /// # Errors
    ///
    /// Fails if a margin is not a non-negative integer.
    pub fn margins(style: &Style) -> Result<Margins> {
        let query = StyleQuery::element(element::FRAMED_BLOCK);
        Ok(Margins::new(
            style.size(&query, attr::MARGIN_X)?.unwrap_or(0),
            style.size(&query, attr::MARGIN_Y)?.unwrap_or(0),
        ))
    }
}

impl<B: Block> Block for FramedBlock<B> {
    fn render(&self, surface: &mut dyn Surface, style: &Style) -> Result<()> {
        let margins = Self::margins(style)?;
        render_framed(&self.child, margins, element::FRAMED_BLOCK, surface, style)
    }

    fn extent(&self, target: &TargetInfo, style: &Style) -> Result<Extent> {
        Ok(Self::margins(style)?.outer(self.child.extent(target, style)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextBlock;
    use crate::test_support::{assert_within_extent, canvas_of, draw};
    use carrot_style::{Color, StyleRule};

    #[test]
    fn tight_frame() {
        let block = FrameBlock::new(TextBlock::new("ab"), 0, 0);
        assert_eq!(
            block.extent(&TargetInfo::file(), &Style::new()).unwrap(),
            Extent::new(4, 3)
        );
        assert_eq!(draw(&block, &Style::new()), "----\n|ab|\n----\n");
    }

    #[test]
    fn frame_with_margins() {
        let block = FrameBlock::new(TextBlock::new("x"), 2, 1);
        assert_eq!(block.margins(), Margins::new(2, 1));
        assert_eq!(
            block.extent(&TargetInfo::file(), &Style::new()).unwrap(),
            Extent::new(7, 5)
        );
        assert_eq!(
            draw(&block, &Style::new()),
            "-------\n|     |\n|  x  |\n|     |\n-------\n"
        );
    }

    #[test]
    fn frame_around_empty_child() {
        let block = FrameBlock::new(TextBlock::new(""), 0, 0);
        assert_eq!(
            block.extent(&TargetInfo::file(), &Style::new()).unwrap(),
            Extent::new(2, 3)
        );
        assert_eq!(draw(&block, &Style::new()), "--\n||\n--\n");
    }

    #[test]
    fn framed_block_reads_margins_from_style() {
        let style = Style::new().rule(
            StyleRule::new()
                .element(element::FRAMED_BLOCK)
                .set(attr::MARGIN_X, 1_i64)
                .set(attr::MARGIN_Y, 0_i64),
        );
        let block = FramedBlock::new(TextBlock::new("x"));
        assert_eq!(
            block.extent(&TargetInfo::file(), &style).unwrap(),
            Extent::new(5, 3)
        );
        assert_eq!(draw(&block, &style), "-----\n| x |\n-----\n");
        assert_within_extent(&block, &style);
    }

    #[test]
    fn framed_block_defaults_to_no_margin() {
        let block = FramedBlock::new(TextBlock::new("x"));
        assert_eq!(draw(&block, &Style::with_defaults()), "---\n|x|\n---\n");
    }

    #[test]
    fn framed_block_matches_equivalent_frame() {
        let style = Style::new().rule(
            StyleRule::new()
                .element(element::FRAMED_BLOCK)
                .set(attr::MARGIN_X, 3_i64)
                .set(attr::MARGIN_Y, 2_i64),
        );
        let framed = FramedBlock::new(TextBlock::new("a\nbc"));
        let fixed = FrameBlock::new(TextBlock::new("a\nbc"), 3, 2);
        assert_eq!(draw(&framed, &style), draw(&fixed, &style));
    }

    #[test]
    fn bad_margin_type_is_an_error() {
        let style = Style::new().rule(StyleRule::new().set(attr::MARGIN_X, "wide"));
        let block = FramedBlock::new(TextBlock::new("x"));
        assert!(block.extent(&TargetInfo::file(), &style).is_err());
    }

    #[test]
    fn border_uses_frame_style() {
        let style = Style::new()
            .rule(
                StyleRule::new()
                    .element(element::FRAME)
                    .set(attr::COLOR, Color::rgb(0, 0, 255)),
            )
            .rule(StyleRule::new());
        let canvas = canvas_of(&FrameBlock::new(TextBlock::new("x"), 0, 0), &style);
        assert_eq!(canvas.glyph(0, 0).unwrap().fg, Color::rgb(0, 0, 255));
        assert_eq!(canvas.glyph(1, 1).unwrap().fg, Color::Default);
    }

    mod property {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn render_stays_within_extent(
                text in "[a-z]{0,6}(\n[a-z]{0,6}){0,2}",
                mx in 0usize..4,
                my in 0usize..3,
            ) {
                assert_within_extent(&FrameBlock::new(TextBlock::new(text), mx, my), &Style::new());
            }
        }
    }
}
