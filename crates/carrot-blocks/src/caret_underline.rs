#![forbid(unsafe_code)]

//! Caret underlines, as used to point at a column in a source excerpt.
//!
//! ```text
//! let x = 1 +;
//! ~~~~~~~~~~^~
//! ```

use carrot_core::{Extent, TargetInfo};
use carrot_render::{GlyphStyle, Result, Surface};
use carrot_style::{Style, StyleQuery, element};

use crate::Block;

/// Attribute prefix for the caret glyph (`caret.color`, `caret.bold`, ...).
pub const CARET_PREFIX: &str = "caret";

const TILDE: char = '~';
const CARET: char = '^';

/// Renders its child and one extra row beneath it: `~` under every column
/// and `^` under column `position`.
///
/// A position at or past the child's width draws no caret.
#[derive(Debug, Clone)]
pub struct CaretUnderlineBlock<B> {
    child: B,
    position: usize,
}

impl<B: Block> CaretUnderlineBlock<B> {
    /// Underline `child` with a caret at column `position`.
    pub const fn new(child: B, position: usize) -> Self {
        Self { child, position }
    }

    /// Caret column.
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl<B: Block> Block for CaretUnderlineBlock<B> {
    fn render(&self, surface: &mut dyn Surface, style: &Style) -> Result<()> {
        let query = StyleQuery::element(element::CARET_UNDERLINE);
        let tilde = GlyphStyle::resolve(style, &query, None)?;
        let caret = GlyphStyle::resolve(style, &query, Some(CARET_PREFIX))?;

        let inner = self.child.extent(surface.target(), style)?;
        self.child.render(surface, style)?;

        for col in 0..inner.width {
            let glyph = if col == self.position {
                caret.glyph(CARET)
            } else {
                tilde.glyph(TILDE)
            };
            surface.set_glyph(glyph, inner.height, col);
        }
        Ok(())
    }

    fn extent(&self, target: &TargetInfo, style: &Style) -> Result<Extent> {
        Ok(self.child.extent(target, style)?.grow(0, 1))
    }
}
