#![forbid(unsafe_code)]

//! Marker block: a one-row symbol whose text comes from the style.

use carrot_core::{Extent, TargetInfo};
use carrot_render::{GlyphStyle, Result, Surface};
use carrot_style::{Style, StyleQuery};
use unicode_segmentation::UnicodeSegmentation;

use crate::Block;

/// Draws the string attribute `attribute` of element `element`, or
/// `fallback` when the style does not set it.
///
/// Glyphs are styled with `attribute` as prefix, so a marker reading
/// `symbol` is colored by `symbol.color` (falling back to `color`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerBlock {
    element: String,
    attribute: String,
    fallback: String,
}

impl MarkerBlock {
    /// Create a marker.
    #[must_use]
    pub fn new(
        element: impl Into<String>,
        attribute: impl Into<String>,
        fallback: impl Into<String>,
    ) -> Self {
        Self {
            element: element.into(),
            attribute: attribute.into(),
            fallback: fallback.into(),
        }
    }

    /// The text this marker shows under `style`.
    ///
    /// # Errors
    ///
    /// Fails if the attribute is set to a non-string.
    pub fn content(&self, style: &Style) -> Result<String> {
        let query = StyleQuery::element(&self.element);
        Ok(style
            .text(&query, &self.attribute)?
            .unwrap_or_else(|| self.fallback.clone()))
    }
}

impl Block for MarkerBlock {
    fn render(&self, surface: &mut dyn Surface, style: &Style) -> Result<()> {
        let query = StyleQuery::element(&self.element);
        let glyph_style = GlyphStyle::resolve(style, &query, Some(&self.attribute))?;
        let content = self.content(style)?;

        for (col, grapheme) in content.graphemes(true).enumerate() {
            surface.set_glyph(glyph_style.glyph(grapheme), 0, col);
        }
        Ok(())
    }

    fn extent(&self, _target: &TargetInfo, style: &Style) -> Result<Extent> {
        let content = self.content(style)?;
        Ok(Extent::new(content.graphemes(true).count(), 1))
    }
}
