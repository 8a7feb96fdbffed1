#![forbid(unsafe_code)]

//! Glyphs: the content of one canvas cell.
//!
//! A [`Glyph`] holds one grapheme cluster plus its presentation: foreground
//! and background [`Color`] and [`GlyphFlags`]. Glyphs are plain values,
//! cloned into the canvas on every write.
//!
//! [`GlyphStyle`] bridges the style engine and the canvas: leaf blocks
//! resolve one per element and stamp it onto every glyph they write.

use carrot_style::{Color, Style, StyleError, StyleQuery, attr};

bitflags::bitflags! {
    /// Glyph formatting flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct GlyphFlags: u8 {
        /// Bold / increased intensity.
        const BOLD = 0b0000_0001;
    }
}

/// Content of one monospace cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// One grapheme cluster.
    pub content: String,
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    /// Formatting.
    pub flags: GlyphFlags,
}

impl Glyph {
    /// A glyph with default colors and no formatting.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            fg: Color::Default,
            bg: Color::Default,
            flags: GlyphFlags::empty(),
        }
    }

    /// A glyph holding a single character.
    #[must_use]
    pub fn from_char(c: char) -> Self {
        Self::new(c)
    }

    /// The glyph new canvas cells start with: a plain space.
    #[must_use]
    pub fn blank() -> Self {
        Self::new(' ')
    }

    /// Set the foreground color.
    #[must_use]
    pub fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    /// Set the formatting flags.
    #[must_use]
    pub fn with_flags(mut self, flags: GlyphFlags) -> Self {
        self.flags = flags;
        self
    }

    /// True if the glyph is bold.
    #[inline]
    #[must_use]
    pub fn is_bold(&self) -> bool {
        self.flags.contains(GlyphFlags::BOLD)
    }

    /// True if the glyph shows nothing: a space on the default background.
    ///
    /// Foreground color and bold do not show on a space, so they are ignored.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.content == " " && self.bg.is_default()
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::blank()
    }
}

/// Presentation resolved from a style, ready to stamp onto content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphStyle {
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    /// Formatting.
    pub flags: GlyphFlags,
}

impl GlyphStyle {
    /// Resolve `color`, `background-color` and `bold` for `query`.
    ///
    /// With a `prefix`, `{prefix}.color` and friends are tried first and the
    /// plain attribute is the fallback. Unset values mean default colors and
    /// no bold.
    ///
    /// # Errors
    ///
    /// Fails if a resolved attribute has the wrong type.
    pub fn resolve(
        style: &Style,
        query: &StyleQuery<'_>,
        prefix: Option<&str>,
    ) -> Result<Self, StyleError> {
        let fg: Option<Color> = lookup(style, query, prefix, attr::COLOR)?;
        let bg: Option<Color> = lookup(style, query, prefix, attr::BACKGROUND_COLOR)?;
        let bold: Option<bool> = lookup(style, query, prefix, attr::BOLD)?;

        let mut flags = GlyphFlags::empty();
        flags.set(GlyphFlags::BOLD, bold.unwrap_or(false));

        Ok(Self {
            fg: fg.unwrap_or_default(),
            bg: bg.unwrap_or_default(),
            flags,
        })
    }

    /// Build a glyph with this presentation.
    #[must_use]
    pub fn glyph(&self, content: impl Into<String>) -> Glyph {
        Glyph {
            content: content.into(),
            fg: self.fg.clone(),
            bg: self.bg.clone(),
            flags: self.flags,
        }
    }
}

fn lookup<T: carrot_style::FromAttribute>(
    style: &Style,
    query: &StyleQuery<'_>,
    prefix: Option<&str>,
    name: &str,
) -> Result<Option<T>, StyleError> {
    if let Some(prefix) = prefix {
        let prefixed = format!("{prefix}.{name}");
        if let Some(value) = style.get(query, &prefixed)? {
            return Ok(Some(value));
        }
    }
    style.get(query, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use carrot_style::StyleRule;

    #[test]
    fn blank_is_plain_space() {
        let blank = Glyph::blank();
        assert_eq!(blank.content, " ");
        assert_eq!(blank.fg, Color::Default);
        assert_eq!(blank.bg, Color::Default);
        assert!(!blank.is_bold());
        assert!(blank.is_blank());
        assert_eq!(Glyph::default(), blank);
    }

    #[test]
    fn colored_background_is_not_blank() {
        assert!(!Glyph::blank().with_bg(Color::rgb(0, 0, 255)).is_blank());
        assert!(Glyph::blank().with_fg(Color::rgb(0, 0, 255)).is_blank());
        assert!(!Glyph::from_char('x').is_blank());
    }

    #[test]
    fn bold_flag_round_trips() {
        let glyph = Glyph::from_char('x').with_flags(GlyphFlags::BOLD);
        assert!(glyph.is_bold());
    }

    #[test]
    fn resolve_reads_plain_attributes() {
        let style = Style::new().rule(
            StyleRule::new()
                .element("text")
                .set(attr::COLOR, Color::rgb(255, 0, 0))
                .set(attr::BOLD, true),
        );
        let resolved = GlyphStyle::resolve(&style, &StyleQuery::element("text"), None).unwrap();
        assert_eq!(resolved.fg, Color::rgb(255, 0, 0));
        assert_eq!(resolved.bg, Color::Default);
        assert_eq!(resolved.flags, GlyphFlags::BOLD);
    }

    #[test]
    fn resolve_prefers_prefixed_attributes() {
        let style = Style::new().rule(
            StyleRule::new()
                .set("caret.color", Color::rgb(0, 255, 0))
                .set(attr::COLOR, Color::rgb(255, 0, 0))
                .set(attr::BOLD, true),
        );
        let resolved =
            GlyphStyle::resolve(&style, &StyleQuery::element("caret-underline"), Some("caret"))
                .unwrap();
        assert_eq!(resolved.fg, Color::rgb(0, 255, 0));
        // No caret.bold: falls back to bold.
        assert_eq!(resolved.flags, GlyphFlags::BOLD);
    }

    #[test]
    fn resolve_with_empty_style_is_plain() {
        let resolved = GlyphStyle::resolve(&Style::new(), &StyleQuery::element("text"), None);
        assert_eq!(resolved, Ok(GlyphStyle::default()));
    }

    #[test]
    fn resolve_propagates_type_mismatch() {
        let style = Style::new().rule(StyleRule::new().set(attr::COLOR, "red"));
        let err = GlyphStyle::resolve(&style, &StyleQuery::element("text"), None).unwrap_err();
        assert!(matches!(err, StyleError::TypeMismatch { expected: "color", .. }));
    }

    #[test]
    fn glyph_stamps_presentation() {
        let style = GlyphStyle {
            fg: Color::rgb(1, 2, 3),
            bg: Color::Default,
            flags: GlyphFlags::BOLD,
        };
        let glyph = style.glyph("é");
        assert_eq!(glyph.content, "é");
        assert_eq!(glyph.fg, Color::rgb(1, 2, 3));
        assert!(glyph.is_bold());
    }
}
