#![forbid(unsafe_code)]

//! ANSI SGR escape sequence generation.
//!
//! Colors are snapped onto a [`ColorMap`] and the palette index becomes a
//! 16-color SGR code. Every state change is emitted as the full triple
//! `ESC[{fg};{bg}m ESC[{fmt}m`; a full reset `ESC[0m` is reserved for the
//! start and end of a document.
//!
//! # Code reference
//!
//! | Input | Code |
//! |-------|------|
//! | default foreground | 39 |
//! | default background | 49 |
//! | foreground, palette index `i < 8` | `30 + i` |
//! | foreground, palette index `i >= 8` | `90 + (i - 8)` |
//! | background, palette index `i < 8` | `40 + i` |
//! | background, palette index `i >= 8` | `100 + (i - 8)` |
//! | bold | 1 |
//! | not bold | 22 |

use std::fmt;
use std::io::{self, Write};

use carrot_style::{ANSI_COLOR_COUNT, Color, ColorError, ColorMap};

use crate::glyph::{Glyph, GlyphFlags};

/// SGR reset: `CSI 0 m`
pub const SGR_RESET: &[u8] = b"\x1b[0m";

/// Default foreground color code.
pub const FG_DEFAULT: usize = 39;
/// Default background color code.
pub const BG_DEFAULT: usize = 49;
/// Bold on.
pub const BOLD_ON: usize = 1;
/// Bold off (normal intensity).
pub const BOLD_OFF: usize = 22;

/// Palette indices below this are base colors; the rest are bright.
const BASE_COLOR_COUNT: usize = 8;

const FG_BASE: usize = 30;
const FG_BRIGHT: usize = 90;
const BG_BASE: usize = 40;
const BG_BRIGHT: usize = 100;

/// Write SGR reset sequence.
#[inline]
pub fn sgr_reset<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(SGR_RESET)
}

fn palette_code(index: usize, base: usize, bright: usize) -> Result<usize, ColorError> {
    match index {
        i if i < BASE_COLOR_COUNT => Ok(base + i),
        i if i < ANSI_COLOR_COUNT => Ok(bright + (i - BASE_COLOR_COUNT)),
        i => Err(ColorError::NoAnsiCode(i)),
    }
}

/// SGR code for a foreground color.
///
/// # Errors
///
/// Fails if a non-default color has no concrete value, or if it snaps to a
/// palette entry past the 16 ANSI colors.
pub fn fg_code(color: &Color, map: &ColorMap) -> Result<usize, ColorError> {
    if color.is_default() {
        return Ok(FG_DEFAULT);
    }
    palette_code(map.map_color(color)?, FG_BASE, FG_BRIGHT)
}

/// SGR code for a background color.
///
/// # Errors
///
/// Fails if a non-default color has no concrete value, or if it snaps to a
/// palette entry past the 16 ANSI colors.
pub fn bg_code(color: &Color, map: &ColorMap) -> Result<usize, ColorError> {
    if color.is_default() {
        return Ok(BG_DEFAULT);
    }
    palette_code(map.map_color(color)?, BG_BASE, BG_BRIGHT)
}

/// SGR code for the bold state.
#[inline]
#[must_use]
pub const fn format_code(bold: bool) -> usize {
    if bold { BOLD_ON } else { BOLD_OFF }
}

/// A resolved `(foreground, background, format)` code triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EscapeSequence {
    /// Foreground code.
    pub fg: usize,
    /// Background code.
    pub bg: usize,
    /// Format code.
    pub fmt: usize,
}

impl EscapeSequence {
    /// Default colors, not bold.
    pub const DEFAULT: Self = Self {
        fg: FG_DEFAULT,
        bg: BG_DEFAULT,
        fmt: BOLD_OFF,
    };

    /// Resolve colors and bold into codes.
    ///
    /// # Errors
    ///
    /// Fails if either color is non-default and has no concrete value.
    pub fn new(fg: &Color, bg: &Color, bold: bool, map: &ColorMap) -> Result<Self, ColorError> {
        Ok(Self {
            fg: fg_code(fg, map)?,
            bg: bg_code(bg, map)?,
            fmt: format_code(bold),
        })
    }

    /// Codes for a glyph's presentation.
    ///
    /// # Errors
    ///
    /// See [`EscapeSequence::new`].
    pub fn for_glyph(glyph: &Glyph, map: &ColorMap) -> Result<Self, ColorError> {
        Self::new(
            &glyph.fg,
            &glyph.bg,
            glyph.flags.contains(GlyphFlags::BOLD),
            map,
        )
    }

    /// Write `ESC[{fg};{bg}mESC[{fmt}m`.
    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        write!(w, "{self}")
    }
}

impl Default for EscapeSequence {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for EscapeSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{};{}m\x1b[{}m", self.fg, self.bg, self.fmt)
    }
}
