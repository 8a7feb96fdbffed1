#![forbid(unsafe_code)]

//! Presenter: canvas to text, with run-length ANSI emission.
//!
//! The presenter walks a finished [`Canvas`] row by row. When the canvas
//! target supports color it tracks the current escape state and writes a new
//! [`EscapeSequence`] only when a glyph's resolved triple differs from the
//! previous glyph's.
//!
//! # Document layout
//!
//! - Colored output starts and ends with a full reset (`ESC[0m`).
//! - Each row starts in the default state (default colors, not bold). A row
//!   that ends in another state writes the default triple before its line
//!   break.
//! - Every row ends with `\n`.
//! - In sparse mode trailing blank glyphs are dropped from each row.
//!
//! # Usage
//!
//! ```
//! use carrot_core::TargetInfo;
//! use carrot_render::{Canvas, Glyph, Presenter, Surface};
//!
//! let mut canvas = Canvas::new(TargetInfo::file());
//! canvas.set_glyph(Glyph::from_char('x'), 0, 1);
//!
//! let mut presenter = Presenter::new(Vec::new());
//! presenter.present(&canvas).unwrap();
//! assert_eq!(presenter.into_inner().unwrap(), b" x\n");
//! ```

use std::io::{self, BufWriter, Write};

use carrot_style::{ColorMap, ColorTable};

use crate::ansi::{self, EscapeSequence};
use crate::canvas::{Canvas, Surface};
use crate::error::Result;
use crate::glyph::{Glyph, GlyphFlags};

/// Size of the internal write buffer (16KB).
const BUFFER_CAPACITY: usize = 16 * 1024;

/// Serializes canvases into (optionally colored) text.
pub struct Presenter<W: Write> {
    /// Buffered writer for efficient output.
    writer: BufWriter<W>,
    /// Current escape state within the row.
    current: EscapeSequence,
    /// Palette colors are snapped onto.
    palette: ColorMap,
    /// Named colors resolved before quantizing.
    color_table: Option<ColorTable>,
    /// Drop trailing blank glyphs.
    sparse: bool,
}

impl<W: Write> Presenter<W> {
    /// Create a sparse presenter using the xterm palette.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(BUFFER_CAPACITY, writer),
            current: EscapeSequence::DEFAULT,
            palette: ColorMap::xterm(),
            color_table: None,
            sparse: true,
        }
    }

    /// Use another palette.
    #[must_use]
    pub fn with_palette(mut self, palette: ColorMap) -> Self {
        self.palette = palette;
        self
    }

    /// Resolve named colors through `table`.
    #[must_use]
    pub fn with_color_table(mut self, table: ColorTable) -> Self {
        self.color_table = Some(table);
        self
    }

    /// Toggle sparse mode.
    #[must_use]
    pub fn sparse(mut self, sparse: bool) -> Self {
        self.sparse = sparse;
        self
    }

    /// Write the whole canvas and flush.
    ///
    /// # Errors
    ///
    /// Fails if a glyph color cannot be quantized or the writer fails.
    pub fn present(&mut self, canvas: &Canvas) -> Result<()> {
        let colorize = canvas.target().supports_color;
        if colorize {
            ansi::sgr_reset(&mut self.writer)?;
        }

        for row in 0..canvas.rows() {
            let glyphs = canvas.row(row).unwrap_or(&[]);
            let len = if self.sparse {
                glyphs.iter().rposition(|g| !g.is_blank()).map_or(0, |i| i + 1)
            } else {
                glyphs.len()
            };
            carrot_core::trace!(row, glyphs = len, "row serialized");

            self.current = EscapeSequence::DEFAULT;
            for glyph in &glyphs[..len] {
                if colorize {
                    self.emit_style_changes(glyph)?;
                }
                self.writer.write_all(glyph.content.as_bytes())?;
            }

            if colorize && self.current != EscapeSequence::DEFAULT {
                EscapeSequence::DEFAULT.write(&mut self.writer)?;
                self.current = EscapeSequence::DEFAULT;
            }
            self.writer.write_all(b"\n")?;
        }

        if colorize {
            ansi::sgr_reset(&mut self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Emit an escape sequence if the glyph's triple differs from current.
    fn emit_style_changes(&mut self, glyph: &Glyph) -> Result<()> {
        let next = match &self.color_table {
            Some(table) => EscapeSequence::new(
                table.resolve(&glyph.fg),
                table.resolve(&glyph.bg),
                glyph.flags.contains(GlyphFlags::BOLD),
                &self.palette,
            )?,
            None => EscapeSequence::for_glyph(glyph, &self.palette)?,
        };

        if next != self.current {
            next.write(&mut self.writer)?;
            self.current = next;
        }
        Ok(())
    }

    /// Flush and return the underlying writer.
    ///
    /// # Errors
    ///
    /// Fails if the final flush fails.
    pub fn into_inner(self) -> std::result::Result<W, io::Error> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}

impl Canvas {
    /// Serialize into a string using the xterm palette.
    ///
    /// # Errors
    ///
    /// Fails if a glyph color cannot be quantized.
    pub fn serialize(&self, sparse: bool) -> Result<String> {
        let mut presenter = Presenter::new(Vec::new()).sparse(sparse);
        presenter.present(self)?;
        let bytes = presenter.into_inner()?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
