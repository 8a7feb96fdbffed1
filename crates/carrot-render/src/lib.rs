#![forbid(unsafe_code)]

//! Render: glyphs, the growable canvas, offset views, and ANSI output.
//!
//! Blocks draw into anything implementing [`Surface`]: a [`Canvas`] or a
//! [`View`] onto one. A finished canvas is turned into text by the
//! [`Presenter`].

pub mod ansi;
pub mod canvas;
pub mod error;
pub mod glyph;
pub mod presenter;

pub use canvas::{Canvas, Surface, View};
pub use error::{RenderError, Result};
pub use glyph::{Glyph, GlyphFlags, GlyphStyle};
pub use presenter::Presenter;
