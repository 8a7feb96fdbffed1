#![forbid(unsafe_code)]

//! Render pass errors.

use std::fmt;
use std::io;

use carrot_style::{ColorError, StyleError};

/// Failure of a render pass. The first failure aborts the pass.
#[derive(Debug)]
pub enum RenderError {
    /// A color could not be converted for output.
    Color(ColorError),
    /// A style attribute had the wrong type.
    Style(StyleError),
    /// Writing the serialized document failed.
    Io(io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(e) => write!(f, "color error: {e}"),
            Self::Style(e) => write!(f, "style error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Color(e) => Some(e),
            Self::Style(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<ColorError> for RenderError {
    fn from(err: ColorError) -> Self {
        Self::Color(err)
    }
}

impl From<StyleError> for RenderError {
    fn from(err: StyleError) -> Self {
        Self::Style(err)
    }
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Result alias for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;
