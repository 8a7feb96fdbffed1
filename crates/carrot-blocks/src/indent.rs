#![forbid(unsafe_code)]

//! Indentation.

use carrot_core::{Extent, TargetInfo};
use carrot_render::{Result, Surface, View};
use carrot_style::{Style, StyleQuery, attr, element};

use crate::Block;

/// Where the indentation width comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// A fixed number of columns.
    Fixed(usize),
    /// The `indent` attribute of element `indent`; 0 when unset.
    Styled,
}

impl Indent {
    /// Columns to shift by under `style`.
    ///
    /// # Errors
    ///
    /// Fails if the `indent` attribute is not a non-negative integer.
    pub fn resolve(self, style: &Style) -> Result<usize> {
        match self {
            Self::Fixed(columns) => Ok(columns),
            Self::Styled => Ok(style
                .size(&StyleQuery::element(element::INDENT), attr::INDENT)?
                .unwrap_or(0)),
        }
    }
}

/// Shifts its child to the right.
#[derive(Debug, Clone)]
pub struct IndentBlock<B> {
    child: B,
    indent: Indent,
}

impl<B: Block> IndentBlock<B> {
    /// Indent `child` by `columns`.
    pub const fn new(columns: usize, child: B) -> Self {
        Self {
            child,
            indent: Indent::Fixed(columns),
        }
    }

    /// Indent `child` by the style's indentation.
    pub const fn styled(child: B) -> Self {
        Self {
            child,
            indent: Indent::Styled,
        }
    }

    /// The configured indentation.
    pub const fn indent(&self) -> Indent {
        self.indent
    }

    /// The indented child.
    pub const fn child(&self) -> &B {
        &self.child
    }
}

impl<B: Block> Block for IndentBlock<B> {
    fn render(&self, surface: &mut dyn Surface, style: &Style) -> Result<()> {
        let columns = self.indent.resolve(style)?;
        self.child.render(&mut View::new(surface, 0, columns), style)
    }

    fn extent(&self, target: &TargetInfo, style: &Style) -> Result<Extent> {
        let columns = self.indent.resolve(style)?;
        Ok(self.child.extent(target, style)?.grow(columns, 0))
    }
}
