#![forbid(unsafe_code)]

//! Composable layout blocks.
//!
//! A [`Block`] knows two things: how much room it needs ([`Block::extent`])
//! and how to draw itself into a [`Surface`] ([`Block::render`]). Composite
//! blocks measure their children, then render each one through a [`View`]
//! shifted to the child's position, so every block draws in its own
//! coordinates starting at `(0, 0)`.
//!
//! # Contract
//!
//! - `extent` is pure: the same block, style and target always give the same
//!   extent.
//! - `render` only touches cells inside the extent it reports for the same
//!   inputs.
//!
//! [`View`]: carrot_render::View

pub mod caret_underline;
pub mod checkbox_list;
pub mod component;
pub mod frame;
pub mod grid;
pub mod indent;
pub mod line;
pub mod marker;
pub mod text;

pub use caret_underline::CaretUnderlineBlock;
pub use checkbox_list::CheckboxList;
pub use component::{Component, ComponentBlock, FnComponent};
pub use frame::{FrameBlock, FramedBlock};
pub use grid::GridBlock;
pub use indent::IndentBlock;
pub use line::{Direction, LineBlock};
pub use marker::MarkerBlock;
pub use text::TextBlock;

use std::rc::Rc;
use std::sync::Arc;

use carrot_core::{Extent, TargetInfo};
use carrot_render::{Result, Surface};
use carrot_style::Style;

/// A node of the layout tree.
pub trait Block {
    /// Draw into `surface`, with `(0, 0)` at the block's top-left corner.
    ///
    /// # Errors
    ///
    /// Fails if a style attribute has the wrong type. The pass is aborted and
    /// the surface may hold partial output.
    fn render(&self, surface: &mut dyn Surface, style: &Style) -> Result<()>;

    /// Columns and rows `render` will occupy for the same inputs.
    ///
    /// # Errors
    ///
    /// Fails if a style attribute has the wrong type.
    fn extent(&self, target: &TargetInfo, style: &Style) -> Result<Extent>;
}

/// An owned, type-erased block.
pub type BoxedBlock = Box<dyn Block>;

impl<B: Block + ?Sized> Block for Box<B> {
    fn render(&self, surface: &mut dyn Surface, style: &Style) -> Result<()> {
        (**self).render(surface, style)
    }

    fn extent(&self, target: &TargetInfo, style: &Style) -> Result<Extent> {
        (**self).extent(target, style)
    }
}

impl<B: Block + ?Sized> Block for &B {
    fn render(&self, surface: &mut dyn Surface, style: &Style) -> Result<()> {
        (**self).render(surface, style)
    }

    fn extent(&self, target: &TargetInfo, style: &Style) -> Result<Extent> {
        (**self).extent(target, style)
    }
}

impl<B: Block + ?Sized> Block for Rc<B> {
    fn render(&self, surface: &mut dyn Surface, style: &Style) -> Result<()> {
        (**self).render(surface, style)
    }

    fn extent(&self, target: &TargetInfo, style: &Style) -> Result<Extent> {
        (**self).extent(target, style)
    }
}

impl<B: Block + ?Sized> Block for Arc<B> {
    fn render(&self, surface: &mut dyn Surface, style: &Style) -> Result<()> {
        (**self).render(surface, style)
    }

    fn extent(&self, target: &TargetInfo, style: &Style) -> Result<Extent> {
        (**self).extent(target, style)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use carrot_core::{Rect, TargetInfo};
    use carrot_render::Canvas;
    use carrot_style::Style;

    use crate::Block;

    /// Render onto a fresh plain canvas.
    pub fn canvas_of(block: &dyn Block, style: &Style) -> Canvas {
        let mut canvas = Canvas::new(TargetInfo::file());
        block.render(&mut canvas, style).unwrap();
        canvas
    }

    /// Render and serialize sparsely.
    pub fn draw(block: &dyn Block, style: &Style) -> String {
        canvas_of(block, style).serialize(true).unwrap()
    }

    /// Assert that everything drawn lies inside the reported extent.
    pub fn assert_within_extent(block: &dyn Block, style: &Style) {
        let extent = block.extent(&TargetInfo::file(), style).unwrap();
        let canvas = canvas_of(block, style);
        if let Some(drawn) = canvas.bounding_box() {
            let bounds = Rect::from_extent(extent);
            assert!(
                bounds.contains_rect(&drawn),
                "drawn {drawn:?} escapes extent {extent}"
            );
        }
    }
}
