#![forbid(unsafe_code)]

//! Components: blocks built on demand from configuration.
//!
//! A [`Component`] generates a fresh block tree every time it is measured or
//! rendered. Generation has to be deterministic: a render pass measures
//! first and draws second, and the two generated trees must agree or the
//! layout around the component breaks. Nothing checks this.

use carrot_core::{Extent, TargetInfo};
use carrot_render::{Result, Surface};
use carrot_style::Style;

use crate::{Block, BoxedBlock};

/// Something that expands into a block tree.
pub trait Component {
    /// Build the block tree for the current configuration.
    fn generate(&self) -> BoxedBlock;
}

/// Adapts a [`Component`] into a [`Block`].
///
/// Every call to `extent` or `render` generates a new tree and delegates to
/// it.
#[derive(Debug, Clone, Default)]
pub struct ComponentBlock<C> {
    component: C,
}

impl<C: Component> ComponentBlock<C> {
    /// Wrap a component.
    pub const fn new(component: C) -> Self {
        Self { component }
    }

    /// The wrapped component.
    pub const fn component(&self) -> &C {
        &self.component
    }

    /// Mutable access to the wrapped component.
    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }
}

impl<C: Component> Block for ComponentBlock<C> {
    fn render(&self, surface: &mut dyn Surface, style: &Style) -> Result<()> {
        self.component.generate().render(surface, style)
    }

    fn extent(&self, target: &TargetInfo, style: &Style) -> Result<Extent> {
        self.component.generate().extent(target, style)
    }
}

/// A component backed by a closure.
pub struct FnComponent<F> {
    generate: F,
}

impl<F: Fn() -> BoxedBlock> FnComponent<F> {
    /// Create a component from a generator closure.
    pub const fn new(generate: F) -> Self {
        Self { generate }
    }

    /// Wrap straight into a block.
    pub fn into_block(self) -> ComponentBlock<Self> {
        ComponentBlock::new(self)
    }
}

impl<F: Fn() -> BoxedBlock> Component for FnComponent<F> {
    fn generate(&self) -> BoxedBlock {
        (self.generate)()
    }
}

impl<F> std::fmt::Debug for FnComponent<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnComponent").finish_non_exhaustive()
    }
}
