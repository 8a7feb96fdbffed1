#![forbid(unsafe_code)]

//! Sequential layout along one axis.

use carrot_core::{Extent, TargetInfo};
use carrot_render::{Result, Surface, View};
use carrot_style::Style;

use crate::{Block, BoxedBlock};

/// Layout direction of a [`LineBlock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Left to right; children are placed side by side.
    #[default]
    Right,
    /// Top to bottom; children are stacked.
    Down,
}

/// Places children one after another along a [`Direction`].
///
/// Children are laid out in insertion order, each at the running sum of the
/// previous children's widths (`Right`) or heights (`Down`).
pub struct LineBlock {
    children: Vec<BoxedBlock>,
    direction: Direction,
}

impl LineBlock {
    /// An empty line.
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        Self {
            children: Vec::new(),
            direction,
        }
    }

    /// A horizontal line of `children`.
    #[must_use]
    pub fn right(children: impl IntoIterator<Item = BoxedBlock>) -> Self {
        Self::new(Direction::Right).children(children)
    }

    /// A vertical line of `children`.
    #[must_use]
    pub fn down(children: impl IntoIterator<Item = BoxedBlock>) -> Self {
        Self::new(Direction::Down).children(children)
    }

    /// Append a child (builder-style).
    #[must_use]
    pub fn child(mut self, child: impl Block + 'static) -> Self {
        self.push(child);
        self
    }

    /// Append several children (builder-style).
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = BoxedBlock>) -> Self {
        self.children.extend(children);
        self
    }

    /// Append a child.
    pub fn push(&mut self, child: impl Block + 'static) {
        self.children.push(Box::new(child));
    }

    /// Layout direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True if the line has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Block for LineBlock {
    fn render(&self, surface: &mut dyn Surface, style: &Style) -> Result<()> {
        let target = *surface.target();
        let mut offset = 0;

        for child in &self.children {
            let extent = child.extent(&target, style)?;
            match self.direction {
                Direction::Right => {
                    child.render(&mut View::new(surface, 0, offset), style)?;
                    offset += extent.width;
                }
                Direction::Down => {
                    child.render(&mut View::new(surface, offset, 0), style)?;
                    offset += extent.height;
                }
            }
        }
        Ok(())
    }

    fn extent(&self, target: &TargetInfo, style: &Style) -> Result<Extent> {
        let mut total = Extent::ZERO;

        for child in &self.children {
            let extent = child.extent(target, style)?;
            match self.direction {
                Direction::Right => {
                    total.width += extent.width;
                    total.height = total.height.max(extent.height);
                }
                Direction::Down => {
                    total.width = total.width.max(extent.width);
                    total.height += extent.height;
                }
            }
        }
        Ok(total)
    }
}

impl std::fmt::Debug for LineBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineBlock")
            .field("children", &self.children.len())
            .field("direction", &self.direction)
            .finish()
    }
}
