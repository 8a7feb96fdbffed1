#![forbid(unsafe_code)]

//! Grid layout.
//!
//! A [`GridBlock`] has a fixed number of rows and columns; cells are filled
//! after construction and empty cells take no room. Each row is as tall as
//! its tallest cell and each column as wide as its widest cell, and cell
//! `(r, c)` is placed at the sum of the preceding row heights and column
//! widths.
//!
//! ```text
//!            col 0   col 1
//!          +-------+-----------+
//!   row 0  | a     | bbbbbbbbb |
//!          +-------+-----------+
//!   row 1  | ccc   |           |
//!          | ccc   |           |
//!          +-------+-----------+
//! ```

use carrot_core::{Extent, TargetInfo};
use carrot_render::{Result, Surface, View};
use carrot_style::Style;
use smallvec::SmallVec;

use crate::{Block, BoxedBlock};

type Tracks = SmallVec<[usize; 8]>;

/// Row heights and column widths of a measured grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    /// Height of each row.
    pub row_heights: Tracks,
    /// Width of each column.
    pub column_widths: Tracks,
}

impl GridLayout {
    /// Total columns and rows.
    #[must_use]
    pub fn extent(&self) -> Extent {
        Extent::new(
            self.column_widths.iter().sum(),
            self.row_heights.iter().sum(),
        )
    }
}

/// A fixed-size table of blocks.
pub struct GridBlock {
    rows: usize,
    columns: usize,
    cells: Vec<Option<BoxedBlock>>,
}

impl GridBlock {
    /// An empty grid.
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: std::iter::repeat_with(|| None)
                .take(rows * columns)
                .collect(),
        }
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Put `block` into cell `(row, column)`, replacing what was there.
    ///
    /// Writes outside the grid are ignored.
    pub fn set(&mut self, row: usize, column: usize, block: impl Block + 'static) {
        let Some(index) = self.index(row, column) else {
            carrot_core::warn!(
                row,
                column,
                rows = self.rows,
                columns = self.columns,
                "grid cell out of bounds"
            );
            return;
        };
        self.cells[index] = Some(Box::new(block));
    }

    /// Builder form of [`GridBlock::set`].
    #[must_use]
    pub fn with_cell(mut self, row: usize, column: usize, block: impl Block + 'static) -> Self {
        self.set(row, column, block);
        self
    }

    /// Remove and return the block in cell `(row, column)`.
    pub fn take(&mut self, row: usize, column: usize) -> Option<BoxedBlock> {
        let index = self.index(row, column)?;
        self.cells[index].take()
    }

    /// The block in cell `(row, column)`, if any.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<&dyn Block> {
        let index = self.index(row, column)?;
        self.cells[index].as_deref()
    }

    #[inline]
    fn index(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.rows && column < self.columns).then(|| row * self.columns + column)
    }

    /// Measure every cell.
    ///
    /// # Errors
    ///
    /// Fails if any cell fails to measure.
    pub fn layout(&self, target: &TargetInfo, style: &Style) -> Result<GridLayout> {
        let mut row_heights: Tracks = SmallVec::from_elem(0, self.rows);
        let mut column_widths: Tracks = SmallVec::from_elem(0, self.columns);

        for row in 0..self.rows {
            for column in 0..self.columns {
                let Some(block) = self.get(row, column) else {
                    continue;
                };
                let extent = block.extent(target, style)?;
                row_heights[row] = row_heights[row].max(extent.height);
                column_widths[column] = column_widths[column].max(extent.width);
            }
        }

        carrot_core::trace!(
            rows = ?row_heights.as_slice(),
            columns = ?column_widths.as_slice(),
            "grid layout"
        );
        Ok(GridLayout {
            row_heights,
            column_widths,
        })
    }
}

impl Block for GridBlock {
    fn render(&self, surface: &mut dyn Surface, style: &Style) -> Result<()> {
        let target = *surface.target();
        let layout = self.layout(&target, style)?;

        let mut row_offset = 0;
        for row in 0..self.rows {
            let mut column_offset = 0;
            for column in 0..self.columns {
                if let Some(block) = self.get(row, column) {
                    block.render(&mut View::new(surface, row_offset, column_offset), style)?;
                }
                column_offset += layout.column_widths[column];
            }
            row_offset += layout.row_heights[row];
        }
        Ok(())
    }

    fn extent(&self, target: &TargetInfo, style: &Style) -> Result<Extent> {
        Ok(self.layout(target, style)?.extent())
    }
}

impl std::fmt::Debug for GridBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridBlock")
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("filled", &self.cells.iter().filter(|c| c.is_some()).count())
            .finish()
    }
}
