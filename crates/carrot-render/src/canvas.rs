#![forbid(unsafe_code)]

//! The growable glyph grid and its offset views.
//!
//! # Coordinate system
//!
//! Rows grow downward and columns grow to the right, both 0-indexed from the
//! top-left corner. Writes address cells as `(row, col)`.
//!
//! # Growth
//!
//! A [`Canvas`] never rejects a write. Writing past the current bounds grows
//! the grid to exactly `max(existing, index + 1)` in each dimension; new
//! cells start blank and existing content keeps its coordinates. The canvas
//! never shrinks.
//!
//! # Views
//!
//! A [`View`] borrows any [`Surface`] and shifts writes by a fixed offset.
//! Views over views add their offsets at write time, so nesting composes.

use carrot_core::{Rect, TargetInfo};

use crate::glyph::Glyph;

/// Anything blocks can draw on.
pub trait Surface {
    /// Write a glyph at `(row, col)` in this surface's coordinates.
    fn set_glyph(&mut self, glyph: Glyph, row: usize, col: usize);

    /// Capabilities of the final render target.
    fn target(&self) -> &TargetInfo;
}

/// A dense, row-major, growable grid of glyphs.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    glyphs: Vec<Glyph>,
    rows: usize,
    cols: usize,
    target: TargetInfo,
}

impl Canvas {
    /// An empty canvas for the given target.
    #[must_use]
    pub fn new(target: TargetInfo) -> Self {
        Self::with_size(target, 0, 0)
    }

    /// A canvas pre-filled with `rows × cols` blank glyphs.
    #[must_use]
    pub fn with_size(target: TargetInfo, rows: usize, cols: usize) -> Self {
        Self {
            glyphs: vec![Glyph::blank(); rows * cols],
            rows,
            cols,
            target,
        }
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Glyph at `(row, col)`, or `None` outside the grid.
    #[must_use]
    pub fn glyph(&self, row: usize, col: usize) -> Option<&Glyph> {
        self.index(row, col).map(|i| &self.glyphs[i])
    }

    /// All glyphs of one row, or `None` outside the grid.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Glyph]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.glyphs[start..start + self.cols])
    }

    /// Smallest rectangle holding every non-blank glyph, or `None` if the
    /// canvas shows nothing.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Rect> {
        let mut bounds: Option<Rect> = None;
        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.glyphs[row * self.cols + col].is_blank() {
                    continue;
                }
                let cell = Rect::new(col, row, 1, 1);
                bounds = Some(bounds.map_or(cell, |b| b.union(&cell)));
            }
        }
        bounds
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    fn grow_to_fit(&mut self, row: usize, col: usize) {
        if row < self.rows && col < self.cols {
            return;
        }

        let rows = self.rows.max(row + 1);
        let cols = self.cols.max(col + 1);
        carrot_core::debug!(
            from_rows = self.rows,
            from_cols = self.cols,
            rows,
            cols,
            "canvas grown"
        );

        let mut glyphs = vec![Glyph::blank(); rows * cols];
        if self.cols > 0 {
            for (r, old_row) in self.glyphs.chunks_exact(self.cols).enumerate() {
                let start = r * cols;
                glyphs[start..start + self.cols].clone_from_slice(old_row);
            }
        }

        self.glyphs = glyphs;
        self.rows = rows;
        self.cols = cols;
    }
}

impl Surface for Canvas {
    fn set_glyph(&mut self, glyph: Glyph, row: usize, col: usize) {
        self.grow_to_fit(row, col);
        let index = row * self.cols + col;
        self.glyphs[index] = glyph;
    }

    fn target(&self) -> &TargetInfo {
        &self.target
    }
}

/// A non-owning window onto another surface, shifted by a fixed offset.
pub struct View<'a> {
    base: &'a mut dyn Surface,
    row_offset: usize,
    col_offset: usize,
}

impl<'a> View<'a> {
    /// Wrap `base` so that `(0, 0)` lands on `(row_offset, col_offset)`.
    pub fn new(base: &'a mut dyn Surface, row_offset: usize, col_offset: usize) -> Self {
        Self {
            base,
            row_offset,
            col_offset,
        }
    }

    /// Offset added to rows.
    #[inline]
    #[must_use]
    pub const fn row_offset(&self) -> usize {
        self.row_offset
    }

    /// Offset added to columns.
    #[inline]
    #[must_use]
    pub const fn col_offset(&self) -> usize {
        self.col_offset
    }
}

impl Surface for View<'_> {
    fn set_glyph(&mut self, glyph: Glyph, row: usize, col: usize) {
        self.base
            .set_glyph(glyph, row + self.row_offset, col + self.col_offset);
    }

    fn target(&self) -> &TargetInfo {
        self.base.target()
    }
}

impl std::fmt::Debug for View<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("View")
            .field("row_offset", &self.row_offset)
            .field("col_offset", &self.col_offset)
            .finish_non_exhaustive()
    }
}
