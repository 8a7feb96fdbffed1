#![forbid(unsafe_code)]

//! Carrot public facade.
//!
//! Build a tree of blocks, pick a style and a target, and render it to text:
//!
//! ```
//! use carrot::prelude::*;
//!
//! let doc = FrameBlock::new(TextBlock::new("hi"), 1, 0);
//! let out = carrot::render(&doc, TargetInfo::file(), &Style::with_defaults()).unwrap();
//! assert_eq!(out, "------\n| hi |\n------\n");
//! ```
//!
//! The internal crates are re-exported as [`core`], [`style`], [`render`]
//! and [`blocks`] for anything the prelude does not cover.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use carrot_core::{Extent, Rect, TargetInfo};

// --- Style re-exports ------------------------------------------------------

pub use carrot_style::{
    AttributeValue, Color, ColorError, ColorMap, ColorTable, Hsl, Rgb, Style, StyleError,
    StyleQuery, StyleRule, XTERM_COLOR_TABLE, attr, element,
};

// --- Render re-exports -----------------------------------------------------

pub use carrot_render::{
    Canvas, Glyph, GlyphFlags, Presenter, RenderError, Result, Surface, View,
};

// --- Block re-exports ------------------------------------------------------

pub use carrot_blocks::{
    Block, BoxedBlock, CaretUnderlineBlock, CheckboxList, Component, ComponentBlock, Direction,
    FnComponent, FrameBlock, FramedBlock, GridBlock, IndentBlock, LineBlock, MarkerBlock,
    TextBlock,
};

#[cfg(feature = "tracing-json")]
pub use carrot_core::logging::init_json;

// --- Options ---------------------------------------------------------------

/// Settings for one render pass.
///
/// ```
/// use carrot::{ColorTable, RenderOptions};
///
/// let options = RenderOptions::new()
///     .sparse(false)
///     .initial_size(2, 10)
///     .color_table(ColorTable::css_basic());
/// assert!(!options.is_sparse());
/// ```
#[derive(Clone)]
pub struct RenderOptions {
    sparse: bool,
    initial_rows: usize,
    initial_cols: usize,
    color_table: Option<ColorTable>,
    palette: ColorMap,
}

impl RenderOptions {
    /// Sparse output, empty initial canvas, no color table, xterm palette.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sparse: true,
            initial_rows: 0,
            initial_cols: 0,
            color_table: None,
            palette: ColorMap::xterm(),
        }
    }

    /// Drop trailing blank glyphs from each row.
    #[must_use]
    pub fn sparse(mut self, sparse: bool) -> Self {
        self.sparse = sparse;
        self
    }

    /// Pre-allocate the canvas. The canvas still grows past this if the
    /// block draws further out.
    #[must_use]
    pub fn initial_size(mut self, rows: usize, cols: usize) -> Self {
        self.initial_rows = rows;
        self.initial_cols = cols;
        self
    }

    /// Resolve named colors through `table` when serializing.
    #[must_use]
    pub fn color_table(mut self, table: ColorTable) -> Self {
        self.color_table = Some(table);
        self
    }

    /// Quantize colors onto `palette` instead of the xterm map.
    #[must_use]
    pub fn palette(mut self, palette: ColorMap) -> Self {
        self.palette = palette;
        self
    }

    /// Whether trailing blank glyphs are dropped.
    #[must_use]
    pub const fn is_sparse(&self) -> bool {
        self.sparse
    }

    /// Pre-allocated `(rows, cols)`.
    #[must_use]
    pub const fn size(&self) -> (usize, usize) {
        (self.initial_rows, self.initial_cols)
    }

    fn presenter<W: std::io::Write>(&self, writer: W) -> Presenter<W> {
        let presenter = Presenter::new(writer)
            .sparse(self.sparse)
            .with_palette(self.palette.clone());
        match &self.color_table {
            Some(table) => presenter.with_color_table(table.clone()),
            None => presenter,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RenderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderOptions")
            .field("sparse", &self.sparse)
            .field("initial_size", &(self.initial_rows, self.initial_cols))
            .field("color_table", &self.color_table.as_ref().map(ColorTable::len))
            .field("palette", &self.palette.len())
            .finish()
    }
}

// --- Entry points ----------------------------------------------------------

/// Render `block` with default options.
///
/// # Errors
///
/// Fails if a style attribute has the wrong type or a color cannot be
/// quantized.
pub fn render<B: Block + ?Sized>(block: &B, target: TargetInfo, style: &Style) -> Result<String> {
    render_with(block, target, style, &RenderOptions::default())
}

/// Render `block` into a string.
///
/// Measures the block, draws it onto a fresh canvas, and serializes the
/// canvas. The first error aborts the pass.
///
/// # Errors
///
/// Fails if a style attribute has the wrong type or a color cannot be
/// quantized.
pub fn render_with<B: Block + ?Sized>(
    block: &B,
    target: TargetInfo,
    style: &Style,
    options: &RenderOptions,
) -> Result<String> {
    let canvas = draw(block, target, style, options)?;

    let mut presenter = options.presenter(Vec::new());
    presenter.present(&canvas)?;
    let bytes = presenter.into_inner()?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Draw `block` onto a canvas without serializing it.
///
/// With the `tracing` feature the pass runs inside a `render` span that
/// records the root extent, which costs one extra measurement of the tree.
///
/// # Errors
///
/// Fails if a style attribute has the wrong type.
pub fn draw<B: Block + ?Sized>(
    block: &B,
    target: TargetInfo,
    style: &Style,
    options: &RenderOptions,
) -> Result<Canvas> {
    #[cfg(feature = "tracing")]
    let span = {
        let extent = block.extent(&target, style)?;
        carrot_core::debug_span!(
            "render",
            width = extent.width,
            height = extent.height,
            color = target.supports_color
        )
    };
    #[cfg(not(feature = "tracing"))]
    let span = carrot_core::debug_span!("render");
    let _guard = span.enter();

    let (rows, cols) = options.size();
    let mut canvas = Canvas::with_size(target, rows, cols);
    block.render(&mut canvas, style)?;
    carrot_core::debug!(rows = canvas.rows(), cols = canvas.cols(), "render pass done");
    Ok(canvas)
}

// --- Prelude ---------------------------------------------------------------

/// Everyday imports: `use carrot::prelude::*;`.
pub mod prelude {
    pub use crate::{
        Block, BoxedBlock, CaretUnderlineBlock, CheckboxList, Color, Component, ComponentBlock,
        Extent, FrameBlock, FramedBlock, GridBlock, IndentBlock, LineBlock, RenderError,
        RenderOptions, Result, Style, StyleRule, TargetInfo, TextBlock,
    };

    pub use crate::{blocks, core, render, style};
}

pub use carrot_blocks as blocks;
pub use carrot_core as core;
pub use carrot_render as render;
pub use carrot_style as style;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = RenderOptions::default();
        assert!(options.is_sparse());
        assert_eq!(options.size(), (0, 0));
        assert!(options.color_table.is_none());
        assert_eq!(options.palette, ColorMap::xterm());
    }

    #[test]
    fn builder_sets_fields() {
        let options = RenderOptions::new()
            .sparse(false)
            .initial_size(3, 7)
            .color_table(ColorTable::css_basic());
        assert!(!options.is_sparse());
        assert_eq!(options.size(), (3, 7));
        assert_eq!(options.color_table.as_ref().map(ColorTable::len), Some(16));
    }

    #[test]
    fn draw_returns_measured_canvas() {
        let block = IndentBlock::new(2, TextBlock::new("ab\nc"));
        let canvas = draw(&block, TargetInfo::file(), &Style::new(), &RenderOptions::new()).unwrap();
        assert_eq!((canvas.rows(), canvas.cols()), (2, 4));
    }

    #[test]
    fn empty_block_renders_nothing() {
        assert_eq!(
            render(&TextBlock::new(""), TargetInfo::file(), &Style::new()).unwrap(),
            ""
        );
        assert_eq!(
            render(&TextBlock::new(""), TargetInfo::colorized(), &Style::new()).unwrap(),
            "\x1b[0m\x1b[0m"
        );
    }

    mod property {
        use super::*;
        use proptest::prelude::*;

        fn framed(lines: &[String], across: bool, mx: usize, my: usize) -> FrameBlock<LineBlock> {
            let children = lines
                .iter()
                .map(|line| Box::new(TextBlock::new(line.clone())) as BoxedBlock);
            let body = if across {
                LineBlock::right(children)
            } else {
                LineBlock::down(children)
            };
            FrameBlock::new(body, mx, my)
        }

        proptest! {
            #[test]
            fn drawn_canvas_matches_extent(
                lines in prop::collection::vec("[a-z \t]{0,8}", 0..5),
                across in any::<bool>(),
                mx in 0usize..3,
                my in 0usize..3,
                tab_width in 0usize..6,
            ) {
                let target = TargetInfo::file().with_tab_width(tab_width);
                let style = Style::with_defaults();
                let block = framed(&lines, across, mx, my);

                let extent = block.extent(&target, &style).unwrap();
                let canvas = draw(&block, target, &style, &RenderOptions::new()).unwrap();

                // Frame corners pin the canvas to exactly the extent.
                prop_assert_eq!((canvas.rows(), canvas.cols()), (extent.height, extent.width));
                prop_assert_eq!(canvas.bounding_box(), Some(Rect::from_extent(extent)));
            }
        }
    }
}
