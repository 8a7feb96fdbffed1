#![forbid(unsafe_code)]

//! Style types: colors, palettes, and the cascading attribute resolver.

pub mod attribute;
pub mod color;
pub mod color_map;
pub mod color_table;
pub mod stylesheet;

pub use attribute::{AttributeValue, FromAttribute, StyleError};
pub use color::{Channel, Color, ColorError, Hsl, Rgb, distance, rgb_to_hsl};
pub use color_map::{ANSI_COLOR_COUNT, ColorMap, XTERM_COLOR_TABLE};
pub use color_table::ColorTable;
pub use stylesheet::{Style, StyleQuery, StyleRule, attr, element};
