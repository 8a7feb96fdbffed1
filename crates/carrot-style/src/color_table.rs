//! Named color lookup.
//!
//! Nothing in the core consults a table on its own: [`Color::Named`] still
//! fails conversion. Callers that want names resolved pass a table to the
//! presenter or call [`ColorTable::resolve`] themselves.

use std::collections::HashMap;

use crate::color::Color;

/// A table of named colors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorTable {
    colors: HashMap<String, Color>,
}

impl ColorTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The sixteen basic CSS color keywords.
    #[must_use]
    pub fn css_basic() -> Self {
        const BASIC: [(&str, (i32, i32, i32)); 16] = [
            ("black", (0, 0, 0)),
            ("silver", (192, 192, 192)),
            ("gray", (128, 128, 128)),
            ("white", (255, 255, 255)),
            ("maroon", (128, 0, 0)),
            ("red", (255, 0, 0)),
            ("purple", (128, 0, 128)),
            ("fuchsia", (255, 0, 255)),
            ("green", (0, 128, 0)),
            ("lime", (0, 255, 0)),
            ("olive", (128, 128, 0)),
            ("yellow", (255, 255, 0)),
            ("navy", (0, 0, 128)),
            ("blue", (0, 0, 255)),
            ("teal", (0, 128, 128)),
            ("aqua", (0, 255, 255)),
        ];

        let mut table = Self::new();
        for (name, (r, g, b)) in BASIC {
            table.add(name, Color::rgb(r, g, b));
        }
        table
    }

    /// Add (or replace) a named color.
    pub fn add(&mut self, name: impl Into<String>, color: Color) -> &mut Self {
        self.colors.insert(name.into(), color);
        self
    }

    /// Look up a color by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Color> {
        self.colors.get(name)
    }

    /// Replace a known name with its table entry; anything else passes
    /// through unchanged, including unknown names.
    #[must_use]
    pub fn resolve<'a>(&'a self, color: &'a Color) -> &'a Color {
        match color {
            Color::Named(name) => self.lookup(name).unwrap_or(color),
            _ => color,
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
