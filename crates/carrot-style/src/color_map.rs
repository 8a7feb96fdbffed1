//! Nearest-color quantization onto a fixed palette.

use crate::color::{Color, ColorError, Hsl};

/// Reference colors approximating the xterm palette.
///
/// Entries 0-7 are the base colors, 8-15 their bright variants, followed by
/// two extras (black again and a dark blue).
pub const XTERM_COLOR_TABLE: [Hsl; 18] = [
    Hsl::new(0.0, 0.0, 0.0),    // Black
    Hsl::new(0.0, 1.0, 0.25),   // Red
    Hsl::new(120.0, 1.0, 0.25), // Green
    Hsl::new(60.0, 1.0, 0.25),  // Yellow
    Hsl::new(240.0, 1.0, 0.25), // Blue
    Hsl::new(300.0, 1.0, 0.25), // Magenta
    Hsl::new(180.0, 1.0, 0.25), // Cyan
    Hsl::new(0.0, 0.0, 0.75),   // White
    Hsl::new(0.0, 0.0, 0.5),    // Bright black
    Hsl::new(0.0, 1.0, 0.5),    // Bright red
    Hsl::new(120.0, 1.0, 0.5),  // Bright green
    Hsl::new(60.0, 1.0, 0.5),   // Bright yellow
    Hsl::new(240.0, 1.0, 0.5),  // Bright blue
    Hsl::new(300.0, 1.0, 0.5),  // Bright magenta
    Hsl::new(180.0, 1.0, 0.5),  // Bright cyan
    Hsl::new(0.0, 0.0, 1.0),    // Bright white
    Hsl::new(0.0, 0.0, 0.0),    // Black (extra)
    Hsl::new(240.0, 1.0, 0.18), // Navy (extra)
];

/// Number of palette entries that have an SGR color code.
pub const ANSI_COLOR_COUNT: usize = 16;

/// An ordered palette that arbitrary colors are snapped onto.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMap {
    colors: Vec<Hsl>,
}

impl ColorMap {
    /// Create a map over the given reference colors.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::EmptyPalette`] if `colors` is empty.
    pub fn new(colors: Vec<Hsl>) -> Result<Self, ColorError> {
        if colors.is_empty() {
            return Err(ColorError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// The 16-color xterm map used for escape generation.
    #[must_use]
    pub fn xterm() -> Self {
        Self {
            colors: XTERM_COLOR_TABLE[..ANSI_COLOR_COUNT].to_vec(),
        }
    }

    /// Reference colors in index order.
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Hsl] {
        &self.colors
    }

    /// Number of reference colors.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a map holds at least one color.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Index of the reference color closest to `color`.
    ///
    /// Linear scan with a strict less-than comparison, so ties keep the
    /// lowest index.
    ///
    /// # Errors
    ///
    /// Fails if `color` has no concrete value.
    pub fn map_color(&self, color: &Color) -> Result<usize, ColorError> {
        let target = color.to_hsl()?;

        let mut best_index = 0;
        let mut best_distance = target.distance(&self.colors[0]);

        for (index, candidate) in self.colors.iter().enumerate().skip(1) {
            let distance = target.distance(candidate);
            if distance < best_distance {
                best_index = index;
                best_distance = distance;
            }
        }

        Ok(best_index)
    }
}

impl Default for ColorMap {
    fn default() -> Self {
        Self::xterm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xterm_map_has_sixteen_entries() {
        let map = ColorMap::xterm();
        assert_eq!(map.len(), ANSI_COLOR_COUNT);
        assert!(!map.is_empty());
        assert_eq!(map.colors(), &XTERM_COLOR_TABLE[..16]);
    }

    #[test]
    fn primaries_map_to_bright_entries() {
        let map = ColorMap::xterm();
        assert_eq!(map.map_color(&Color::rgb(255, 0, 0)), Ok(9));
        assert_eq!(map.map_color(&Color::rgb(0, 255, 0)), Ok(10));
        assert_eq!(map.map_color(&Color::rgb(0, 0, 255)), Ok(12));
    }

    #[test]
    fn dark_primaries_map_to_base_entries() {
        let map = ColorMap::xterm();
        assert_eq!(map.map_color(&Color::rgb(128, 0, 0)), Ok(1));
        assert_eq!(map.map_color(&Color::rgb(0, 128, 0)), Ok(2));
    }

    #[test]
    fn grays() {
        let map = ColorMap::xterm();
        assert_eq!(map.map_color(&Color::rgb(0, 0, 0)), Ok(0));
        assert_eq!(map.map_color(&Color::rgb(255, 255, 255)), Ok(15));
        assert_eq!(map.map_color(&Color::rgb(190, 190, 190)), Ok(7));
    }

    #[test]
    fn exact_hsl_hits_its_entry() {
        let map = ColorMap::xterm();
        for (index, hsl) in XTERM_COLOR_TABLE[..16].iter().enumerate() {
            assert_eq!(map.map_color(&Color::Hsl(*hsl)), Ok(index));
        }
    }

    #[test]
    fn ties_resolve_to_lowest_index() {
        let map = ColorMap::new(XTERM_COLOR_TABLE.to_vec()).unwrap();
        // Entry 16 duplicates entry 0.
        assert_eq!(map.map_color(&Color::hsl(0.0, 0.0, 0.0)), Ok(0));

        let map = ColorMap::new(vec![
            Hsl::new(0.0, 0.0, 0.25),
            Hsl::new(0.0, 0.0, 0.75),
            Hsl::new(0.0, 0.0, 0.25),
        ])
        .unwrap();
        // Equidistant from all three.
        assert_eq!(map.map_color(&Color::hsl(0.0, 0.0, 0.5)), Ok(0));
    }

    #[test]
    fn default_color_cannot_be_mapped() {
        let map = ColorMap::xterm();
        assert_eq!(map.map_color(&Color::Default), Err(ColorError::DefaultColor));
    }

    #[test]
    fn empty_map_is_rejected() {
        assert_eq!(ColorMap::new(Vec::new()), Err(ColorError::EmptyPalette));
    }

    mod property {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn map_color_is_stable(r in 0i32..=255, g in 0i32..=255, b in 0i32..=255) {
                let map = ColorMap::xterm();
                let color = Color::rgb(r, g, b);
                let first = map.map_color(&color).unwrap();
                prop_assert_eq!(map.map_color(&color).unwrap(), first);
                prop_assert!(first < ANSI_COLOR_COUNT);
            }

            #[test]
            fn map_color_is_a_minimum(r in 0i32..=255, g in 0i32..=255, b in 0i32..=255) {
                let map = ColorMap::xterm();
                let color = Color::rgb(r, g, b);
                let hsl = color.to_hsl().unwrap();
                let best = map.map_color(&color).unwrap();
                let best_distance = hsl.distance(&map.colors()[best]);
                for (index, candidate) in map.colors().iter().enumerate() {
                    let d = hsl.distance(candidate);
                    prop_assert!(d >= best_distance);
                    if index < best {
                        prop_assert!(d > best_distance);
                    }
                }
            }
        }
    }
}
