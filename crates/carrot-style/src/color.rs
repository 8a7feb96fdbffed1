//! Color types, RGB→HSL conversion, and the ranking distance.
//!
//! Colors come in four flavors. Only [`Color::Rgb`] and [`Color::Hsl`] have a
//! concrete value; [`Color::Default`] stands for whatever the device uses and
//! [`Color::Named`] is an unresolved name. Asking either of those for a
//! concrete value fails with a [`ColorError`], so callers special-case them
//! first (the escape codec maps `Default` to the device default codes, and a
//! [`ColorTable`](crate::ColorTable) can resolve names).

use std::fmt;

/// Largest valid RGB component.
pub const RGB_COMPONENT_MAX: i32 = 255;

/// Number of degrees in a full hue turn.
const DEGREES: f32 = 360.0;

/// Hue advance per hexagon edge.
const DEGREES_PER_EDGE: f32 = 60.0;

/// One channel of an RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red channel.
    Red,
    /// Green channel.
    Green,
    /// Blue channel.
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// Failure to turn a [`Color`] into a concrete value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The device default color has no concrete value.
    DefaultColor,
    /// A named color was not resolved before conversion.
    UnresolvedName(String),
    /// An RGB component lies outside `[0, 255]`.
    ComponentOutOfRange {
        /// Offending channel.
        channel: Channel,
        /// Offending value.
        value: i32,
    },
    /// A palette must hold at least one color.
    EmptyPalette,
    /// The palette index lies outside the 16 ANSI colors.
    NoAnsiCode(usize),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DefaultColor => {
                write!(f, "the default color cannot be used as a concrete color")
            }
            Self::UnresolvedName(name) => write!(f, "unknown named color '{name}'"),
            Self::ComponentOutOfRange { channel, value } => write!(
                f,
                "invalid {channel} component: {value} is not in [0, {RGB_COMPONENT_MAX}]"
            ),
            Self::EmptyPalette => write!(f, "a color map needs at least one color"),
            Self::NoAnsiCode(index) => {
                write!(f, "palette index {index} has no 16-color ANSI code")
            }
        }
    }
}

impl std::error::Error for ColorError {}

/// RGB color. Components are expected in `[0, 255]` but construction does
/// not check; conversion does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: i32,
    /// Green channel.
    pub g: i32,
    /// Blue channel.
    pub b: i32,
}

impl Rgb {
    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Convert to HSL.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::ComponentOutOfRange`] for the first component
    /// outside `[0, 255]`.
    pub fn to_hsl(self) -> Result<Hsl, ColorError> {
        rgb_to_hsl(self)
    }

    fn check(self) -> Result<(), ColorError> {
        for (channel, value) in [
            (Channel::Red, self.r),
            (Channel::Green, self.g),
            (Channel::Blue, self.b),
        ] {
            if !(0..=RGB_COMPONENT_MAX).contains(&value) {
                return Err(ColorError::ComponentOutOfRange { channel, value });
            }
        }
        Ok(())
    }
}

/// HSL color: hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: f32,
    /// Saturation.
    pub s: f32,
    /// Lightness.
    pub l: f32,
}

impl Hsl {
    /// Create a new HSL color.
    #[must_use]
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Ranking distance between two HSL colors.
    ///
    /// Sum of the absolute differences of normalized hue, saturation and
    /// lightness. Cheap and not perceptual; only meaningful for ordering
    /// candidates against the same target.
    #[must_use]
    pub fn distance(&self, other: &Hsl) -> f32 {
        (self.h / DEGREES - other.h / DEGREES).abs()
            + (self.s - other.s).abs()
            + (self.l - other.l).abs()
    }
}

/// A color value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Color {
    /// The device's own default color.
    #[default]
    Default,
    /// RGB value.
    Rgb(Rgb),
    /// HSL value.
    Hsl(Hsl),
    /// Unresolved color name.
    Named(String),
}

impl Color {
    /// Create an RGB color.
    #[must_use]
    pub const fn rgb(r: i32, g: i32, b: i32) -> Self {
        Self::Rgb(Rgb::new(r, g, b))
    }

    /// Create an HSL color.
    #[must_use]
    pub const fn hsl(h: f32, s: f32, l: f32) -> Self {
        Self::Hsl(Hsl::new(h, s, l))
    }

    /// Create a named color.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// True for [`Color::Default`].
    ///
    /// This only inspects the variant; an RGB value that happens to match the
    /// device default is not "default".
    #[must_use]
    pub const fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    /// The concrete HSL value of this color.
    ///
    /// # Errors
    ///
    /// Fails for `Default` and `Named`, and for RGB values with a component
    /// out of range.
    pub fn to_hsl(&self) -> Result<Hsl, ColorError> {
        match self {
            Self::Default => Err(ColorError::DefaultColor),
            Self::Rgb(rgb) => rgb_to_hsl(*rgb),
            Self::Hsl(hsl) => Ok(*hsl),
            Self::Named(name) => Err(ColorError::UnresolvedName(name.clone())),
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Self::Hsl(hsl)
    }
}

/// Convert an RGB color to HSL.
///
/// Uses the hexagonal projection: chroma is `max - min` of the normalized
/// channels, hue is taken from the maximal channel.
///
/// # Errors
///
/// Returns [`ColorError::ComponentOutOfRange`] if a component is outside
/// `[0, 255]`.
pub fn rgb_to_hsl(rgb: Rgb) -> Result<Hsl, ColorError> {
    rgb.check()?;

    let max_value = RGB_COMPONENT_MAX as f32;
    let r = rgb.r as f32 / max_value;
    let g = rgb.g as f32 / max_value;
    let b = rgb.b as f32 / max_value;

    let c_max = r.max(g).max(b);
    let c_min = r.min(g).min(b);
    let delta = c_max - c_min;

    let l = (c_max + c_min) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };

    let h = if delta == 0.0 {
        0.0
    } else if c_max == r {
        let hue = ((g - b) / delta % 6.0) * DEGREES_PER_EDGE;
        if hue < 0.0 { hue + DEGREES } else { hue }
    } else if c_max == g {
        ((b - r) / delta + 2.0) * DEGREES_PER_EDGE
    } else {
        ((r - g) / delta + 4.0) * DEGREES_PER_EDGE
    };

    Ok(Hsl::new(h, s, l))
}

/// Ranking distance between two colors, see [`Hsl::distance`].
///
/// # Errors
///
/// Fails if either color has no concrete value.
pub fn distance(a: &Color, b: &Color) -> Result<f32, ColorError> {
    Ok(a.to_hsl()?.distance(&b.to_hsl()?))
}
