//! Loosely typed style attribute values and their typed access.

use std::fmt;

use crate::color::{Color, Hsl, Rgb};

/// A value stored under an attribute name in a style rule.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Integer value (indents, margins).
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Boolean flag.
    Bool(bool),
    /// String value (symbols, content).
    Str(String),
    /// Color value.
    Color(Color),
}

impl AttributeValue {
    /// Name of the stored type, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Str(_) => "string",
            Self::Color(_) => "color",
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Color> for AttributeValue {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<Rgb> for AttributeValue {
    fn from(value: Rgb) -> Self {
        Self::Color(value.into())
    }
}

impl From<Hsl> for AttributeValue {
    fn from(value: Hsl) -> Self {
        Self::Color(value.into())
    }
}

/// Typed access to an [`AttributeValue`].
pub trait FromAttribute: Sized {
    /// Type name reported on mismatch.
    const TYPE_NAME: &'static str;

    /// Extract a value, or `None` if the stored type does not fit.
    fn from_attribute(value: &AttributeValue) -> Option<Self>;
}

impl FromAttribute for i64 {
    const TYPE_NAME: &'static str = "int";

    fn from_attribute(value: &AttributeValue) -> Option<Self> {
        match value {
            AttributeValue::Int(v) => Some(*v),
            _ => None,
        }
    }
}

/// Counts and sizes. Negative integers do not fit.
impl FromAttribute for usize {
    const TYPE_NAME: &'static str = "non-negative int";

    fn from_attribute(value: &AttributeValue) -> Option<Self> {
        match value {
            AttributeValue::Int(v) => usize::try_from(*v).ok(),
            _ => None,
        }
    }
}

impl FromAttribute for f64 {
    const TYPE_NAME: &'static str = "float";

    fn from_attribute(value: &AttributeValue) -> Option<Self> {
        match value {
            AttributeValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromAttribute for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_attribute(value: &AttributeValue) -> Option<Self> {
        match value {
            AttributeValue::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromAttribute for String {
    const TYPE_NAME: &'static str = "string";

    fn from_attribute(value: &AttributeValue) -> Option<Self> {
        match value {
            AttributeValue::Str(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl FromAttribute for Color {
    const TYPE_NAME: &'static str = "color";

    fn from_attribute(value: &AttributeValue) -> Option<Self> {
        match value {
            AttributeValue::Color(v) => Some(v.clone()),
            _ => None,
        }
    }
}

/// Failure of a typed style lookup.
///
/// A missing attribute is not an error; only a stored value of the wrong
/// type is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// The stored value does not have the requested type.
    TypeMismatch {
        /// Attribute name.
        attribute: String,
        /// Requested type.
        expected: &'static str,
        /// Stored type.
        found: &'static str,
    },
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch {
                attribute,
                expected,
                found,
            } => write!(
                f,
                "attribute '{attribute}' is a {found}, expected a {expected}"
            ),
        }
    }
}

impl std::error::Error for StyleError {}

/// Convert a raw lookup result into a typed one.
///
/// # Errors
///
/// Returns [`StyleError::TypeMismatch`] if the value is present but of
/// another type.
pub fn typed<T: FromAttribute>(
    attribute: &str,
    value: Option<&AttributeValue>,
) -> Result<Option<T>, StyleError> {
    let Some(value) = value else {
        return Ok(None);
    };
    T::from_attribute(value)
        .map(Some)
        .ok_or_else(|| StyleError::TypeMismatch {
            attribute: attribute.to_owned(),
            expected: T::TYPE_NAME,
            found: value.type_name(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_value_is_not_an_error() {
        assert_eq!(typed::<bool>("bold", None), Ok(None));
    }

    #[test]
    fn matching_types_extract() {
        assert_eq!(typed::<i64>("indent", Some(&AttributeValue::Int(4))), Ok(Some(4)));
        assert_eq!(typed::<usize>("indent", Some(&AttributeValue::Int(4))), Ok(Some(4)));
        assert_eq!(typed::<f64>("ratio", Some(&0.5.into())), Ok(Some(0.5)));
        assert_eq!(typed::<bool>("bold", Some(&true.into())), Ok(Some(true)));
        assert_eq!(
            typed::<String>("symbol", Some(&"x".into())),
            Ok(Some("x".to_owned()))
        );
        assert_eq!(
            typed::<Color>("color", Some(&Rgb::new(0, 255, 0).into())),
            Ok(Some(Color::rgb(0, 255, 0)))
        );
    }

    #[test]
    fn mismatch_reports_both_types() {
        let err = typed::<bool>("bold", Some(&"yes".into())).unwrap_err();
        assert_eq!(
            err,
            StyleError::TypeMismatch {
                attribute: "bold".into(),
                expected: "bool",
                found: "string",
            }
        );
        assert_eq!(err.to_string(), "attribute 'bold' is a string, expected a bool");
    }

    #[test]
    fn negative_int_is_not_a_size() {
        assert!(typed::<usize>("margin-x", Some(&AttributeValue::Int(-1))).is_err());
    }

    #[test]
    fn int_is_not_float() {
        assert!(typed::<f64>("ratio", Some(&AttributeValue::Int(1))).is_err());
    }
}
