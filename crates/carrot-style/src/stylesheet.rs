#![forbid(unsafe_code)]

//! Cascading styles.
//!
//! A [`Style`] is an ordered list of [`StyleRule`]s plus an optional base
//! style. Each rule carries up to three selectors (element type, id, one tag)
//! and a map of attributes. Resolution scans the rules in insertion order and
//! the first rule whose selectors all agree with the query wins *wholesale*:
//! its value for the attribute is the answer, even if that value is unset.
//! Only when no rule matches does the base style get asked.
//!
//! # Example
//! ```
//! use carrot_style::{Color, Style, StyleQuery, StyleRule};
//!
//! let mut style = Style::new();
//! style
//!     .add_rule(StyleRule::new().element("text").tag("error").set("color", Color::rgb(255, 0, 0)))
//!     .add_rule(StyleRule::new().set("color", Color::Default));
//!
//! let tags = ["error".to_owned()];
//! let query = StyleQuery::element("text").with_tags(&tags);
//! let color: Option<Color> = style.get(&query, "color").unwrap();
//! assert_eq!(color, Some(Color::rgb(255, 0, 0)));
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::attribute::{AttributeValue, FromAttribute, StyleError, typed};
use crate::color::{Color, Rgb};

/// Attribute names understood by the built-in blocks.
pub mod attr {
    /// Foreground color.
    pub const COLOR: &str = "color";
    /// Background color.
    pub const BACKGROUND_COLOR: &str = "background-color";
    /// Bold text.
    pub const BOLD: &str = "bold";
    /// Indentation in columns.
    pub const INDENT: &str = "indent";
    /// Generic text content.
    pub const CONTENT: &str = "content";
    /// Horizontal frame margin.
    pub const MARGIN_X: &str = "margin-x";
    /// Vertical frame margin.
    pub const MARGIN_Y: &str = "margin-y";
    /// Marker symbol.
    pub const SYMBOL: &str = "symbol";
}

/// Element type names of the built-in blocks.
pub mod element {
    /// Text blocks.
    pub const TEXT: &str = "text";
    /// Style-resolved indent blocks.
    pub const INDENT: &str = "indent";
    /// Frames with fixed margins.
    pub const FRAME: &str = "frame";
    /// Frames with style-resolved margins.
    pub const FRAMED_BLOCK: &str = "framed-block";
    /// Caret underlines.
    pub const CARET_UNDERLINE: &str = "caret-underline";
    /// Checkbox lists.
    pub const CHECKBOX_LIST: &str = "checkbox-list";
}

/// What a block is, for selector matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleQuery<'a> {
    /// Element type of the block.
    pub element: &'a str,
    /// Id of the block, if it has one.
    pub id: Option<&'a str>,
    /// Tags of the block.
    pub tags: &'a [String],
}

impl<'a> StyleQuery<'a> {
    /// Query for an element type with no id and no tags.
    #[must_use]
    pub const fn element(element: &'a str) -> Self {
        Self {
            element,
            id: None,
            tags: &[],
        }
    }

    /// Set the id.
    #[must_use]
    pub const fn with_id(mut self, id: Option<&'a str>) -> Self {
        self.id = id;
        self
    }

    /// Set the tags.
    #[must_use]
    pub const fn with_tags(mut self, tags: &'a [String]) -> Self {
        self.tags = tags;
        self
    }
}

/// One cascade entry: optional selectors and the attributes it sets.
///
/// Built with a consuming builder; once added to a [`Style`] it is never
/// modified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleRule {
    element: Option<String>,
    id: Option<String>,
    tag: Option<String>,
    attributes: HashMap<String, AttributeValue>,
}

impl StyleRule {
    /// A rule with no selectors (matches everything) and no attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only match blocks of this element type.
    #[must_use]
    pub fn element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }

    /// Only match blocks with this id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Only match blocks carrying this tag.
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Set an attribute.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Check whether every declared selector agrees with the query.
    #[must_use]
    pub fn matches(&self, query: &StyleQuery<'_>) -> bool {
        let element_matches = self.element.as_deref().is_none_or(|e| e == query.element);
        let id_matches = self.id.as_deref().is_none_or(|id| query.id == Some(id));
        let tag_matches = self
            .tag
            .as_deref()
            .is_none_or(|tag| query.tags.iter().any(|t| t == tag));
        element_matches && id_matches && tag_matches
    }

    /// The value this rule sets for `name`, if any.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }
}

/// An ordered, first-match-wins cascade with an optional base style.
#[derive(Debug, Clone, Default)]
pub struct Style {
    rules: Vec<StyleRule>,
    base: Option<Arc<Style>>,
}

impl Style {
    /// An empty style; every lookup yields no value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty style that falls back to `base`.
    #[must_use]
    pub fn with_base(base: Arc<Style>) -> Self {
        Self {
            rules: Vec::new(),
            base: Some(base),
        }
    }

    /// The built-in default style.
    ///
    /// Rules, in order:
    /// 1. tag `bold`: bold on
    /// 2. element `checkbox-list`: green `symbol.color`, `symbol` "x"
    /// 3. element `caret-underline`: green `caret.color`, `caret.bold` off
    /// 4. everything: default colors, bold off, indent 4, empty content
    ///
    /// The catch-all comes last so it does not shadow the others.
    #[must_use]
    pub fn with_defaults() -> Self {
        const DEFAULT_INDENT: i64 = 4;
        let green = Rgb::new(0, 255, 0);

        let mut style = Self::new();
        style
            .add_rule(StyleRule::new().tag("bold").set(attr::BOLD, true))
            .add_rule(
                StyleRule::new()
                    .element(element::CHECKBOX_LIST)
                    .set("symbol.color", green)
                    .set(attr::SYMBOL, "x"),
            )
            .add_rule(
                StyleRule::new()
                    .element(element::CARET_UNDERLINE)
                    .set("caret.color", green)
                    .set("caret.bold", false),
            )
            .add_rule(
                StyleRule::new()
                    .set(attr::COLOR, Color::Default)
                    .set(attr::BACKGROUND_COLOR, Color::Default)
                    .set(attr::BOLD, false)
                    .set(attr::INDENT, DEFAULT_INDENT)
                    .set(attr::CONTENT, ""),
            );
        style
    }

    /// Append a rule. Rules added earlier take precedence.
    pub fn add_rule(&mut self, rule: StyleRule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    /// Builder form of [`Style::add_rule`].
    #[must_use]
    pub fn rule(mut self, rule: StyleRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Rules in precedence order.
    #[must_use]
    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    /// The base style, if any.
    #[must_use]
    pub fn base(&self) -> Option<&Style> {
        self.base.as_deref()
    }

    /// First rule of this style (not the base) matching the query.
    #[must_use]
    pub fn matching_rule(&self, query: &StyleQuery<'_>) -> Option<&StyleRule> {
        self.rules.iter().find(|rule| rule.matches(query))
    }

    /// Resolve an attribute.
    ///
    /// The first matching rule decides, even when it leaves the attribute
    /// unset. With no matching rule the base style is asked; with no base
    /// the result is `None`.
    #[must_use]
    pub fn resolve(&self, query: &StyleQuery<'_>, name: &str) -> Option<&AttributeValue> {
        match self.matching_rule(query) {
            Some(rule) => rule.attribute(name),
            None => self.base.as_ref()?.resolve(query, name),
        }
    }

    /// Resolve an attribute as a `T`.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::TypeMismatch`] if the resolved value is not a
    /// `T`. An unresolved attribute is `Ok(None)`.
    pub fn get<T: FromAttribute>(
        &self,
        query: &StyleQuery<'_>,
        name: &str,
    ) -> Result<Option<T>, StyleError> {
        typed(name, self.resolve(query, name))
    }

    /// Resolve a color attribute.
    ///
    /// # Errors
    ///
    /// Fails if the stored value is not a color.
    pub fn color(&self, query: &StyleQuery<'_>, name: &str) -> Result<Option<Color>, StyleError> {
        self.get(query, name)
    }

    /// Resolve a boolean attribute.
    ///
    /// # Errors
    ///
    /// Fails if the stored value is not a bool.
    pub fn flag(&self, query: &StyleQuery<'_>, name: &str) -> Result<Option<bool>, StyleError> {
        self.get(query, name)
    }

    /// Resolve a non-negative integer attribute.
    ///
    /// # Errors
    ///
    /// Fails if the stored value is not a non-negative integer.
    pub fn size(&self, query: &StyleQuery<'_>, name: &str) -> Result<Option<usize>, StyleError> {
        self.get(query, name)
    }

    /// Resolve a string attribute.
    ///
    /// # Errors
    ///
    /// Fails if the stored value is not a string.
    pub fn text(&self, query: &StyleQuery<'_>, name: &str) -> Result<Option<String>, StyleError> {
        self.get(query, name)
    }
}
