#![forbid(unsafe_code)]

//! Checkbox list component.
//!
//! ```text
//! [x] write the parser
//! [ ] write the docs
//! ```
//!
//! Checked boxes show the `symbol` attribute of element `checkbox-list`
//! (`x` in the default style), colored through `symbol.color`.

use carrot_style::{attr, element};

use crate::component::Component;
use crate::{BoxedBlock, GridBlock, LineBlock, MarkerBlock, TextBlock};

/// Marker used when the style sets no symbol.
const FALLBACK_SYMBOL: &str = "x";

/// One entry of a [`CheckboxList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxItem {
    /// Label text.
    pub label: String,
    /// Whether the box is ticked.
    pub checked: bool,
}

/// A list of labelled checkboxes, laid out as a two-column grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckboxList {
    items: Vec<CheckboxItem>,
}

impl CheckboxList {
    /// An empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item (builder-style).
    #[must_use]
    pub fn item(mut self, label: impl Into<String>, checked: bool) -> Self {
        self.push(label, checked);
        self
    }

    /// Append an item.
    pub fn push(&mut self, label: impl Into<String>, checked: bool) {
        self.items.push(CheckboxItem {
            label: label.into(),
            checked,
        });
    }

    /// Tick or untick item `index`. Returns false if there is no such item.
    pub fn set_checked(&mut self, index: usize, checked: bool) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.checked = checked;
                true
            }
            None => false,
        }
    }

    /// Items in display order.
    #[must_use]
    pub fn items(&self) -> &[CheckboxItem] {
        &self.items
    }

    fn checkbox(checked: bool) -> LineBlock {
        let mark: BoxedBlock = if checked {
            Box::new(MarkerBlock::new(
                element::CHECKBOX_LIST,
                attr::SYMBOL,
                FALLBACK_SYMBOL,
            ))
        } else {
            Box::new(TextBlock::new(" "))
        };
        LineBlock::right([
            Box::new(TextBlock::new("[")) as BoxedBlock,
            mark,
            Box::new(TextBlock::new("] ")),
        ])
    }
}

impl Component for CheckboxList {
    fn generate(&self) -> BoxedBlock {
        let mut grid = GridBlock::new(self.items.len(), 2);
        for (row, item) in self.items.iter().enumerate() {
            grid.set(row, 0, Self::checkbox(item.checked));
            grid.set(row, 1, TextBlock::new(item.label.clone()));
        }
        Box::new(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Block;
    use crate::component::ComponentBlock;
    use crate::test_support::{assert_within_extent, canvas_of, draw};
    use carrot_core::{Extent, TargetInfo};
    use carrot_style::{Color, Style, StyleRule};

    fn todo() -> ComponentBlock<CheckboxList> {
        ComponentBlock::new(
            CheckboxList::new()
                .item("write the parser", true)
                .item("write the docs", false),
        )
    }

    #[test]
    fn renders_boxes_and_labels() {
        let style = Style::with_defaults();
        assert_eq!(
            draw(&todo(), &style),
            "[x] write the parser\n[ ] write the docs\n"
        );
        assert_eq!(
            todo().extent(&TargetInfo::file(), &style).unwrap(),
            Extent::new(20, 2)
        );
        assert_within_extent(&todo(), &style);
    }

    #[test]
    fn symbol_comes_from_style() {
        let style = Style::new().rule(
            StyleRule::new()
                .element(element::CHECKBOX_LIST)
                .set(attr::SYMBOL, "v"),
        );
        assert_eq!(
            draw(&todo(), &style),
            "[v] write the parser\n[ ] write the docs\n"
        );
    }

    #[test]
    fn checked_symbol_is_colored() {
        let canvas = canvas_of(&todo(), &Style::with_defaults());
        assert_eq!(canvas.glyph(0, 1).unwrap().fg, Color::rgb(0, 255, 0));
        assert_eq!(canvas.glyph(0, 0).unwrap().fg, Color::Default);
    }

    #[test]
    fn wide_symbol_widens_the_box_column() {
        let style = Style::new().rule(
            StyleRule::new()
                .element(element::CHECKBOX_LIST)
                .set(attr::SYMBOL, "ok"),
        );
        assert_eq!(
            draw(&todo(), &style),
            "[ok] write the parser\n[ ]  write the docs\n"
        );
    }

    #[test]
    fn editing_items() {
        let mut list = CheckboxList::new().item("a", false);
        list.push("b", false);
        assert!(list.set_checked(1, true));
        assert!(!list.set_checked(2, true));
        assert_eq!(list.items().len(), 2);
        assert!(list.items()[1].checked);
        assert_eq!(
            draw(&ComponentBlock::new(list), &Style::new()),
            "[ ] a\n[x] b\n"
        );
    }

    #[test]
    fn empty_list_draws_nothing() {
        let block = ComponentBlock::new(CheckboxList::new());
        assert_eq!(
            block.extent(&TargetInfo::file(), &Style::new()).unwrap(),
            Extent::ZERO
        );
    }
}
