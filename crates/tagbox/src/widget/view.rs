//! Derived view of a combo box.
//!
//! [`ComboBoxView`] is what a render pass produces: the badges in selection
//! order, the text input, and the menu. Hosts draw it with whatever toolkit
//! they use; the `Display` impl gives a plain-text snapshot.

use std::fmt;

/// Text shown in place of the menu entries when nothing matches.
pub const NO_RESULTS_TEXT: &str = "No results found";

/// One selected item, rendered with a remove affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeView {
    /// Positional index in the selection; clicking the badge removes this index.
    pub key: usize,
    /// The selected value.
    pub text: String,
}

/// The text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    /// Placeholder shown while the value is empty.
    pub placeholder: String,
    /// The bound input value.
    pub value: String,
    /// Whether the input has keyboard focus.
    pub focused: bool,
}

/// One selectable entry in the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntryView {
    /// The candidate text.
    pub text: String,
    /// Whether keyboard navigation currently rests on this entry.
    pub highlighted: bool,
}

/// The menu below the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuView {
    /// The filtered candidates, in candidate order.
    Entries(Vec<MenuEntryView>),
    /// The filtered list is empty.
    NoResults,
}

impl MenuView {
    /// Entry texts, or an empty list for [`MenuView::NoResults`].
    pub fn texts(&self) -> Vec<&str> {
        match self {
            MenuView::Entries(entries) => entries.iter().map(|e| e.text.as_str()).collect(),
            MenuView::NoResults => Vec::new(),
        }
    }
}

/// The full rendered structure of a multi-select combo box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboBoxView {
    /// Selected items in selection order.
    pub badges: Vec<BadgeView>,
    /// The text input.
    pub input: InputView,
    /// The menu contents.
    pub menu: MenuView,
    /// Whether the menu is open.
    pub menu_open: bool,
}

impl fmt::Display for ComboBoxView {
    /// ```text
    /// [Apple x] [Banana x] |ap_|
    /// v
    ///   Apricot
    /// > Avocado
    /// ```
    ///
    /// The menu lines are only written while the menu is open. An empty
    /// input shows its placeholder in angle brackets.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for badge in &self.badges {
            write!(f, "[{} x] ", badge.text)?;
        }

        let cursor = if self.input.focused { "_" } else { "" };
        if self.input.value.is_empty() {
            write!(f, "|<{}>{}|", self.input.placeholder, cursor)?;
        } else {
            write!(f, "|{}{}|", self.input.value, cursor)?;
        }

        if !self.menu_open {
            return Ok(());
        }

        write!(f, "\nv")?;
        match &self.menu {
            MenuView::Entries(entries) => {
                for entry in entries {
                    let marker = if entry.highlighted { ">" } else { " " };
                    write!(f, "\n{} {}", marker, entry.text)?;
                }
            }
            MenuView::NoResults => write!(f, "\n  ({NO_RESULTS_TEXT})")?,
        }
        Ok(())
    }
}
