//! Multi-select combo box widget.
//!
//! The MultiComboBox combines:
//! - A text input that filters the candidate list as the user types
//! - A dropdown menu of the filtered candidates
//! - A row of removable badges, one per selected item
//!
//! # Example
//!
//! ```
//! use tagbox::widget::{Key, MultiComboBox};
//!
//! let mut combo = MultiComboBox::new()
//!     .with_menu_list(["Apple", "Banana", "Apricot"])
//!     .with_placeholder("Pick fruit");
//!
//! combo.selection_changed.connect(|change| {
//!     println!("Selected {} ({} total)", change.value, change.selected_items.len());
//! });
//!
//! // The user typed "ap" into the input.
//! combo.handle_input_keyup(Key::P, "ap");
//! assert_eq!(combo.filtered_menu_list(), ["Apple", "Apricot"]);
//!
//! // ...and clicked "Apricot".
//! combo.handle_select_change("Apricot");
//! assert_eq!(combo.selected_items(), vec!["Apricot"]);
//! assert_eq!(combo.value(), "");
//! ```
//!
//! Every mutating operation re-derives the filtered menu list before it
//! returns, so [`MultiComboBox::filtered_menu_list`] is never stale.

use tagbox_core::logging::{span_names, targets};
use tagbox_core::{PerfSpan, Property, PropertyError, PropertyMeta, Signal};

use super::dropdown::{Dropdown, MenuVisibility};
use super::events::{ClickEvent, ClickTarget, Key, KeyPressEvent, KeyReleaseEvent, WidgetEvent};
use super::filter::MenuFilter;
use super::input_field::InputField;
use super::view::{BadgeView, ComboBoxView, InputView, MenuEntryView, MenuView};
use crate::error::{Error, Result};
use crate::options::ComboBoxOptions;

/// Introspection table for the combo box configuration surface.
///
/// `placeholder` and `value` are reflected to string attributes and can be
/// written with [`MultiComboBox::set_attribute`].
pub const PROPERTIES: &[PropertyMeta] = &[
    PropertyMeta::new("placeholder", "String", false, None).reflected(),
    PropertyMeta::new("value", "String", false, Some("value_changed")).reflected(),
    PropertyMeta::new("menuList", "Vec<String>", false, None),
    PropertyMeta::new("selectedItems", "Vec<String>", false, Some("selected_items_changed")),
    PropertyMeta::new("filterMenu", "MenuFilter", false, None),
];

/// Payload of [`MultiComboBox::selection_changed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChanged {
    /// The value that was just committed.
    pub value: String,
    /// All selections after the commit, in selection order.
    pub selected_items: Vec<String>,
}

/// Payload of [`MultiComboBox::item_removed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRemoved {
    /// Position the item occupied before removal.
    pub index: usize,
    /// The removed value.
    pub value: String,
}

/// A multi-select combo box.
///
/// The menu's open/closed state is delegated to a [`MenuVisibility`]
/// controller, [`Dropdown`] unless another one is supplied through
/// [`MultiComboBox::with_menu_controller`].
///
/// # Signals
///
/// - `selection_changed(SelectionChanged)`: Emitted on every commit
/// - `item_removed(ItemRemoved)`: Emitted when a selection is removed
/// - `selected_items_changed(Vec<String>)`: Emitted whenever the selections change
/// - `value_changed(String)`: Emitted when the input value changes
pub struct MultiComboBox<M: MenuVisibility = Dropdown> {
    /// Placeholder shown in the empty input.
    placeholder: Property<String>,

    /// Current input text.
    value: Property<String>,

    /// Full candidate list.
    menu_list: Property<Vec<String>>,

    /// Committed selections, in selection order.
    selected_items: Property<Vec<String>>,

    /// Predicate deciding which candidates are shown.
    filter_menu: Property<MenuFilter>,

    /// Candidates currently shown, derived from the fields above.
    filtered_menu_list: Vec<String>,

    /// The embedded text input.
    input: InputField,

    /// Keyboard-highlighted entry of the filtered list.
    highlighted: Option<usize>,

    auto_select_exact_match: bool,
    close_menu_on_removal: bool,
    close_menu_on_commit: bool,

    /// Menu visibility controller.
    menu: M,

    /// Whether state changed since the last render.
    needs_render: bool,

    // Signals
    /// Signal emitted when a candidate is committed.
    pub selection_changed: Signal<SelectionChanged>,
    /// Signal emitted when a selection is removed.
    pub item_removed: Signal<ItemRemoved>,
    /// Signal emitted when the selection list changes.
    pub selected_items_changed: Signal<Vec<String>>,
    /// Signal emitted when the input value changes.
    pub value_changed: Signal<String>,
}

impl MultiComboBox<Dropdown> {
    /// Create a combo box with default settings and a [`Dropdown`] menu.
    pub fn new() -> Self {
        Self::with_menu_controller(Dropdown::new())
    }

    /// Create a combo box from declarative options.
    pub fn from_options(options: ComboBoxOptions) -> Self {
        let mut combo = Self::new();
        combo.apply_options(options);
        combo
    }
}

impl Default for MultiComboBox<Dropdown> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: MenuVisibility> MultiComboBox<M> {
    /// Create a combo box driving the given menu controller.
    pub fn with_menu_controller(menu: M) -> Self {
        let defaults = ComboBoxOptions::default();
        let mut combo = Self {
            placeholder: Property::new(defaults.placeholder),
            value: Property::new(defaults.value),
            menu_list: Property::new(defaults.menu_list),
            selected_items: Property::new(defaults.selected_items),
            filter_menu: Property::new(MenuFilter::default()),
            filtered_menu_list: Vec::new(),
            input: InputField::new(),
            highlighted: None,
            auto_select_exact_match: defaults.auto_select_exact_match,
            close_menu_on_removal: defaults.close_menu_on_removal,
            close_menu_on_commit: defaults.close_menu_on_commit,
            menu,
            needs_render: true,
            selection_changed: Signal::new(),
            item_removed: Signal::new(),
            selected_items_changed: Signal::new(),
            value_changed: Signal::new(),
        };
        combo.derive();
        combo
    }

    /// Apply every field of `options`, notifying as the setters do.
    pub fn apply_options(&mut self, options: ComboBoxOptions) {
        self.auto_select_exact_match = options.auto_select_exact_match;
        self.close_menu_on_removal = options.close_menu_on_removal;
        self.close_menu_on_commit = options.close_menu_on_commit;
        self.set_placeholder(options.placeholder);
        self.set_menu_list(options.menu_list);
        self.set_selected_items(options.selected_items);
        self.set_value(options.value);
    }

    /// Snapshot the current configuration.
    pub fn options(&self) -> ComboBoxOptions {
        ComboBoxOptions {
            placeholder: self.placeholder(),
            value: self.value(),
            menu_list: self.menu_list(),
            selected_items: self.selected_items(),
            auto_select_exact_match: self.auto_select_exact_match,
            close_menu_on_removal: self.close_menu_on_removal,
            close_menu_on_commit: self.close_menu_on_commit,
        }
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// Get the input placeholder.
    pub fn placeholder(&self) -> String {
        self.placeholder.get()
    }

    /// Set the input placeholder.
    pub fn set_placeholder(&mut self, text: impl Into<String>) {
        if self.placeholder.set(text.into()) {
            self.update();
        }
    }

    /// Set placeholder using builder pattern.
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.set_placeholder(text);
        self
    }

    /// Get the current input text.
    pub fn value(&self) -> String {
        self.value.get()
    }

    /// Set the current input text.
    ///
    /// This only updates state; it never auto-selects. Typing goes through
    /// [`handle_input_keyup`](Self::handle_input_keyup).
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.input.set_text(value.clone());
        self.store_value(value);
        self.derive();
    }

    /// Set value using builder pattern.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    /// Get the candidate list.
    pub fn menu_list(&self) -> Vec<String> {
        self.menu_list.get()
    }

    /// Replace the candidate list.
    pub fn set_menu_list<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.menu_list.set(items.into_iter().map(Into::into).collect());
        self.derive();
    }

    /// Set the candidate list using builder pattern.
    pub fn with_menu_list<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_menu_list(items);
        self
    }

    /// Get the selections, in selection order.
    pub fn selected_items(&self) -> Vec<String> {
        self.selected_items.get()
    }

    /// Replace the selections.
    pub fn set_selected_items<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        if self.selected_items.set(items.clone()) {
            self.selected_items_changed.emit(items);
        }
        self.derive();
    }

    /// Set the selections using builder pattern.
    pub fn with_selected_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_selected_items(items);
        self
    }

    /// Get the menu filter.
    pub fn filter_menu(&self) -> MenuFilter {
        self.filter_menu.get()
    }

    /// Replace the menu filter.
    pub fn set_filter_menu(&mut self, filter: MenuFilter) {
        self.filter_menu.set(filter);
        self.derive();
    }

    /// Set the menu filter using builder pattern.
    pub fn with_filter_menu(mut self, filter: MenuFilter) -> Self {
        self.set_filter_menu(filter);
        self
    }

    /// The candidates currently shown in the menu.
    pub fn filtered_menu_list(&self) -> &[String] {
        &self.filtered_menu_list
    }

    // =========================================================================
    // Behavior flags
    // =========================================================================

    /// Whether typing a candidate exactly (ignoring case) commits it.
    pub fn auto_select_exact_match(&self) -> bool {
        self.auto_select_exact_match
    }

    /// Enable or disable exact-match auto-selection.
    pub fn set_auto_select_exact_match(&mut self, enabled: bool) {
        self.auto_select_exact_match = enabled;
    }

    /// Set exact-match auto-selection using builder pattern.
    pub fn with_auto_select_exact_match(mut self, enabled: bool) -> Self {
        self.auto_select_exact_match = enabled;
        self
    }

    /// Whether removing an item closes the menu.
    pub fn close_menu_on_removal(&self) -> bool {
        self.close_menu_on_removal
    }

    /// Choose whether removing an item closes the menu.
    pub fn set_close_menu_on_removal(&mut self, enabled: bool) {
        self.close_menu_on_removal = enabled;
    }

    /// Set close-on-removal using builder pattern.
    pub fn with_close_menu_on_removal(mut self, enabled: bool) -> Self {
        self.close_menu_on_removal = enabled;
        self
    }

    /// Whether committing an item closes the menu.
    pub fn close_menu_on_commit(&self) -> bool {
        self.close_menu_on_commit
    }

    /// Choose whether committing an item closes the menu.
    pub fn set_close_menu_on_commit(&mut self, enabled: bool) {
        self.close_menu_on_commit = enabled;
    }

    /// Set close-on-commit using builder pattern.
    pub fn with_close_menu_on_commit(mut self, enabled: bool) -> Self {
        self.close_menu_on_commit = enabled;
        self
    }

    // =========================================================================
    // Attribute reflection
    // =========================================================================

    /// Read a reflected attribute by name.
    pub fn attribute(&self, name: &str) -> Option<String> {
        match name {
            "placeholder" => Some(self.placeholder()),
            "value" => Some(self.value()),
            _ => None,
        }
    }

    /// Write a reflected attribute by name.
    ///
    /// Only string properties are reflected. Other known properties report
    /// [`PropertyError::ReadOnly`]; unknown names report
    /// [`PropertyError::NotFound`].
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        let meta = PropertyMeta::find(PROPERTIES, name).ok_or_else(|| PropertyError::not_found(name))?;
        match meta.name {
            "placeholder" => self.set_placeholder(value),
            "value" => self.set_value(value),
            _ => return Err(PropertyError::read_only(name).into()),
        }
        Ok(())
    }

    // =========================================================================
    // Menu and input state
    // =========================================================================

    /// The menu controller.
    pub fn menu(&self) -> &M {
        &self.menu
    }

    /// Mutable access to the menu controller.
    ///
    /// Changing visibility directly is allowed; the next render picks it up.
    pub fn menu_mut(&mut self) -> &mut M {
        self.needs_render = true;
        &mut self.menu
    }

    /// Whether the menu is open.
    pub fn is_menu_open(&self) -> bool {
        self.menu.is_menu_open()
    }

    /// The embedded text input.
    pub fn input(&self) -> &InputField {
        &self.input
    }

    /// Index of the keyboard-highlighted entry in the filtered list.
    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted
    }

    /// Whether state changed since the last [`render`](Self::render).
    pub fn needs_render(&self) -> bool {
        self.needs_render
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Interpret a key release in the text input.
    ///
    /// `input_text` is the input's content after the key took effect. A
    /// backspace while the current value is already empty removes the last
    /// selection; any other key opens the menu, stores `input_text` as the
    /// value and refilters. With exact-match auto-selection on, a value that
    /// equals any candidate (ignoring case) commits that candidate, even one
    /// that is already selected.
    pub fn handle_input_keyup(&mut self, key: Key, input_text: &str) {
        if key == Key::Backspace && self.value.with(String::is_empty) {
            self.remove_item(None);
            return;
        }

        self.menu.show_menu();
        self.input.set_text(input_text);
        self.store_value(input_text.to_string());

        if self.auto_select_exact_match {
            if let Some(candidate) = self.exact_match(input_text) {
                tracing::debug!(target: targets::COMBO_BOX, value = %candidate, "exact match auto-selected");
                self.commit(candidate);
                return;
            }
        }

        self.derive();
    }

    /// Commit the menu entry showing `text`.
    pub fn handle_select_change(&mut self, text: &str) {
        self.commit(text);
    }

    /// Append `value` to the selections and reset the input.
    ///
    /// The input is cleared and focused, `selection_changed` fires, and the
    /// menu closes unless `close_menu_on_commit` is off. Uniqueness is not
    /// enforced here.
    pub fn commit(&mut self, value: impl Into<String>) {
        let value = value.into();

        self.store_value(String::new());
        self.input.clear();

        let selected = self.selected_items.update(|items| {
            items.push(value.clone());
            items.clone()
        });
        self.input.set_focused(true);
        self.highlighted = None;

        tracing::debug!(
            target: targets::COMBO_BOX,
            value = %value,
            selected = selected.len(),
            "item committed"
        );

        self.selected_items_changed.emit(selected.clone());
        self.selection_changed.emit(SelectionChanged {
            value,
            selected_items: selected,
        });

        if self.close_menu_on_commit {
            self.menu.hide_menu();
        }
        self.derive();
    }

    /// Remove one selection.
    ///
    /// `Some(index)` removes that position, shifting later items left;
    /// `None` removes the last item. An empty list or an out-of-range index
    /// removes nothing. Returns the removed value.
    pub fn remove_item(&mut self, index: Option<usize>) -> Option<String> {
        let removed = self.selected_items.update(|items| match index {
            Some(i) if i < items.len() => Some((i, items.remove(i))),
            Some(_) => None,
            None => items.pop().map(|value| (items.len(), value)),
        });

        if self.close_menu_on_removal {
            self.menu.hide_menu();
            self.highlighted = None;
        }

        let removed = match removed {
            Some((index, value)) => {
                tracing::debug!(target: targets::COMBO_BOX, index, value = %value, "item removed");
                self.item_removed.emit(ItemRemoved {
                    index,
                    value: value.clone(),
                });
                self.selected_items_changed.emit(self.selected_items.get());
                Some(value)
            }
            None => {
                if let Some(index) = index {
                    tracing::warn!(
                        target: targets::COMBO_BOX,
                        index,
                        len = self.selected_items.with(Vec::len),
                        "removal index out of range"
                    );
                }
                None
            }
        };

        self.derive();
        removed
    }

    /// Remove the item whose badge was clicked.
    ///
    /// The click is accepted so it does not reach the container or the
    /// document. Clicks on anything but a badge are left untouched.
    pub fn handle_remove_badge(&mut self, event: &mut ClickEvent) -> Result<Option<String>> {
        let ClickTarget::Badge { key } = &event.target else {
            return Ok(None);
        };
        event.base.accept();

        let index: usize = key.trim().parse().map_err(|_| Error::invalid_badge_key(key.as_str()))?;
        Ok(self.remove_item(Some(index)))
    }

    /// Open the menu and focus the input after a click on the container.
    ///
    /// The click is accepted so the document-level listener does not
    /// close the menu again.
    pub fn handle_toggle_user_input(&mut self, event: &mut ClickEvent) {
        event.base.accept();
        self.menu.show_menu();
        self.input.set_focused(true);
        self.update();
    }

    /// Dispatch an input event. Returns `true` when the widget handled it.
    pub fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::KeyPress(e) => self.handle_key_press(e),
            WidgetEvent::KeyRelease(e) => self.handle_key_release(e),
            WidgetEvent::Click(e) => self.handle_click(e),
            WidgetEvent::FocusIn => {
                self.input.set_focused(true);
                self.update();
                true
            }
            WidgetEvent::FocusOut => {
                self.input.set_focused(false);
                self.update();
                true
            }
        }
    }

    /// Derive the filtered list and produce the view.
    ///
    /// Calling this twice without an intervening change yields identical views.
    pub fn render(&mut self) -> ComboBoxView {
        let _span = PerfSpan::new(span_names::RENDER);
        self.derive();
        self.needs_render = false;

        let badges = self.selected_items.with(|items| {
            items
                .iter()
                .enumerate()
                .map(|(key, text)| BadgeView {
                    key,
                    text: text.clone(),
                })
                .collect()
        });

        let menu = if self.filtered_menu_list.is_empty() {
            MenuView::NoResults
        } else {
            MenuView::Entries(
                self.filtered_menu_list
                    .iter()
                    .enumerate()
                    .map(|(i, text)| MenuEntryView {
                        text: text.clone(),
                        highlighted: self.highlighted == Some(i),
                    })
                    .collect(),
            )
        };

        ComboBoxView {
            badges,
            input: InputView {
                placeholder: self.placeholder(),
                value: self.value(),
                focused: self.input.is_focused(),
            },
            menu,
            menu_open: self.menu.is_menu_open(),
        }
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    fn handle_key_press(&mut self, event: &mut KeyPressEvent) -> bool {
        let open = self.menu.is_menu_open();
        let count = self.filtered_menu_list.len();

        let handled = match event.key {
            Key::ArrowDown => {
                if !open {
                    self.menu.show_menu();
                    self.highlighted = (count > 0).then_some(0);
                } else if count > 0 {
                    self.highlighted = Some(match self.highlighted {
                        Some(i) if i + 1 < count => i + 1,
                        _ => 0,
                    });
                }
                true
            }
            Key::ArrowUp => {
                if open && count > 0 {
                    self.highlighted = Some(match self.highlighted {
                        Some(i) if i > 0 => i - 1,
                        _ => count - 1,
                    });
                    true
                } else {
                    false
                }
            }
            Key::Enter => match self.highlighted {
                Some(i) if open => {
                    let text = self.filtered_menu_list[i].clone();
                    self.commit(text);
                    true
                }
                _ => false,
            },
            Key::Escape => {
                if open {
                    self.menu.hide_menu();
                    self.highlighted = None;
                }
                open
            }
            Key::Backspace => {
                self.input.delete_backward();
                true
            }
            _ => {
                let typing = !event.text.is_empty() && !event.modifiers.control && !event.modifiers.meta;
                if typing {
                    self.input.insert(&event.text);
                }
                typing
            }
        };

        if handled {
            event.base.accept();
            self.update();
        }
        handled
    }

    fn handle_key_release(&mut self, event: &mut KeyReleaseEvent) -> bool {
        if Self::is_menu_control(event.key) {
            return false;
        }
        let text = self.input.text().to_string();
        self.handle_input_keyup(event.key, &text);
        event.base.accept();
        true
    }

    fn handle_click(&mut self, event: &mut ClickEvent) -> bool {
        let handled = match event.target.clone() {
            ClickTarget::Container => {
                self.handle_toggle_user_input(event);
                true
            }
            ClickTarget::Badge { key } => match self.handle_remove_badge(event) {
                Ok(_) => true,
                Err(err) => {
                    tracing::warn!(target: targets::COMBO_BOX, key = %key, error = %err, "ignoring badge click");
                    false
                }
            },
            ClickTarget::MenuEntry { text } => {
                event.base.accept();
                self.handle_select_change(&text);
                true
            }
            ClickTarget::Outside => false,
        };

        let closed = self.menu.handle_document_click(event);
        if closed {
            self.highlighted = None;
            self.update();
        }
        handled || closed
    }

    /// Keys whose release is not treated as typing.
    fn is_menu_control(key: Key) -> bool {
        key.is_navigation() || matches!(key, Key::Enter | Key::Escape | Key::Tab)
    }

    // =========================================================================
    // Derivation
    // =========================================================================

    /// Recompute the filtered list from the value, candidates and selections.
    fn derive(&mut self) {
        let value = self.value.get();
        let filter = self.filter_menu.get();
        let filtered = self.selected_items.with(|selected| {
            self.menu_list
                .with(|menu| filter.filter_candidates(menu, &value, selected))
        });

        tracing::trace!(
            target: targets::COMBO_BOX,
            span = span_names::FILTER,
            candidates = self.menu_list.with(Vec::len),
            matches = filtered.len(),
            "filtered menu list"
        );

        // A highlight indexes the old list; it never carries over to new contents.
        if filtered != self.filtered_menu_list {
            self.highlighted = None;
            self.filtered_menu_list = filtered;
        }
        self.update();
    }

    /// The first candidate equal to `text`, ignoring case.
    ///
    /// The whole candidate list is searched; the menu filter plays no part.
    fn exact_match(&self, text: &str) -> Option<String> {
        if text.is_empty() {
            return None;
        }
        let needle = text.to_lowercase();
        self.menu_list.with(|menu| {
            menu.iter()
                .find(|candidate| candidate.to_lowercase() == needle)
                .cloned()
        })
    }

    fn store_value(&mut self, value: String) {
        if self.value.set(value.clone()) {
            self.value_changed.emit(value);
        }
    }

    fn update(&mut self) {
        self.needs_render = true;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::events::KeyboardModifiers;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn fruit() -> MultiComboBox {
        MultiComboBox::new().with_menu_list(["Apple", "Banana", "Apricot"])
    }

    fn type_text(combo: &mut MultiComboBox, text: &str) {
        for ch in text.chars() {
            let mut press = WidgetEvent::KeyPress(KeyPressEvent::new(
                Key::Unknown,
                KeyboardModifiers::NONE,
                ch.to_string(),
                false,
            ));
            combo.event(&mut press);
            let mut release = WidgetEvent::KeyRelease(KeyReleaseEvent::new(Key::Unknown, KeyboardModifiers::NONE));
            combo.event(&mut release);
        }
    }

    fn press(combo: &mut MultiComboBox, key: Key) -> bool {
        let handled = combo.event(&mut WidgetEvent::KeyPress(KeyPressEvent::key(key)));
        combo.event(&mut WidgetEvent::KeyRelease(KeyReleaseEvent::new(key, KeyboardModifiers::NONE)));
        handled
    }

    #[test]
    fn test_creation_defaults() {
        let combo = MultiComboBox::new();
        assert_eq!(combo.placeholder(), "placeholder");
        assert_eq!(combo.value(), "");
        assert!(combo.menu_list().is_empty());
        assert!(combo.selected_items().is_empty());
        assert!(combo.filtered_menu_list().is_empty());
        assert!(!combo.is_menu_open());
        assert!(combo.auto_select_exact_match());
        assert!(combo.close_menu_on_removal());
        assert!(combo.close_menu_on_commit());
    }

    #[test]
    fn test_builder_pattern() {
        let combo = MultiComboBox::new()
            .with_placeholder("Pick")
            .with_menu_list(["A", "B"])
            .with_selected_items(["B"])
            .with_value("a")
            .with_auto_select_exact_match(false)
            .with_close_menu_on_removal(false)
            .with_close_menu_on_commit(false);

        assert_eq!(combo.placeholder(), "Pick");
        assert_eq!(combo.value(), "a");
        assert_eq!(combo.input().text(), "a");
        assert_eq!(combo.filtered_menu_list(), ["A"]);
        assert!(!combo.auto_select_exact_match());
        assert!(!combo.close_menu_on_removal());
        assert!(!combo.close_menu_on_commit());
    }

    #[test]
    fn test_keyup_filters_and_opens_menu() {
        let mut combo = fruit();
        combo.handle_input_keyup(Key::P, "ap");

        assert!(combo.is_menu_open());
        assert_eq!(combo.value(), "ap");
        assert_eq!(combo.filtered_menu_list(), ["Apple", "Apricot"]);
    }

    #[test]
    fn test_commit_resets_value_and_appends() {
        let mut combo = fruit();
        combo.handle_input_keyup(Key::P, "ap");
        combo.handle_select_change("Apple");

        assert_eq!(combo.selected_items(), vec!["Apple"]);
        assert_eq!(combo.value(), "");
        assert!(combo.input().is_empty());
        assert!(combo.input().is_focused());
        assert!(!combo.is_menu_open());

        combo.handle_input_keyup(Key::P, "ap");
        assert_eq!(combo.filtered_menu_list(), ["Apricot"]);
    }

    #[test]
    fn test_commit_keeps_menu_open_when_configured() {
        let mut combo = fruit().with_close_menu_on_commit(false);
        combo.handle_input_keyup(Key::A, "a");
        combo.handle_select_change("Apple");
        assert!(combo.is_menu_open());
    }

    #[test]
    fn test_commit_does_not_deduplicate() {
        let mut combo = fruit();
        combo.commit("Apple");
        combo.commit("Apple");
        assert_eq!(combo.selected_items(), vec!["Apple", "Apple"]);
    }

    #[test]
    fn test_selection_changed_signal() {
        let mut combo = fruit();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        combo.selection_changed.connect(move |change| {
            received_clone.lock().push(change.clone());
        });

        combo.handle_select_change("Banana");
        combo.handle_select_change("Apple");

        let received = received.lock();
        assert_eq!(received.len(), 2);
        assert_eq!(received[1].value, "Apple");
        assert_eq!(received[1].selected_items, vec!["Banana", "Apple"]);
    }

    #[test]
    fn test_remove_by_index_including_zero() {
        let mut combo = fruit().with_selected_items(["Apple", "Banana", "Apricot"]);

        assert_eq!(combo.remove_item(Some(1)), Some("Banana".to_string()));
        assert_eq!(combo.selected_items(), vec!["Apple", "Apricot"]);

        assert_eq!(combo.remove_item(Some(0)), Some("Apple".to_string()));
        assert_eq!(combo.selected_items(), vec!["Apricot"]);
    }

    #[test]
    fn test_remove_without_index_pops_last() {
        let mut combo = fruit().with_selected_items(["Apple", "Banana"]);
        assert_eq!(combo.remove_item(None), Some("Banana".to_string()));
        assert_eq!(combo.selected_items(), vec!["Apple"]);
    }

    #[test]
    fn test_remove_on_empty_or_out_of_range_is_noop() {
        let mut combo = fruit();
        assert_eq!(combo.remove_item(None), None);
        assert!(combo.selected_items().is_empty());

        combo.set_selected_items(["Apple"]);
        assert_eq!(combo.remove_item(Some(5)), None);
        assert_eq!(combo.selected_items(), vec!["Apple"]);
    }

    #[test]
    fn test_removal_signals() {
        let mut combo = fruit().with_selected_items(["Apple", "Banana"]);
        let removed = Arc::new(Mutex::new(Vec::new()));
        let changes = Arc::new(Mutex::new(Vec::new()));

        let removed_clone = removed.clone();
        combo.item_removed.connect(move |item| removed_clone.lock().push(item.clone()));
        let changes_clone = changes.clone();
        combo
            .selected_items_changed
            .connect(move |items| changes_clone.lock().push(items.clone()));

        combo.remove_item(Some(0));
        combo.remove_item(Some(9));

        assert_eq!(
            *removed.lock(),
            vec![ItemRemoved {
                index: 0,
                value: "Apple".into()
            }]
        );
        assert_eq!(*changes.lock(), vec![vec!["Banana".to_string()]]);
    }

    #[test]
    fn test_removal_closes_menu_by_default() {
        let mut combo = fruit().with_selected_items(["Apple"]);
        combo.menu_mut().show_menu();
        combo.remove_item(None);
        assert!(!combo.is_menu_open());

        let mut combo = fruit()
            .with_selected_items(["Apple"])
            .with_close_menu_on_removal(false);
        combo.menu_mut().show_menu();
        combo.remove_item(None);
        assert!(combo.is_menu_open());
    }

    #[test]
    fn test_removal_makes_item_available_again() {
        let mut combo = fruit().with_selected_items(["Apple"]);
        combo.handle_input_keyup(Key::A, "a");
        assert_eq!(combo.filtered_menu_list(), ["Apricot"]);

        combo.remove_item(Some(0));
        assert_eq!(combo.filtered_menu_list(), ["Apple", "Apricot"]);
    }

    #[test]
    fn test_backspace_on_empty_value_pops() {
        let mut combo = fruit().with_selected_items(["Apple", "Banana"]);
        combo.handle_input_keyup(Key::Backspace, "");
        assert_eq!(combo.selected_items(), vec!["Apple"]);
    }

    #[test]
    fn test_backspace_with_text_only_updates_value() {
        let mut combo = fruit().with_selected_items(["Apple"]);
        combo.handle_input_keyup(Key::B, "b");

        // The key-up arrives after the last character was deleted.
        combo.handle_input_keyup(Key::Backspace, "");
        assert_eq!(combo.value(), "");
        assert_eq!(combo.selected_items(), vec!["Apple"]);

        combo.handle_input_keyup(Key::Backspace, "");
        assert!(combo.selected_items().is_empty());
    }

    #[test]
    fn test_exact_match_commits_candidate_spelling() {
        let mut combo = MultiComboBox::new().with_menu_list(["Apple"]);
        combo.handle_input_keyup(Key::E, "aPPLE");

        assert_eq!(combo.selected_items(), vec!["Apple"]);
        assert_eq!(combo.value(), "");
    }

    #[test]
    fn test_exact_match_disabled() {
        let mut combo = MultiComboBox::new()
            .with_menu_list(["Apple"])
            .with_auto_select_exact_match(false);
        combo.handle_input_keyup(Key::E, "apple");

        assert!(combo.selected_items().is_empty());
        assert_eq!(combo.value(), "apple");
        assert_eq!(combo.filtered_menu_list(), ["Apple"]);
    }

    #[test]
    fn test_exact_match_selects_already_selected_candidate() {
        let mut combo = MultiComboBox::new()
            .with_menu_list(["Apple"])
            .with_selected_items(["Apple"]);
        combo.handle_input_keyup(Key::E, "apple");

        assert_eq!(combo.selected_items(), vec!["Apple", "Apple"]);
        assert_eq!(combo.value(), "");
    }

    #[test]
    fn test_exact_match_ignores_menu_filter() {
        let mut combo = MultiComboBox::new()
            .with_menu_list(["Apple"])
            .with_filter_menu(MenuFilter::new(|input, candidate, _| candidate.len() > input.len()));

        combo.handle_input_keyup(Key::E, "apple");

        assert_eq!(combo.selected_items(), vec!["Apple"]);
        assert_eq!(combo.value(), "");
    }

    #[test]
    fn test_custom_filter_allows_duplicates() {
        let mut combo = fruit().with_filter_menu(MenuFilter::new(|input, candidate, _| {
            candidate.to_lowercase().starts_with(&input.to_lowercase())
        }));
        combo.commit("Apple");
        combo.handle_input_keyup(Key::A, "a");
        assert_eq!(combo.filtered_menu_list(), ["Apple", "Apricot"]);

        combo.handle_input_keyup(Key::E, "apple");
        assert_eq!(combo.selected_items(), vec!["Apple", "Apple"]);
    }

    #[test]
    fn test_badge_click_removes_and_stops_propagation() {
        let mut combo = fruit().with_selected_items(["Apple", "Banana"]);
        let mut click = ClickEvent::badge(1);

        let removed = combo.handle_remove_badge(&mut click).unwrap();
        assert_eq!(removed, Some("Banana".to_string()));
        assert!(click.base.is_accepted());
        assert_eq!(combo.selected_items(), vec!["Apple"]);
    }

    #[test]
    fn test_badge_click_with_invalid_key() {
        let mut combo = fruit().with_selected_items(["Apple", "Banana"]);
        let mut click = ClickEvent::new(ClickTarget::Badge { key: "first".into() });

        let err = combo.handle_remove_badge(&mut click).unwrap_err();
        assert!(matches!(err, Error::InvalidBadgeKey { ref key } if key == "first"));
        assert!(click.base.is_accepted());
        assert_eq!(combo.selected_items(), vec!["Apple", "Banana"]);
    }

    #[test]
    fn test_container_click_opens_and_focuses() {
        let mut combo = fruit();
        let mut click = ClickEvent::new(ClickTarget::Container);
        combo.handle_toggle_user_input(&mut click);

        assert!(click.base.is_accepted());
        assert!(combo.is_menu_open());
        assert!(combo.input().is_focused());
    }

    #[test]
    fn test_container_click_through_dispatch_keeps_menu_open() {
        let mut combo = fruit();
        let mut event = WidgetEvent::Click(ClickEvent::new(ClickTarget::Container));
        assert!(combo.event(&mut event));
        assert!(event.is_accepted());
        assert!(combo.is_menu_open());
    }

    #[test]
    fn test_outside_click_closes_menu() {
        let mut combo = fruit();
        combo.menu_mut().show_menu();

        let mut event = WidgetEvent::Click(ClickEvent::new(ClickTarget::Outside));
        assert!(combo.event(&mut event));
        assert!(!combo.is_menu_open());
    }

    #[test]
    fn test_typing_through_events() {
        let mut combo = fruit();
        type_text(&mut combo, "ap");

        assert_eq!(combo.value(), "ap");
        assert_eq!(combo.filtered_menu_list(), ["Apple", "Apricot"]);
        assert!(combo.is_menu_open());

        press(&mut combo, Key::Backspace);
        assert_eq!(combo.value(), "a");
        press(&mut combo, Key::Backspace);
        assert_eq!(combo.value(), "");
    }

    #[test]
    fn test_keyboard_navigation_commits_highlighted() {
        let mut combo = fruit();
        type_text(&mut combo, "ap");

        assert!(press(&mut combo, Key::ArrowDown));
        assert_eq!(combo.highlighted_index(), Some(0));
        press(&mut combo, Key::ArrowDown);
        assert_eq!(combo.highlighted_index(), Some(1));
        press(&mut combo, Key::ArrowDown);
        assert_eq!(combo.highlighted_index(), Some(0));
        press(&mut combo, Key::ArrowUp);
        assert_eq!(combo.highlighted_index(), Some(1));

        assert!(press(&mut combo, Key::Enter));
        assert_eq!(combo.selected_items(), vec!["Apricot"]);
        assert_eq!(combo.value(), "");
        assert_eq!(combo.highlighted_index(), None);
        assert!(!combo.is_menu_open());
    }

    #[test]
    fn test_enter_without_highlight_is_ignored() {
        let mut combo = fruit();
        type_text(&mut combo, "ap");
        assert!(!press(&mut combo, Key::Enter));
        assert!(combo.selected_items().is_empty());
    }

    #[test]
    fn test_escape_closes_menu() {
        let mut combo = fruit();
        type_text(&mut combo, "b");
        assert!(combo.is_menu_open());

        assert!(press(&mut combo, Key::Escape));
        assert!(!combo.is_menu_open());
        assert_eq!(combo.value(), "b");
    }

    #[test]
    fn test_arrow_down_opens_closed_menu() {
        let mut combo = fruit();
        assert!(press(&mut combo, Key::ArrowDown));
        assert!(combo.is_menu_open());
        assert_eq!(combo.highlighted_index(), Some(0));
    }

    #[test]
    fn test_focus_events() {
        let mut combo = fruit();
        combo.event(&mut WidgetEvent::FocusIn);
        assert!(combo.input().is_focused());
        combo.event(&mut WidgetEvent::FocusOut);
        assert!(!combo.input().is_focused());
    }

    #[test]
    fn test_render_view_structure() {
        let mut combo = fruit().with_selected_items(["Banana"]);
        combo.handle_input_keyup(Key::A, "a");
        let view = combo.render();

        assert_eq!(
            view.badges,
            vec![BadgeView {
                key: 0,
                text: "Banana".into()
            }]
        );
        assert_eq!(view.input.value, "a");
        assert_eq!(view.input.placeholder, "placeholder");
        assert_eq!(view.menu.texts(), vec!["Apple", "Apricot"]);
        assert!(view.menu_open);
    }

    #[test]
    fn test_render_no_results() {
        let mut combo = fruit();
        combo.handle_input_keyup(Key::Z, "z");
        assert_eq!(combo.render().menu, MenuView::NoResults);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut combo = fruit().with_selected_items(["Apple"]);
        combo.handle_input_keyup(Key::A, "a");

        let first = combo.render();
        assert!(!combo.needs_render());
        let second = combo.render();
        assert_eq!(first, second);
    }

    #[test]
    fn test_menu_list_replacement_refilters() {
        let mut combo = fruit();
        combo.handle_input_keyup(Key::B, "b");
        assert_eq!(combo.filtered_menu_list(), ["Banana"]);

        combo.set_menu_list(["Blueberry", "Cherry", "Banana"]);
        assert_eq!(combo.filtered_menu_list(), ["Blueberry", "Banana"]);
    }

    #[test]
    fn test_highlight_cleared_when_list_shrinks() {
        let mut combo = fruit();
        type_text(&mut combo, "ap");
        press(&mut combo, Key::ArrowDown);
        press(&mut combo, Key::ArrowDown);
        assert_eq!(combo.highlighted_index(), Some(1));

        combo.set_menu_list(["Apple"]);
        assert_eq!(combo.highlighted_index(), None);
    }

    #[test]
    fn test_highlight_does_not_move_to_another_entry_on_refilter() {
        let mut combo = MultiComboBox::new().with_menu_list(["Apple", "Avocado", "Apricot"]);
        type_text(&mut combo, "a");
        press(&mut combo, Key::ArrowDown);
        press(&mut combo, Key::ArrowDown);
        assert_eq!(combo.highlighted_index(), Some(1));
        assert_eq!(combo.filtered_menu_list()[1], "Avocado");

        type_text(&mut combo, "p");
        assert_eq!(combo.filtered_menu_list(), ["Apple", "Apricot"]);
        assert_eq!(combo.highlighted_index(), None);

        assert!(!press(&mut combo, Key::Enter));
        assert!(combo.selected_items().is_empty());
    }

    #[test]
    fn test_highlight_survives_refilter_with_same_entries() {
        let mut combo = fruit();
        type_text(&mut combo, "a");
        press(&mut combo, Key::ArrowDown);

        // Shift has no text; its release refilters to the same list.
        press(&mut combo, Key::Unknown);
        assert_eq!(combo.highlighted_index(), Some(0));
    }

    #[test]
    fn test_removal_clears_highlight() {
        let mut combo = fruit().with_selected_items(["Banana"]);
        type_text(&mut combo, "a");
        press(&mut combo, Key::ArrowDown);
        assert_eq!(combo.highlighted_index(), Some(0));

        combo.remove_item(Some(0));
        assert!(!combo.is_menu_open());
        assert_eq!(combo.highlighted_index(), None);
    }

    #[test]
    fn test_value_changed_signal() {
        let mut combo = fruit();
        let values = Arc::new(Mutex::new(Vec::new()));

        let values_clone = values.clone();
        combo.value_changed.connect(move |v| values_clone.lock().push(v.clone()));

        combo.handle_input_keyup(Key::A, "a");
        combo.handle_input_keyup(Key::Unknown, "a");
        combo.handle_select_change("Apple");

        assert_eq!(*values.lock(), vec!["a".to_string(), String::new()]);
    }

    #[test]
    fn test_attribute_reflection() {
        let mut combo = fruit();

        combo.set_attribute("placeholder", "Search fruit").unwrap();
        assert_eq!(combo.attribute("placeholder").as_deref(), Some("Search fruit"));

        combo.set_attribute("value", "ba").unwrap();
        assert_eq!(combo.value(), "ba");
        assert_eq!(combo.filtered_menu_list(), ["Banana"]);

        assert!(matches!(
            combo.set_attribute("menuList", "Apple"),
            Err(Error::Property(PropertyError::ReadOnly { .. }))
        ));
        assert!(matches!(
            combo.set_attribute("color", "red"),
            Err(Error::Property(PropertyError::NotFound { .. }))
        ));
        assert_eq!(combo.attribute("menuList"), None);
    }

    #[test]
    fn test_options_round_trip() {
        let options = ComboBoxOptions {
            placeholder: "Fruit".into(),
            menu_list: vec!["Apple".into(), "Banana".into()],
            selected_items: vec!["Banana".into()],
            close_menu_on_commit: false,
            ..Default::default()
        };

        let combo = MultiComboBox::from_options(options.clone());
        assert_eq!(combo.options(), options);
        assert_eq!(combo.filtered_menu_list(), ["Apple"]);
    }

    #[test]
    fn test_custom_menu_controller() {
        #[derive(Default)]
        struct CountingMenu {
            open: bool,
            shows: usize,
        }

        impl MenuVisibility for CountingMenu {
            fn show_menu(&mut self) {
                self.open = true;
                self.shows += 1;
            }

            fn hide_menu(&mut self) {
                self.open = false;
            }

            fn is_menu_open(&self) -> bool {
                self.open
            }
        }

        let mut combo = MultiComboBox::with_menu_controller(CountingMenu::default())
            .with_menu_list(["Apple", "Banana"]);
        combo.handle_input_keyup(Key::A, "a");
        combo.handle_input_keyup(Key::P, "ap");
        assert_eq!(combo.menu().shows, 2);

        // The default controller ignores document clicks.
        let mut outside = WidgetEvent::Click(ClickEvent::new(ClickTarget::Outside));
        assert!(!combo.event(&mut outside));
        assert!(combo.is_menu_open());
    }
}
