//! Single-line text buffer backing the combo box's text input.

use unicode_segmentation::UnicodeSegmentation;

/// The text input embedded in a combo box.
///
/// Editing always happens at the end of the text; the combo box input is a
/// search field, not a general-purpose editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    text: String,
    focused: bool,
}

impl InputField {
    /// Create an empty, unfocused input.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Clear the text.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Whether the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append typed or pasted text. Line breaks are dropped.
    pub fn insert(&mut self, text: &str) {
        self.text.extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
    }

    /// Delete the last grapheme cluster, returning whether anything was removed.
    pub fn delete_backward(&mut self) -> bool {
        match self.text.grapheme_indices(true).next_back() {
            Some((start, _)) => {
                self.text.truncate(start);
                true
            }
            None => false,
        }
    }

    /// Whether the input has keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Give or take keyboard focus.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}
