//! Menu filtering for the multi-select combo box.
//!
//! A [`MenuFilter`] decides, for the current input text and one candidate,
//! whether the candidate is shown in the menu. The current selections are
//! passed in explicitly rather than captured from the widget.

use std::fmt;
use std::sync::Arc;

type Predicate = dyn Fn(&str, &str, &[String]) -> bool + Send + Sync;

/// A replaceable menu filter predicate.
///
/// Filters compare equal only when they share the same underlying closure,
/// which lets a filter live in a [`Property`](tagbox_core::Property).
///
/// # Example
///
/// ```
/// use tagbox::widget::MenuFilter;
///
/// // Substring match instead of the default prefix match.
/// let contains = MenuFilter::new(|input, candidate, _selected| {
///     candidate.to_lowercase().contains(&input.to_lowercase())
/// });
///
/// let menu = vec!["Pineapple".to_string(), "Banana".to_string()];
/// assert_eq!(contains.filter_candidates(&menu, "apple", &[]), vec!["Pineapple"]);
/// ```
#[derive(Clone)]
pub struct MenuFilter {
    predicate: Arc<Predicate>,
}

impl MenuFilter {
    /// Wrap a predicate `(input_text, candidate, current_selections) -> bool`.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&str, &str, &[String]) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    /// Whether `candidate` should be shown for `input`.
    pub fn matches(&self, input: &str, candidate: &str, selected: &[String]) -> bool {
        (self.predicate)(input, candidate, selected)
    }

    /// Apply the filter to every candidate, preserving candidate order.
    pub fn filter_candidates(&self, candidates: &[String], input: &str, selected: &[String]) -> Vec<String> {
        candidates
            .iter()
            .filter(|candidate| self.matches(input, candidate, selected))
            .cloned()
            .collect()
    }
}

/// Case-insensitive prefix match that hides candidates already selected.
pub fn prefix_excluding_selected(input: &str, candidate: &str, selected: &[String]) -> bool {
    candidate.to_lowercase().starts_with(&input.to_lowercase())
        && !selected.iter().any(|item| item == candidate)
}

impl Default for MenuFilter {
    fn default() -> Self {
        Self::new(prefix_excluding_selected)
    }
}

impl PartialEq for MenuFilter {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.predicate, &other.predicate)
    }
}

impl fmt::Debug for MenuFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuFilter")
            .field("predicate", &Arc::as_ptr(&self.predicate))
            .finish()
    }
}
