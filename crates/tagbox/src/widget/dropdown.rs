//! Menu visibility for dropdown-style widgets.
//!
//! A combo box does not own the open/closed state of its menu; it drives a
//! [`MenuVisibility`] controller instead. [`Dropdown`] is the stock
//! controller, which also implements the document-level "click outside
//! closes the menu" behavior.

use tagbox_core::logging::targets;
use tagbox_core::Signal;

use super::events::ClickEvent;

/// Open/close control over a dropdown menu.
pub trait MenuVisibility {
    /// Open the menu. Opening an open menu does nothing.
    fn show_menu(&mut self);

    /// Close the menu. Closing a closed menu does nothing.
    fn hide_menu(&mut self);

    /// Whether the menu is currently open.
    fn is_menu_open(&self) -> bool;

    /// Flip the menu between open and closed.
    fn toggle_menu(&mut self) {
        if self.is_menu_open() {
            self.hide_menu();
        } else {
            self.show_menu();
        }
    }

    /// Handle a click that bubbled up to the document.
    ///
    /// Returns `true` when the click changed the menu state. The default
    /// implementation ignores document clicks.
    fn handle_document_click(&mut self, _event: &ClickEvent) -> bool {
        false
    }
}

/// The default menu controller.
///
/// # Signals
///
/// - `menu_shown()`: Emitted when the menu goes from closed to open
/// - `menu_hidden()`: Emitted when the menu goes from open to closed
#[derive(Debug, Default)]
pub struct Dropdown {
    open: bool,

    /// Signal emitted when the menu opens.
    pub menu_shown: Signal<()>,
    /// Signal emitted when the menu closes.
    pub menu_hidden: Signal<()>,
}

impl Dropdown {
    /// Create a closed dropdown.
    pub fn new() -> Self {
        Self::default()
    }
}

impl MenuVisibility for Dropdown {
    fn show_menu(&mut self) {
        if !self.open {
            self.open = true;
            tracing::trace!(target: targets::DROPDOWN, "menu shown");
            self.menu_shown.emit(());
        }
    }

    fn hide_menu(&mut self) {
        if self.open {
            self.open = false;
            tracing::trace!(target: targets::DROPDOWN, "menu hidden");
            self.menu_hidden.emit(());
        }
    }

    fn is_menu_open(&self) -> bool {
        self.open
    }

    /// A click whose propagation was stopped never reaches the document, so
    /// only unaccepted clicks close the menu.
    fn handle_document_click(&mut self, event: &ClickEvent) -> bool {
        if event.base.is_accepted() || !self.open {
            return false;
        }
        self.hide_menu();
        true
    }
}
