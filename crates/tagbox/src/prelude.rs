//! Prelude module for tagbox.
//!
//! ```
//! use tagbox::prelude::*;
//! ```
//!
//! This provides access to:
//! - Signal/slot and property system (`Signal`, `Property`)
//! - The widget and its menu controller (`MultiComboBox`, `Dropdown`)
//! - Input events and the rendered view

// ============================================================================
// Signal/Slot and Property System
// ============================================================================

pub use crate::{ConnectionId, Property, PropertyMeta, Signal};

// ============================================================================
// Widget
// ============================================================================

pub use crate::widget::{
    Dropdown, ItemRemoved, MenuFilter, MenuVisibility, MultiComboBox, SelectionChanged,
};

// ============================================================================
// Events and View
// ============================================================================

pub use crate::widget::{
    ClickEvent, ClickTarget, ComboBoxView, Key, KeyPressEvent, KeyReleaseEvent, KeyboardModifiers,
    MenuView, WidgetEvent,
};

// ============================================================================
// Configuration and Errors
// ============================================================================

pub use crate::{ComboBoxOptions, Error, Result};
