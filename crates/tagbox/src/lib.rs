//! Tagbox - a multi-select combo box widget.
//!
//! A text input filters a candidate list shown in a dropdown menu; picking a
//! candidate turns it into a removable badge. The widget is a host-agnostic
//! state machine: feed it [`widget::WidgetEvent`]s and draw the
//! [`widget::ComboBoxView`] that [`widget::MultiComboBox::render`] returns.
//!
//! This crate re-exports the reactive primitives of `tagbox-core`.
//!
//! # Example
//!
//! ```
//! use tagbox::prelude::*;
//!
//! let mut combo = MultiComboBox::new().with_menu_list(["Rust", "Ruby", "Go"]);
//!
//! combo.event(&mut WidgetEvent::Click(ClickEvent::new(ClickTarget::Container)));
//! combo.handle_input_keyup(Key::R, "r");
//! combo.event(&mut WidgetEvent::Click(ClickEvent::menu_entry("Ruby")));
//!
//! let view = combo.render();
//! assert_eq!(view.badges.len(), 1);
//! assert_eq!(view.to_string(), "[Ruby x] |<placeholder>_|");
//! ```

pub use tagbox_core::*;

pub mod error;
pub mod options;
pub mod prelude;
pub mod widget;

pub use error::{Error, Result};
pub use options::ComboBoxOptions;
