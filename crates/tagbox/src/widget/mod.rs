//! The multi-select combo box and its parts.
//!
//! - [`MultiComboBox`]: the widget state machine
//! - [`MenuVisibility`] and [`Dropdown`]: open/closed control of the menu
//! - [`MenuFilter`]: which candidates the menu shows
//! - [`InputField`]: the embedded text buffer
//! - [`ComboBoxView`]: what a render pass produces
//! - Input events delivered by the host

mod dropdown;
mod events;
mod filter;
mod input_field;
mod multi_combo_box;
mod view;

pub use dropdown::{Dropdown, MenuVisibility};
pub use events::{
    ClickEvent, ClickTarget, EventBase, Key, KeyPressEvent, KeyReleaseEvent, KeyboardModifiers, WidgetEvent,
};
pub use filter::{MenuFilter, prefix_excluding_selected};
pub use input_field::InputField;
pub use multi_combo_box::{ItemRemoved, MultiComboBox, PROPERTIES, SelectionChanged};
pub use view::{BadgeView, ComboBoxView, InputView, MenuEntryView, MenuView, NO_RESULTS_TEXT};
