//! Widget input event types.
//!
//! Events are plain data delivered by the host (a GUI toolkit, a terminal
//! front end, a browser bridge or a test) to [`MultiComboBox::event`].
//! Handlers mark an event as accepted to stop it from propagating to
//! outer listeners such as the dropdown's document-level click handler.
//!
//! [`MultiComboBox::event`]: crate::widget::MultiComboBox::event

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held.
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Check if no modifiers are pressed.
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.control && !self.alt && !self.meta
    }
}

/// Base data shared by all events.
#[derive(Debug, Clone, Default)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Physical key identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[rustfmt::skip]
pub enum Key {
    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Numbers (main keyboard)
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    // Navigation
    ArrowUp, ArrowDown, ArrowLeft, ArrowRight,
    Home, End, PageUp, PageDown,

    // Editing
    Backspace, Delete, Enter, Tab, Escape,

    // Whitespace
    Space,

    // Anything else (punctuation, modifiers, function keys)
    Unknown,
}

#[rustfmt::skip]
const LETTERS: [Key; 26] = [
    Key::A, Key::B, Key::C, Key::D, Key::E, Key::F, Key::G, Key::H, Key::I,
    Key::J, Key::K, Key::L, Key::M, Key::N, Key::O, Key::P, Key::Q, Key::R,
    Key::S, Key::T, Key::U, Key::V, Key::W, Key::X, Key::Y, Key::Z,
];

#[rustfmt::skip]
const DIGITS: [Key; 10] = [
    Key::Digit0, Key::Digit1, Key::Digit2, Key::Digit3, Key::Digit4,
    Key::Digit5, Key::Digit6, Key::Digit7, Key::Digit8, Key::Digit9,
];

impl Key {
    /// Map a DOM-style physical key code (`"Backspace"`, `"KeyA"`,
    /// `"Digit7"`, `"ArrowDown"`, ...) to a key. Matching ignores case.
    pub fn from_code(code: &str) -> Self {
        let lower = code.to_ascii_lowercase();

        if let Some(rest) = lower.strip_prefix("key") {
            if let [letter @ b'a'..=b'z'] = rest.as_bytes() {
                return LETTERS[(letter - b'a') as usize];
            }
        }
        if let Some(rest) = lower.strip_prefix("digit") {
            if let [digit @ b'0'..=b'9'] = rest.as_bytes() {
                return DIGITS[(digit - b'0') as usize];
            }
        }

        match lower.as_str() {
            "backspace" => Key::Backspace,
            "delete" => Key::Delete,
            "enter" | "numpadenter" => Key::Enter,
            "tab" => Key::Tab,
            "escape" | "esc" => Key::Escape,
            "space" => Key::Space,
            "arrowup" => Key::ArrowUp,
            "arrowdown" => Key::ArrowDown,
            "arrowleft" => Key::ArrowLeft,
            "arrowright" => Key::ArrowRight,
            "home" => Key::Home,
            "end" => Key::End,
            "pageup" => Key::PageUp,
            "pagedown" => Key::PageDown,
            _ => Key::Unknown,
        }
    }

    /// Check if this is a navigation key.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Key::ArrowUp
                | Key::ArrowDown
                | Key::ArrowLeft
                | Key::ArrowRight
                | Key::Home
                | Key::End
                | Key::PageUp
                | Key::PageDown
        )
    }

    /// Check if this is a letter key.
    pub fn is_letter(&self) -> bool {
        LETTERS.contains(self)
    }

    /// Check if this is a digit key (main keyboard, not numpad).
    pub fn is_digit(&self) -> bool {
        DIGITS.contains(self)
    }
}

/// Key press event, sent when a key goes down.
#[derive(Debug, Clone)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// The text input from this key press (if any).
    ///
    /// For printable keys, this contains the character that would be typed.
    /// For non-printable keys, this is empty.
    pub text: String,
    /// Whether this is a key repeat event (key held down).
    pub is_repeat: bool,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: Key, modifiers: KeyboardModifiers, text: impl Into<String>, is_repeat: bool) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
            text: text.into(),
            is_repeat,
        }
    }

    /// A plain key press with no modifiers and no text.
    pub fn key(key: Key) -> Self {
        Self::new(key, KeyboardModifiers::NONE, "", false)
    }
}

/// Key release event, sent when a key goes up.
#[derive(Debug, Clone)]
pub struct KeyReleaseEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was released.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl KeyReleaseEvent {
    /// Create a new key release event.
    pub fn new(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
        }
    }
}

/// The part of the widget (or the page around it) a click landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// The input container, outside any more specific element.
    Container,
    /// A selected-item badge, carrying the positional index encoded on it.
    Badge {
        /// The badge's `key` attribute.
        key: String,
    },
    /// An entry of the filtered menu list.
    MenuEntry {
        /// The entry's display text.
        text: String,
    },
    /// Anywhere outside the widget.
    Outside,
}

/// Mouse click event.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    /// Base event data.
    pub base: EventBase,
    /// What was clicked.
    pub target: ClickTarget,
}

impl ClickEvent {
    /// Create a new click event.
    pub fn new(target: ClickTarget) -> Self {
        Self {
            base: EventBase::new(),
            target,
        }
    }

    /// A click on the badge at `index`.
    pub fn badge(index: usize) -> Self {
        Self::new(ClickTarget::Badge {
            key: index.to_string(),
        })
    }

    /// A click on the menu entry showing `text`.
    pub fn menu_entry(text: impl Into<String>) -> Self {
        Self::new(ClickTarget::MenuEntry { text: text.into() })
    }
}

/// Events delivered to a widget.
#[derive(Debug, Clone)]
pub enum WidgetEvent {
    /// Key press event.
    KeyPress(KeyPressEvent),
    /// Key release event.
    KeyRelease(KeyReleaseEvent),
    /// Mouse click event.
    Click(ClickEvent),
    /// The widget gained keyboard focus.
    FocusIn,
    /// The widget lost keyboard focus.
    FocusOut,
}

impl WidgetEvent {
    /// Check whether the event was accepted by a handler.
    pub fn is_accepted(&self) -> bool {
        match self {
            WidgetEvent::KeyPress(e) => e.base.is_accepted(),
            WidgetEvent::KeyRelease(e) => e.base.is_accepted(),
            WidgetEvent::Click(e) => e.base.is_accepted(),
            WidgetEvent::FocusIn | WidgetEvent::FocusOut => false,
        }
    }
}
