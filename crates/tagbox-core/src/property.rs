//! Property system for tagbox.
//!
//! This module provides reactive properties with change detection. When a
//! property changes, its owner emits a signal to notify interested parties.
//!
//! # Property Types
//!
//! - **Property<T>**: A value cell that reports whether a write changed it
//! - **ReadOnlyProperty<T>**: A borrowed read-only view of a property
//! - **PropertyMeta**: Static metadata for property introspection
//!
//! # Example
//!
//! ```
//! use tagbox_core::{Property, Signal};
//!
//! struct Field {
//!     value: Property<String>,
//!     value_changed: Signal<String>,
//! }
//!
//! impl Field {
//!     fn set_value(&self, new_value: &str) {
//!         if self.value.set(new_value.to_string()) {
//!             self.value_changed.emit(new_value.to_string());
//!         }
//!     }
//! }
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A reactive property that tracks changes.
///
/// `Property<T>` wraps a value and provides change detection. When `set()` is
/// called, it compares the new value with the current one and returns whether
/// the value actually changed.
///
/// # Example
///
/// ```
/// use tagbox_core::Property;
///
/// let prop = Property::new(42);
/// assert_eq!(prop.get(), 42);
///
/// // Setting same value returns false (no change)
/// assert!(!prop.set(42));
///
/// // Setting different value returns true (changed)
/// assert!(prop.set(100));
/// assert_eq!(prop.get(), 100);
/// ```
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    ///
    /// This clones the value. For large types, consider using `with()` instead.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Mutate the value in place.
    ///
    /// There is no old value to compare against, so callers treat every
    /// update as a change.
    pub fn update<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        f(&mut self.value.write())
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    ///
    /// The caller should emit the associated notification signal when this
    /// returns `true`.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }
}

impl<T: Clone> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}

/// A read-only view of a property.
///
/// Useful for exposing properties publicly while keeping the setter private.
pub struct ReadOnlyProperty<'a, T> {
    inner: &'a Property<T>,
}

impl<'a, T: Clone> ReadOnlyProperty<'a, T> {
    /// Create a read-only view of a property.
    pub fn new(property: &'a Property<T>) -> Self {
        Self { inner: property }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.inner.get()
    }

    /// Access the value through a closure.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.inner.with(f)
    }
}

/// Metadata for a property, used for runtime introspection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyMeta {
    /// The property name.
    pub name: &'static str,
    /// The type name (for debugging).
    pub type_name: &'static str,
    /// Whether this property is read-only from the outside.
    pub read_only: bool,
    /// Whether the property is mirrored as a string attribute.
    pub reflect: bool,
    /// The name of the signal emitted when this property changes (if any).
    pub notify_signal: Option<&'static str>,
}

impl PropertyMeta {
    /// Create metadata for a property.
    pub const fn new(
        name: &'static str,
        type_name: &'static str,
        read_only: bool,
        notify_signal: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            type_name,
            read_only,
            reflect: false,
            notify_signal,
        }
    }

    /// Mark the property as reflected to a string attribute.
    pub const fn reflected(mut self) -> Self {
        self.reflect = true;
        self
    }

    /// Find a property by name in a metadata table.
    pub fn find<'a>(table: &'a [PropertyMeta], name: &str) -> Option<&'a PropertyMeta> {
        table.iter().find(|meta| meta.name == name)
    }
}

/// Error types for property operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
    /// The property was not found.
    #[error("Property '{name}' not found")]
    NotFound {
        /// The name of the property that was not found.
        name: String,
    },
    /// The property cannot be written through this interface.
    #[error("Property '{name}' is read-only")]
    ReadOnly {
        /// The name of the read-only property.
        name: String,
    },
    /// The supplied value could not be applied.
    #[error("Invalid value for property '{name}': {message}")]
    InvalidValue {
        /// The property name.
        name: String,
        /// Why the value was rejected.
        message: String,
    },
}

impl PropertyError {
    /// Create a not-found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Create a read-only error.
    pub fn read_only(name: impl Into<String>) -> Self {
        Self::ReadOnly { name: name.into() }
    }
}
