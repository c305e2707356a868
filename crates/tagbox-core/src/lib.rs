//! Core systems for tagbox.
//!
//! This crate provides the reactive primitives the tagbox widgets are built on:
//!
//! - **Signal/Slot System**: Type-safe change notification
//! - **Property System**: Values with change detection and introspection metadata
//! - **Logging**: `tracing` targets, span names and helper macros
//!
//! # Property Example
//!
//! ```
//! use tagbox_core::{Property, Signal};
//!
//! // A reactive counter with change notification
//! struct Counter {
//!     value: Property<i32>,
//!     value_changed: Signal<i32>,
//! }
//!
//! impl Counter {
//!     fn new() -> Self {
//!         Self {
//!             value: Property::new(0),
//!             value_changed: Signal::new(),
//!         }
//!     }
//!
//!     fn increment(&self) {
//!         let new_value = self.value.get() + 1;
//!         if self.value.set(new_value) {
//!             self.value_changed.emit(new_value);
//!         }
//!     }
//! }
//!
//! let counter = Counter::new();
//! counter.increment();
//! assert_eq!(counter.value.get(), 1);
//! ```

mod error;
pub mod logging;
pub mod property;
pub mod signal;

pub use error::SignalError;
pub use logging::PerfSpan;
pub use property::{Property, PropertyError, PropertyMeta, ReadOnlyProperty};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
