//! Logging facilities for tagbox.
//!
//! tagbox uses the `tracing` crate for instrumentation. The library never
//! installs a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("tagbox=debug,tagbox_core=trace")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Logging is purely diagnostic: no widget behavior depends on whether a
//! subscriber is installed.

/// Span names used throughout tagbox for tracing.
pub mod span_names {
    /// Signal emission span.
    pub const SIGNAL: &str = "tagbox::signal";
    /// Filtered menu recomputation span.
    pub const FILTER: &str = "tagbox::filter";
    /// View derivation span.
    pub const RENDER: &str = "tagbox::render";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "tagbox_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "tagbox_core::signal";
    /// Property system target.
    pub const PROPERTY: &str = "tagbox_core::property";
    /// Multi-select combo box target.
    pub const COMBO_BOX: &str = "tagbox::combo_box";
    /// Menu visibility target.
    pub const DROPDOWN: &str = "tagbox::dropdown";
    /// Options loading target.
    pub const OPTIONS: &str = "tagbox::options";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "tagbox::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns.
///
/// These are thin wrappers around the `tracing` crate macros with
/// consistent target naming.
#[macro_export]
macro_rules! tagbox_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "tagbox_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! tagbox_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "tagbox_core", $($arg)*)
    };
}
