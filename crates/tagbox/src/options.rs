//! Declarative combo box configuration.
//!
//! Options can be written by hand or loaded from TOML or JSON:
//!
//! ```toml
//! placeholder = "Pick fruit"
//! menu_list = ["Apple", "Banana", "Apricot"]
//! selected_items = ["Banana"]
//! auto_select_exact_match = false
//! ```
//!
//! Missing keys take the widget defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tagbox_core::logging::targets;

use crate::error::{Error, Result};

/// Default input placeholder.
pub const DEFAULT_PLACEHOLDER: &str = "placeholder";

/// Configuration for a [`MultiComboBox`](crate::widget::MultiComboBox).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboBoxOptions {
    /// Text-input placeholder.
    pub placeholder: String,
    /// Initial input text.
    pub value: String,
    /// Candidate list.
    pub menu_list: Vec<String>,
    /// Initial selections.
    pub selected_items: Vec<String>,
    /// Commit a candidate as soon as the typed text equals it, ignoring case.
    pub auto_select_exact_match: bool,
    /// Close the menu whenever an item is removed.
    pub close_menu_on_removal: bool,
    /// Close the menu after each commit.
    pub close_menu_on_commit: bool,
}

impl Default for ComboBoxOptions {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            value: String::new(),
            menu_list: Vec::new(),
            selected_items: Vec::new(),
            auto_select_exact_match: true,
            close_menu_on_removal: true,
            close_menu_on_commit: true,
        }
    }
}

impl ComboBoxOptions {
    /// Parse options from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Parse options from a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load options from a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(Error::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let options = parse(&source)?;
        tracing::debug!(
            target: targets::OPTIONS,
            path = %path.display(),
            candidates = options.menu_list.len(),
            "loaded combo box options"
        );
        Ok(options)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
