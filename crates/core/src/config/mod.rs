//! Binding configuration for widget generation
//!
//! A configuration is an ordered list of [`WidgetBinding`]s plus a fallback
//! template for types no binding covers. It is loaded from an XML document,
//! see [`Config::from_file`].

mod bindings;
mod defaults;
mod loading;


use serde::{Deserialize, Serialize};

pub use bindings::{normalize_type_name, resolve_binding, WidgetBinding};

use defaults::default_fallback_widget;

/// Main configuration structure for widget generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Bindings in declaration order
    pub bindings: Vec<WidgetBinding>,

    /// Template used when no binding matches
    pub fallback_widget: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bindings: Vec::new(),
            fallback_widget: default_fallback_widget(),
        }
    }
}

impl Config {
    /// Create a configuration from bindings, keeping the default fallback
    pub fn with_bindings(bindings: Vec<WidgetBinding>) -> Self {
        Self {
            bindings,
            ..Self::default()
        }
    }

    /// Find the binding for a declared field type
    pub fn resolve(&self, type_name: &str) -> Option<&WidgetBinding> {
        resolve_binding(&self.bindings, type_name)
    }
}
