//! Configuration loading from XML files

use crate::error::{Error, Result, ResultExt};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

use super::defaults::default_fallback_widget;
use super::{Config, WidgetBinding};

/// Document shape as written by users
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    fallback: Option<String>,

    #[serde(default)]
    bindings: Option<RawBindings>,
}

#[derive(Debug, Default, Deserialize)]
struct RawBindings {
    #[serde(default, rename = "binding")]
    entries: Vec<RawBinding>,
}

#[derive(Debug, Deserialize)]
struct RawBinding {
    #[serde(default, rename = "@type")]
    cpp_type: String,

    #[serde(default)]
    widget: Option<String>,

    #[serde(default)]
    color_widget: Option<String>,

    #[serde(default)]
    readonly_widget: Option<String>,
}

/// Trimmed template body, `None` when absent or blank
fn template_body(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

impl Config {
    /// Loads a binding configuration from an XML file
    ///
    /// A missing file or a document that does not parse is an error. Binding
    /// entries without a type or a widget body are skipped with a warning.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file {}", path.display()))?;

        let config = Self::from_xml_str(&content).map_err(|e| match e {
            Error::Config(msg) => Error::config(format!("{}: {msg}", path.display())),
            other => other,
        })?;

        debug!(
            "Loaded {} widget bindings from {}",
            config.bindings.len(),
            path.display()
        );
        Ok(config)
    }

    /// Parses a binding configuration from an XML string
    pub fn from_xml_str(xml: &str) -> Result<Self> {
        let raw: RawConfig = quick_xml::de::from_str(xml)
            .map_err(|e| Error::config(format!("Invalid config XML: {e}")))?;

        let mut bindings = Vec::new();
        for entry in raw.bindings.unwrap_or_default().entries {
            let cpp_type = entry.cpp_type.trim().to_string();
            let Some(widget) = template_body(entry.widget) else {
                warn!("Skipping binding for '{cpp_type}': missing <widget> template");
                continue;
            };
            if cpp_type.is_empty() {
                warn!("Skipping binding without a type attribute");
                continue;
            }

            bindings.push(WidgetBinding {
                cpp_type,
                widget,
                color_widget: template_body(entry.color_widget),
                readonly_widget: template_body(entry.readonly_widget),
            });
        }

        Ok(Self {
            bindings,
            fallback_widget: template_body(raw.fallback).unwrap_or_else(default_fallback_widget),
        })
    }
}
