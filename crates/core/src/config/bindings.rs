//! Type-to-widget binding lookup
//!
//! Bindings are kept in declaration order and searched linearly so that the
//! first declared binding wins when two keys collide after normalization.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static QUALIFIER_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b(const|volatile)\b").ok());

const SCOPE_SEPARATOR: &str = "::";

/// Templates used to edit fields of one C++ type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetBinding {
    /// Normalized type key, e.g. `f32` or `glm::vec3`
    pub cpp_type: String,

    /// Generic widget template
    pub widget: String,

    /// Used instead of `widget` for `@color` fields
    pub color_widget: Option<String>,

    /// Used instead of `widget` for read-only fields, wins over `color_widget`
    pub readonly_widget: Option<String>,
}

impl WidgetBinding {
    pub fn new(cpp_type: impl Into<String>, widget: impl Into<String>) -> Self {
        Self {
            cpp_type: cpp_type.into(),
            widget: widget.into(),
            color_widget: None,
            readonly_widget: None,
        }
    }

    pub fn with_color_widget(mut self, template: impl Into<String>) -> Self {
        self.color_widget = Some(template.into());
        self
    }

    pub fn with_readonly_widget(mut self, template: impl Into<String>) -> Self {
        self.readonly_widget = Some(template.into());
        self
    }
}

/// Strip `const`/`volatile`, pointer and reference markers from a type
pub fn normalize_type_name(type_name: &str) -> String {
    let without_qualifiers = match QUALIFIER_PATTERN.as_ref() {
        Some(pattern) => pattern.replace_all(type_name, "").into_owned(),
        None => type_name.to_string(),
    };

    without_qualifiers
        .chars()
        .filter(|c| !matches!(c, '&' | '*'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Find the binding for a declared type
///
/// Tries the normalized type first, then the part after the last `::`.
pub fn resolve_binding<'a>(
    bindings: &'a [WidgetBinding],
    type_name: &str,
) -> Option<&'a WidgetBinding> {
    let normalized = normalize_type_name(type_name);

    if let Some(binding) = bindings.iter().find(|b| b.cpp_type == normalized) {
        return Some(binding);
    }

    let simple = normalized
        .rsplit(SCOPE_SEPARATOR)
        .next()
        .unwrap_or(normalized.as_str());
    bindings.iter().find(|b| b.cpp_type == simple)
}
