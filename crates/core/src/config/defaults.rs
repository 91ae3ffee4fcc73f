//! Default values for binding configuration

/// Template used when no binding matches a field's type and the config
/// declares no `<fallback>`
pub(crate) const DEFAULT_FALLBACK_WIDGET: &str = r#"ImGui::TextDisabled("{display}: [{type}]");"#;

pub(crate) fn default_fallback_widget() -> String {
    DEFAULT_FALLBACK_WIDGET.to_string()
}
