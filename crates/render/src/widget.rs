//! Per-field widget code emission
//!
//! Picks a template for a field, substitutes its placeholders and indents
//! the result. Substitution is a single pass: replacement values are never
//! scanned for further placeholders.

use imcodegen_core::config::Config;
use imcodegen_core::entities::FieldInfo;

/// Default indentation unit for emitted widget code
pub const DEFAULT_INDENT: &str = "    ";

/// Default name of the draw function's parameter
pub const DEFAULT_PARAM: &str = "data";

/// Options controlling widget emission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Prefix applied to every emitted line
    pub indent: String,

    /// Value of the `{param}` placeholder
    pub param: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            param: DEFAULT_PARAM.to_string(),
        }
    }
}

/// Convert `snake_case` to `Title Case`
pub fn prettify_name(name: &str) -> String {
    let mut pretty = String::with_capacity(name.len());
    let mut prev_cased = false;

    for c in name.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if prev_cased {
                pretty.extend(c.to_lowercase());
            } else {
                pretty.extend(c.to_uppercase());
            }
            prev_cased = true;
        } else {
            pretty.push(c);
            prev_cased = false;
        }
    }

    pretty
}

/// Replace `{key}` placeholders in a single pass; unknown keys stay as-is
pub fn apply_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replacement = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (*value, close))
        });

        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// C++ float literal: `1.0f`, `0.25f`
fn float_literal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}f")
    } else {
        format!("{value}f")
    }
}

/// Declared type with whitespace runs collapsed
fn display_type(type_name: &str) -> String {
    type_name.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Choose the template for a field
///
/// Unbound types use the fallback; otherwise a read-only variant beats a
/// color variant, which beats the generic widget.
pub fn select_template<'a>(field: &FieldInfo, config: &'a Config) -> &'a str {
    let Some(binding) = config.resolve(&field.type_name) else {
        return &config.fallback_widget;
    };

    match (&binding.readonly_widget, &binding.color_widget) {
        (Some(readonly), _) if field.is_readonly() => readonly,
        (_, Some(color)) if field.is_color() => color,
        _ => &binding.widget,
    }
}

/// Emit the widget code for one field, `None` for hidden fields
pub fn emit_widget(field: &FieldInfo, config: &Config, opts: &EmitOptions) -> Option<String> {
    if field.is_hidden() {
        return None;
    }

    let display = field
        .display_name
        .clone()
        .unwrap_or_else(|| prettify_name(&field.name));
    let type_text = display_type(&field.type_name);

    let (min, max, min_int, max_int) = match field.range {
        Some(range) => (
            float_literal(range.min),
            float_literal(range.max),
            (range.min.trunc() as i64).to_string(),
            (range.max.trunc() as i64).to_string(),
        ),
        None => (
            float_literal(0.0),
            float_literal(0.0),
            "0".to_string(),
            "0".to_string(),
        ),
    };

    let code = apply_template(
        select_template(field, config),
        &[
            ("display", &display),
            ("var", &field.name),
            ("type", &type_text),
            ("min", &min),
            ("max", &max),
            ("min_int", &min_int),
            ("max_int", &max_int),
            ("param", &opts.param),
        ],
    );

    let indent = &opts.indent;
    let indented = code
        .split('\n')
        .map(|line| format!("{indent}{line}"))
        .collect::<Vec<_>>()
        .join("\n");

    Some(match field.gating() {
        Some(gating) => format!("{indent}{gating}(\n{indented}\n{indent})"),
        None => indented,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use imcodegen_core::config::WidgetBinding;
    use imcodegen_core::entities::{FieldAttributes, ValueRange};
    use pretty_assertions::assert_eq;

    fn config() -> Config {
        Config::with_bindings(vec![
            WidgetBinding::new(
                "float",
                r#"changed |= ImGui::DragFloat("{display}", &{param}.{var}, 0.01f, {min}, {max});"#,
            )
            .with_color_widget(r#"changed |= ImGui::ColorEdit("{display}", &{param}.{var});"#)
            .with_readonly_widget(r#"ImGui::Text("{display}: %f", {param}.{var});"#),
            WidgetBinding::new(
                "int",
                r#"changed |= ImGui::SliderInt("{display}", &{param}.{var}, {min_int}, {max_int});"#,
            ),
        ])
    }

    fn field(name: &str, ty: &str) -> FieldInfo {
        FieldInfo::new(name, ty, 1)
    }

    #[test]
    fn test_prettify_name() {
        assert_eq!(prettify_name("base_move_speed"), "Base Move Speed");
        assert_eq!(prettify_name("yaw"), "Yaw");
        assert_eq!(prettify_name("GPU_time"), "Gpu Time");
        assert_eq!(prettify_name("lod2_bias"), "Lod2 Bias");
    }

    #[test]
    fn test_apply_template_is_single_pass() {
        let out = apply_template("{display} = {var}", &[("display", "{var}"), ("var", "x")]);
        assert_eq!(out, "{var} = x");
    }

    #[test]
    fn test_apply_template_keeps_unknown_and_unbalanced_braces() {
        let out = apply_template("if (a) { {var}; } {unknown} {", &[("var", "x")]);
        assert_eq!(out, "if (a) { x; } {unknown} {");
    }

    #[test]
    fn test_float_literal() {
        assert_eq!(float_literal(0.0), "0.0f");
        assert_eq!(float_literal(1.0), "1.0f");
        assert_eq!(float_literal(-2.0), "-2.0f");
        assert_eq!(float_literal(0.25), "0.25f");
        assert_eq!(float_literal(0.001), "0.001f");
    }

    #[test]
    fn test_float_literal_large_integral_keeps_fraction() {
        assert_eq!(float_literal(1e16), "10000000000000000.0f");
        assert_eq!(float_literal(-3e20), "-300000000000000000000.0f");
    }

    #[test]
    fn test_generic_widget_with_defaults() {
        let code = emit_widget(&field("exposure", "float"), &config(), &EmitOptions::default());
        assert_eq!(
            code.as_deref(),
            Some(r#"    changed |= ImGui::DragFloat("Exposure", &data.exposure, 0.01f, 0.0f, 0.0f);"#)
        );
    }

    #[test]
    fn test_color_variant_with_range() {
        let mut intensity = field("intensity", "float");
        intensity.attributes |= FieldAttributes::COLOR;
        intensity.range = Some(ValueRange { min: 0.0, max: 1.0 });

        assert_eq!(
            select_template(&intensity, &config()),
            r#"changed |= ImGui::ColorEdit("{display}", &{param}.{var});"#
        );
    }

    #[test]
    fn test_readonly_beats_color() {
        let mut tint = field("tint", "const float&");
        tint.attributes |= FieldAttributes::COLOR | FieldAttributes::READONLY;

        let opts = EmitOptions {
            indent: String::new(),
            param: "settings".to_string(),
        };
        assert_eq!(
            emit_widget(&tint, &config(), &opts).as_deref(),
            Some(r#"ImGui::Text("Tint: %f", settings.tint);"#)
        );
    }

    #[test]
    fn test_variant_flags_without_variant_template_use_generic() {
        let mut count = field("count", "int");
        count.attributes |= FieldAttributes::READONLY | FieldAttributes::COLOR;
        count.range = Some(ValueRange { min: -1.9, max: 10.7 });

        assert_eq!(
            emit_widget(&count, &config(), &EmitOptions::default()).as_deref(),
            Some(r#"    changed |= ImGui::SliderInt("Count", &data.count, -1, 10);"#)
        );
    }

    #[test]
    fn test_fallback_for_unbound_type() {
        let code = emit_widget(
            &field("widget", "MyCustomWidget"),
            &config(),
            &EmitOptions::default(),
        );
        assert_eq!(
            code.as_deref(),
            Some(r#"    ImGui::TextDisabled("Widget: [MyCustomWidget]");"#)
        );
    }

    #[test]
    fn test_display_override_and_type_whitespace() {
        let mut draws = field("draws", "unsigned   int");
        draws.display_name = Some("Draw Calls".to_string());

        let code = emit_widget(&draws, &config(), &EmitOptions::default());
        assert_eq!(
            code.as_deref(),
            Some(r#"    ImGui::TextDisabled("Draw Calls: [unsigned int]");"#)
        );
    }

    #[test]
    fn test_hidden_field_is_not_emitted() {
        let mut secret = field("secret", "float");
        secret.attributes |= FieldAttributes::HIDDEN | FieldAttributes::COLOR;
        assert_eq!(emit_widget(&secret, &config(), &EmitOptions::default()), None);
    }

    #[test]
    fn test_multiline_template_indents_every_line() {
        let config = Config::with_bindings(vec![WidgetBinding::new(
            "bool",
            "ImGui::PushID(\"{var}\");\nchanged |= ImGui::Checkbox(\"{display}\", &{param}.{var});\nImGui::PopID();",
        )]);

        let code = emit_widget(&field("vsync", "bool"), &config, &EmitOptions::default());
        assert_eq!(
            code.as_deref(),
            Some(
                "    ImGui::PushID(\"vsync\");\n    changed |= ImGui::Checkbox(\"Vsync\", &data.vsync);\n    ImGui::PopID();"
            )
        );
    }

    #[test]
    fn test_gating_wrapper() {
        let mut debug = field("validation_errors", "u32");
        debug.attributes |= FieldAttributes::DEBUG_ONLY;

        let code = emit_widget(&debug, &Config::default(), &EmitOptions::default());
        assert_eq!(
            code.as_deref(),
            Some(
                "    DEBUG_ONLY(\n    ImGui::TextDisabled(\"Validation Errors: [u32]\");\n    )"
            )
        );

        let mut release = field("budget", "f32");
        release.attributes |= FieldAttributes::NDEBUG_ONLY;
        let code = emit_widget(&release, &Config::default(), &EmitOptions::default())
            .expect("visible field");
        assert!(code.starts_with("    NDEBUG_ONLY(\n"));
        assert!(code.ends_with("\n    )"));
    }
}
