//! Comment annotation parsing
//!
//! Recognised markers, each matched independently and in any order:
//!
//! - `@imgui` marks a struct or class for generation
//! - `@color` edits the field with a color widget
//! - `@readonly` displays the field without editing
//! - `@hide` drops the field from the output
//! - `@range(min, max)` sets slider/drag bounds
//! - `@name("Display")` overrides the display name

use imcodegen_core::entities::{FieldAttributes, FieldInfo, ValueRange};
use regex::Regex;
use std::sync::LazyLock;

static IMGUI_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"@imgui\b").ok());
static COLOR_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"@color\b").ok());
static READONLY_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"@readonly\b").ok());
static HIDE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"@hide\b").ok());
static RANGE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"@range\s*\(\s*([^,]+)\s*,\s*([^)]+)\s*\)").ok());
static NAME_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"@name\s*\(\s*"([^"]+)"\s*\)"#).ok());

/// Annotations found in a single comment
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationSet {
    pub imgui: bool,
    pub color: bool,
    pub readonly: bool,
    pub hide: bool,
    pub range: Option<ValueRange>,
    pub name: Option<String>,
}

impl AnnotationSet {
    /// Attributes these annotations add to a field
    pub fn attributes(&self) -> FieldAttributes {
        let mut attributes = FieldAttributes::empty();
        attributes.set(FieldAttributes::COLOR, self.color);
        attributes.set(FieldAttributes::READONLY, self.readonly);
        attributes.set(FieldAttributes::HIDDEN, self.hide);
        attributes
    }

    /// Merge into a field; flags are added, range and name replace
    pub fn apply_to(&self, field: &mut FieldInfo) {
        field.attributes |= self.attributes();
        if let Some(range) = self.range {
            field.range = Some(range);
        }
        if let Some(name) = &self.name {
            field.display_name = Some(name.clone());
        }
    }
}

fn is_match(pattern: &LazyLock<Option<Regex>>, text: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(text))
}

/// Parse a `@range(...)` marker; unparsable bounds leave the range unset
fn parse_range(comment: &str) -> Option<ValueRange> {
    let captures = RANGE_PATTERN.as_ref()?.captures(comment)?;
    let bound = |index| {
        captures
            .get(index)?
            .as_str()
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    };
    Some(ValueRange {
        min: bound(1)?,
        max: bound(2)?,
    })
}

fn parse_name(comment: &str) -> Option<String> {
    let captures = NAME_PATTERN.as_ref()?.captures(comment)?;
    captures.get(1).map(|m| m.as_str().to_string())
}

/// Parse annotations from a raw comment string
pub fn parse_annotations(comment: &str) -> AnnotationSet {
    AnnotationSet {
        imgui: is_match(&IMGUI_PATTERN, comment),
        color: is_match(&COLOR_PATTERN, comment),
        readonly: is_match(&READONLY_PATTERN, comment),
        hide: is_match(&HIDE_PATTERN, comment),
        range: parse_range(comment),
        name: parse_name(comment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_comment_has_no_annotations() {
        assert_eq!(
            parse_annotations("// camera speed in m/s"),
            AnnotationSet::default()
        );
    }

    #[test]
    fn test_enabling_marker() {
        assert!(parse_annotations("// @imgui").imgui);
        assert!(parse_annotations("/// @imgui").imgui);
        assert!(parse_annotations("/* @imgui */").imgui);
        assert!(!parse_annotations("// @imguiwindow").imgui);
    }

    #[test]
    fn test_multiple_markers_in_any_order() {
        let anns = parse_annotations(r#"// @name("Sun Color") @readonly @color"#);
        assert!(anns.color);
        assert!(anns.readonly);
        assert!(!anns.hide);
        assert_eq!(anns.name.as_deref(), Some("Sun Color"));
    }

    #[test]
    fn test_range_marker() {
        let anns = parse_annotations("// @color @range(0, 1)");
        assert!(anns.color);
        assert_eq!(anns.range, Some(ValueRange { min: 0.0, max: 1.0 }));

        let anns = parse_annotations("// @range( -2.5 ,10 )");
        assert_eq!(anns.range, Some(ValueRange { min: -2.5, max: 10.0 }));
    }

    #[test]
    fn test_range_accepts_exponents() {
        let anns = parse_annotations("// @range(1e-3, 1e3)");
        assert_eq!(anns.range, Some(ValueRange { min: 0.001, max: 1000.0 }));
    }

    #[test]
    fn test_non_finite_range_is_dropped() {
        assert_eq!(parse_annotations("// @range(0, inf)").range, None);
        assert_eq!(parse_annotations("// @range(NaN, 1)").range, None);
    }

    #[test]
    fn test_malformed_range_is_dropped_without_losing_other_markers() {
        let anns = parse_annotations("// @range(low, high) @readonly @hide");
        assert_eq!(anns.range, None);
        assert!(anns.readonly);
        assert!(anns.hide);

        let anns = parse_annotations("// @range(0.0f, 1.0f)");
        assert_eq!(anns.range, None);
    }

    #[test]
    fn test_unquoted_name_is_ignored() {
        let anns = parse_annotations("/// @readonly @name(GPU render time (ms))");
        assert!(anns.readonly);
        assert_eq!(anns.name, None);
    }

    #[test]
    fn test_apply_merges_onto_field() {
        let mut field = FieldInfo::new("sun_intensity", "f32", 7);
        field.attributes |= FieldAttributes::READONLY;

        parse_annotations("// @color @range(0, 4)").apply_to(&mut field);
        parse_annotations(r#"// @name("Sun")"#).apply_to(&mut field);

        assert!(field.is_readonly());
        assert!(field.is_color());
        assert_eq!(field.range, Some(ValueRange { min: 0.0, max: 4.0 }));
        assert_eq!(field.display_name.as_deref(), Some("Sun"));
    }
}
