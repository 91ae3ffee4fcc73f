//! Test suite for C++ struct extraction

#![cfg(test)]


use super::{extract_structs, parse_source};
use imcodegen_core::entities::{FieldInfo, StructInfo};

/// Parse a header snippet and extract its annotated structs
fn extract(source: &str) -> Vec<StructInfo> {
    let tree = parse_source(source, "test.hpp").expect("Failed to parse source");
    extract_structs(&tree, source.as_bytes())
}

/// Extract a single annotated struct
fn extract_one(source: &str) -> StructInfo {
    let mut structs = extract(source);
    assert_eq!(structs.len(), 1, "expected exactly one struct: {structs:?}");
    structs.remove(0)
}

fn field_names(info: &StructInfo) -> Vec<&str> {
    info.fields.iter().map(|f| f.name.as_str()).collect()
}

fn find_field<'a>(info: &'a StructInfo, name: &str) -> &'a FieldInfo {
    info.fields
        .iter()
        .find(|f| f.name == name)
        .unwrap_or_else(|| panic!("field {name} not found in {:?}", field_names(info)))
}
