//! Field extraction from struct and class bodies
//!
//! Two shapes are recognised: ordinary field declarations and
//! `DEBUG_ONLY(type name)` / `NDEBUG_ONLY(type name)` macro invocations.

use super::constants::{keywords, node_kinds, punctuation};
use super::node_text;
use crate::annotations::parse_annotations;
use crate::comments::{find_preceding, find_trailing, CommentSpan};
use imcodegen_core::entities::{FieldAttributes, FieldInfo, GatingMacro, SourceSpan};
use std::str::FromStr;
use tracing::debug;
use tree_sitter::Node;

/// Whether a field declaration is `const`-qualified
fn has_const_qualifier(node: Node, source: &[u8]) -> bool {
    let mut cursor = node.walk();
    let qualified = node.children(&mut cursor).any(|child| {
        child.kind() == node_kinds::TYPE_QUALIFIER
            && node_text(child, source) == Some(keywords::CONST)
    });

    qualified || starts_with_const(node_text(node, source).unwrap_or_default())
}

fn starts_with_const(text: &str) -> bool {
    text.trim_start()
        .strip_prefix(keywords::CONST)
        .is_some_and(|rest| rest.starts_with(char::is_whitespace))
}

/// Name nested one level inside a pointer declarator
fn pointer_declarator_name<'a>(node: Node, source: &'a [u8]) -> Option<&'a str> {
    let mut cursor = node.walk();
    let mut name = None;
    for sub in node.children(&mut cursor) {
        if matches!(
            sub.kind(),
            node_kinds::IDENTIFIER | node_kinds::FIELD_IDENTIFIER
        ) {
            name = node_text(sub, source);
        }
    }
    name
}

/// Parse an ordinary `field_declaration`
///
/// Returns `None` when the declaration lacks a recognised type or name,
/// e.g. methods, arrays or references.
pub(crate) fn parse_field_declaration(
    node: Node,
    source: &[u8],
    comments: &[CommentSpan],
) -> Option<FieldInfo> {
    let mut type_name: Option<String> = None;
    let mut field_name: Option<&str> = None;

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        let kind = child.kind();
        if node_kinds::FIELD_TYPES.contains(&kind) {
            type_name = node_text(child, source).map(|t| t.trim().to_string());
        } else if matches!(
            kind,
            node_kinds::FIELD_IDENTIFIER | node_kinds::IDENTIFIER
        ) {
            field_name = node_text(child, source);
        } else if kind == node_kinds::POINTER_DECLARATOR {
            if let Some(name) = pointer_declarator_name(child, source) {
                field_name = Some(name);
            }
            if let Some(ty) = type_name.as_mut() {
                ty.push_str(punctuation::POINTER);
            }
        }
    }

    let line = node.start_position().row + 1;
    let (Some(type_name), Some(field_name)) = (type_name, field_name) else {
        debug!("Skipping unsupported field declaration at line {line}");
        return None;
    };

    let mut field = FieldInfo::new(field_name, type_name, line);
    if has_const_qualifier(node, source) {
        field.attributes |= FieldAttributes::READONLY;
    }

    let span = SourceSpan::from_tree_sitter_node(node);
    if let Some(comment) = find_preceding(&span, comments) {
        parse_annotations(&comment.text).apply_to(&mut field);
    }

    Some(field)
}

/// Callee and argument nodes of a gating macro invocation
///
/// Accepts both `expression_statement > call_expression` and the
/// constructor-like `declaration > function_declarator` reading that
/// tree-sitter picks for `DEBUG_ONLY(int x);` inside class bodies.
fn gating_invocation<'t>(node: Node<'t>, source: &[u8]) -> Option<(GatingMacro, Node<'t>)> {
    let (call_kind, args_kind) = match node.kind() {
        node_kinds::EXPRESSION_STATEMENT => {
            (node_kinds::CALL_EXPRESSION, node_kinds::ARGUMENT_LIST)
        }
        node_kinds::DECLARATION | node_kinds::FIELD_DECLARATION => {
            if has_type_child(node) {
                return None;
            }
            (node_kinds::FUNCTION_DECLARATOR, node_kinds::PARAMETER_LIST)
        }
        _ => return None,
    };

    let mut cursor = node.walk();
    let call = node
        .children(&mut cursor)
        .find(|child| child.kind() == call_kind)?;

    let mut callee = None;
    let mut args = None;
    let mut call_cursor = call.walk();
    for child in call.children(&mut call_cursor) {
        match child.kind() {
            node_kinds::IDENTIFIER => callee = node_text(child, source),
            kind if kind == args_kind => args = Some(child),
            _ => {}
        }
    }

    let gating = GatingMacro::from_str(callee?).ok()?;
    Some((gating, args?))
}

fn has_type_child(node: Node) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|child| node_kinds::FIELD_TYPES.contains(&child.kind()));
    found
}

/// Split `type name` macro arguments at the last whitespace run
///
/// Splits that leave a non-identifier name or a type ending in a detached
/// `&`, `&&` or `*` are ambiguous and rejected.
pub(crate) fn split_macro_argument(args_text: &str) -> Option<(String, String)> {
    let inner = args_text
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(args_text)
        .trim();

    let split_at = inner.rfind(char::is_whitespace)?;
    let type_part = inner[..split_at].trim_end();
    let name = inner[split_at..]
        .trim()
        .trim_end_matches(punctuation::STATEMENT_END);

    if type_part.is_empty() || !is_identifier(name) {
        return None;
    }

    let last_type_token = type_part.split_whitespace().last().unwrap_or_default();
    if matches!(last_type_token, "&" | "&&" | "*") {
        return None;
    }

    Some((type_part.to_string(), name.to_string()))
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Parse a `DEBUG_ONLY(...)`/`NDEBUG_ONLY(...)` field
///
/// Annotations may sit before or after the invocation; both are merged.
pub(crate) fn parse_gating_field(
    node: Node,
    source: &[u8],
    comments: &[CommentSpan],
) -> Option<FieldInfo> {
    let (gating, args) = gating_invocation(node, source)?;
    let line = node.start_position().row + 1;

    let Some((type_name, field_name)) = node_text(args, source).and_then(split_macro_argument)
    else {
        debug!("Skipping {gating} field at line {line}: cannot split type and name");
        return None;
    };

    let mut field = FieldInfo::new(field_name, type_name, line);
    field.attributes |= gating.attribute();
    if starts_with_const(&field.type_name) {
        field.attributes |= FieldAttributes::READONLY;
    }

    let span = SourceSpan::from_tree_sitter_node(node);
    if let Some(comment) = find_preceding(&span, comments) {
        parse_annotations(&comment.text).apply_to(&mut field);
    }
    if let Some(comment) = find_trailing(&span, comments) {
        parse_annotations(&comment.text).apply_to(&mut field);
    }

    Some(field)
}

/// Whether a body child is a gating macro invocation
pub(crate) fn is_gating_invocation(node: Node, source: &[u8]) -> bool {
    gating_invocation(node, source).is_some()
}
