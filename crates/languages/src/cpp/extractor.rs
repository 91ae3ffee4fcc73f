//! Declaration walk
//!
//! The enclosing namespace path is threaded through the recursion as an
//! explicit parameter; results are appended to a caller-owned vector.

use super::constants::{node_kinds, punctuation};
use super::fields::{is_gating_invocation, parse_field_declaration, parse_gating_field};
use super::node_text;
use crate::annotations::parse_annotations;
use crate::comments::{collect_comments, find_preceding, CommentSpan};
use imcodegen_core::entities::{SourceSpan, StructInfo};
use tracing::debug;
use tree_sitter::{Node, Tree};

/// Extract every `@imgui` annotated struct or class from a parsed header
///
/// Structs appear in document order, fields in declaration order.
pub fn extract_structs(tree: &Tree, source: &[u8]) -> Vec<StructInfo> {
    let root = tree.root_node();
    let comments = collect_comments(root, source);

    let mut structs = Vec::new();
    visit(root, source, &comments, &[], &mut structs);
    structs
}

fn visit(
    node: Node,
    source: &[u8],
    comments: &[CommentSpan],
    scope: &[String],
    structs: &mut Vec<StructInfo>,
) {
    match node.kind() {
        node_kinds::NAMESPACE_DEFINITION => {
            visit_namespace(node, source, comments, scope, structs);
            return;
        }
        node_kinds::STRUCT_SPECIFIER | node_kinds::CLASS_SPECIFIER => {
            if let Some(info) = parse_struct(node, source, comments, scope) {
                structs.push(info);
            }
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit(child, source, comments, scope, structs);
    }
}

/// Namespace name segments; `a::b` yields two, an anonymous namespace none
fn namespace_segments(node: Node, source: &[u8]) -> Vec<String> {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            node_kinds::NAMESPACE_IDENTIFIER | node_kinds::IDENTIFIER => {
                return node_text(child, source)
                    .map(|name| vec![name.to_string()])
                    .unwrap_or_default();
            }
            node_kinds::NESTED_NAMESPACE_SPECIFIER => {
                return node_text(child, source)
                    .map(|text| {
                        text.split(punctuation::SCOPE)
                            .map(str::trim)
                            .filter(|segment| !segment.is_empty())
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default();
            }
            _ => {}
        }
    }
    Vec::new()
}

fn visit_namespace(
    node: Node,
    source: &[u8],
    comments: &[CommentSpan],
    scope: &[String],
    structs: &mut Vec<StructInfo>,
) {
    let mut cursor = node.walk();
    let Some(body) = node
        .children(&mut cursor)
        .find(|child| child.kind() == node_kinds::DECLARATION_LIST)
    else {
        return;
    };

    let mut inner_scope = scope.to_vec();
    inner_scope.extend(namespace_segments(node, source));

    let mut body_cursor = body.walk();
    for child in body.children(&mut body_cursor) {
        visit(child, source, comments, &inner_scope, structs);
    }
}

/// Build a [`StructInfo`] if the declaration is annotated with `@imgui`
fn parse_struct(
    node: Node,
    source: &[u8],
    comments: &[CommentSpan],
    scope: &[String],
) -> Option<StructInfo> {
    let mut name = None;
    let mut body = None;

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            node_kinds::TYPE_IDENTIFIER => name = node_text(child, source),
            node_kinds::FIELD_DECLARATION_LIST => body = Some(child),
            _ => {}
        }
    }
    let (name, body) = (name?, body?);

    let span = SourceSpan::from_tree_sitter_node(node);
    let annotations = find_preceding(&span, comments).map(|c| parse_annotations(&c.text));
    let Some(annotations) = annotations.filter(|anns| anns.imgui) else {
        debug!("Skipping '{name}': no @imgui annotation");
        return None;
    };

    let mut info = StructInfo::new(name, scope.to_vec(), span.start_line);
    info.display_name = annotations.name;

    let mut body_cursor = body.walk();
    for child in body.children(&mut body_cursor) {
        let field = if is_gating_invocation(child, source) {
            parse_gating_field(child, source, comments)
        } else if child.kind() == node_kinds::FIELD_DECLARATION {
            parse_field_declaration(child, source, comments)
        } else {
            None
        };

        if let Some(field) = field {
            info.fields.push(field);
        }
    }

    debug!(
        "Extracted '{}' with {} fields",
        info.full_name(),
        info.fields.len()
    );
    Some(info)
}
