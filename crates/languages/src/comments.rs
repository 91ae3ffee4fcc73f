//! Comment collection and association
//!
//! Comments are reduced to plain spans so that association only compares
//! line numbers and byte offsets and never touches the syntax tree.

use crate::cpp::constants::node_kinds;
use imcodegen_core::entities::SourceSpan;
use tree_sitter::Node;

/// A comment with its position in the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSpan {
    pub text: String,
    pub span: SourceSpan,
}

impl CommentSpan {
    pub fn new(text: impl Into<String>, span: SourceSpan) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}

/// Collect every comment under `root` in document order
pub fn collect_comments(root: Node, source: &[u8]) -> Vec<CommentSpan> {
    let mut comments = Vec::new();
    collect_into(root, source, &mut comments);
    comments
}

fn collect_into(node: Node, source: &[u8], comments: &mut Vec<CommentSpan>) {
    if node.kind() == node_kinds::COMMENT {
        if let Ok(text) = node.utf8_text(source) {
            comments.push(CommentSpan::new(
                text,
                SourceSpan::from_tree_sitter_node(node),
            ));
        }
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_into(child, source, comments);
    }
}

/// Find the comment attached in front of a declaration
///
/// Candidates are scanned from the last comment backwards. A comment ending
/// on the line above the target matches, as does one ending on the target's
/// first line before the target starts (`/* @imgui */ struct Foo {}`).
pub fn find_preceding<'a>(
    target: &SourceSpan,
    comments: &'a [CommentSpan],
) -> Option<&'a CommentSpan> {
    comments.iter().rev().find(|comment| {
        let end_line = comment.span.end_line;
        end_line + 1 == target.start_line
            || (end_line == target.start_line && comment.span.end_byte <= target.start_byte)
    })
}

/// Find the first comment after a declaration on its last line
pub fn find_trailing<'a>(
    target: &SourceSpan,
    comments: &'a [CommentSpan],
) -> Option<&'a CommentSpan> {
    comments.iter().find(|comment| {
        comment.span.start_line == target.end_line && comment.span.start_byte >= target.end_byte
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start_line: usize, end_line: usize, start_byte: usize, end_byte: usize) -> SourceSpan {
        SourceSpan {
            start_line,
            end_line,
            start_byte,
            end_byte,
        }
    }

    #[test]
    fn test_preceding_on_previous_line() {
        let comments = vec![CommentSpan::new("// @imgui", span(1, 1, 0, 9))];
        let target = span(2, 4, 10, 40);
        assert_eq!(
            find_preceding(&target, &comments).map(|c| c.text.as_str()),
            Some("// @imgui")
        );
    }

    #[test]
    fn test_preceding_inline_before_target() {
        let comments = vec![CommentSpan::new("/* @imgui */", span(3, 3, 20, 32))];
        let target = span(3, 3, 33, 60);
        assert!(find_preceding(&target, &comments).is_some());
    }

    #[test]
    fn test_same_line_after_target_is_not_preceding() {
        let comments = vec![CommentSpan::new("// @hide", span(3, 3, 40, 48))];
        let target = span(3, 3, 30, 38);
        assert!(find_preceding(&target, &comments).is_none());
    }

    #[test]
    fn test_blank_line_breaks_association() {
        let comments = vec![CommentSpan::new("// @imgui", span(1, 1, 0, 9))];
        let target = span(3, 5, 11, 40);
        assert!(find_preceding(&target, &comments).is_none());
    }

    #[test]
    fn test_preceding_picks_closest_candidate() {
        let comments = vec![
            CommentSpan::new("// first", span(4, 4, 0, 8)),
            CommentSpan::new("// second", span(5, 5, 9, 18)),
            CommentSpan::new("// far below", span(20, 20, 300, 312)),
        ];
        let target = span(6, 6, 19, 30);
        assert_eq!(
            find_preceding(&target, &comments).map(|c| c.text.as_str()),
            Some("// second")
        );
    }

    #[test]
    fn test_multiline_block_comment_uses_end_line() {
        let comments = vec![CommentSpan::new("/*\n * @imgui\n */", span(1, 3, 0, 16))];
        assert!(find_preceding(&span(4, 6, 17, 50), &comments).is_some());
        assert!(find_preceding(&span(2, 2, 17, 50), &comments).is_none());
    }

    #[test]
    fn test_trailing_same_line() {
        let comments = vec![
            CommentSpan::new("// above", span(7, 7, 60, 68)),
            CommentSpan::new("// @readonly", span(8, 8, 95, 107)),
            CommentSpan::new("// next line", span(9, 9, 108, 120)),
        ];
        let target = span(8, 8, 69, 94);
        assert_eq!(
            find_trailing(&target, &comments).map(|c| c.text.as_str()),
            Some("// @readonly")
        );
    }

    #[test]
    fn test_trailing_ignores_comment_before_target() {
        let comments = vec![CommentSpan::new("/* @color */", span(8, 8, 60, 72))];
        let target = span(8, 8, 73, 94);
        assert!(find_trailing(&target, &comments).is_none());
    }
}
