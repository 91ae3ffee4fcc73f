//! C++ header extraction
//!
//! Walks a tree-sitter-cpp syntax tree and collects `@imgui` annotated
//! structs and classes together with their fields.

pub(crate) mod constants;
mod extractor;
mod fields;

#[cfg(test)]
mod tests;

pub use extractor::extract_structs;

use imcodegen_core::error::{Error, Result};
use tree_sitter::{Node, Parser, Tree};

/// Text covered by a node, `None` if it is not valid UTF-8
pub(crate) fn node_text<'a>(node: Node, source: &'a [u8]) -> Option<&'a str> {
    node.utf8_text(source).ok()
}

/// Create a parser for C++ headers
pub fn create_parser() -> Result<Parser> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_cpp::LANGUAGE.into())
        .map_err(|e| Error::extraction(format!("Failed to load C++ grammar: {e}")))?;
    Ok(parser)
}

/// Parse header source into a syntax tree
pub fn parse_source(source: &str, file: &str) -> Result<Tree> {
    let mut parser = create_parser()?;
    parser
        .parse(source, None)
        .ok_or_else(|| Error::parse(file, "tree-sitter produced no syntax tree"))
}
