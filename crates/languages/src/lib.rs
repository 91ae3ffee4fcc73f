//! Annotated declaration extraction from C++ headers
//!
//! Parses a header with tree-sitter, associates comments with declarations
//! and returns the `@imgui` annotated structs as [`StructInfo`]s.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use imcodegen_core::error::{Error, Result, ResultExt};
use imcodegen_core::StructInfo;
use std::path::Path;

pub mod annotations;
pub mod comments;
pub mod cpp;

pub use annotations::{parse_annotations, AnnotationSet};

/// Trait for extracting annotated structs from header source
pub trait Extractor: Send + Sync {
    /// Extract annotated structs from source code
    fn extract(&self, source: &str, file_path: &Path) -> Result<Vec<StructInfo>>;
}

/// Extractor for C++ headers
#[derive(Debug, Default, Clone, Copy)]
pub struct CppExtractor;

impl CppExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for CppExtractor {
    fn extract(&self, source: &str, file_path: &Path) -> Result<Vec<StructInfo>> {
        let tree = cpp::parse_source(source, &file_path.display().to_string())?;
        Ok(cpp::extract_structs(&tree, source.as_bytes()))
    }
}

/// Read a header from disk and extract its annotated structs
pub fn extract_file(path: &Path) -> Result<Vec<StructInfo>> {
    if !path.is_file() {
        return Err(Error::invalid_input(format!(
            "Input file not found: {}",
            path.display()
        )));
    }

    let source = std::fs::read_to_string(path)
        .context(format!("Failed to read input file {}", path.display()))?;

    CppExtractor::new().extract(&source, path)
}
