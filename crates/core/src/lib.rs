//! Core types for the imcodegen editor-binding generator
//!
//! This crate provides the foundational abstractions shared by the
//! extraction and rendering crates, including:
//!
//! - **Entities**: annotated structs and their fields
//! - **Configuration**: type-to-widget bindings and their lookup rules
//! - **Error handling**: unified error types
//!

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod config;
pub mod entities;
pub mod error;

// Re-export main types for convenience
pub use config::{normalize_type_name, Config, WidgetBinding};
pub use entities::{
    FieldAttributes, FieldInfo, GatingMacro, SourceSpan, StructInfo, ValueRange,
};
pub use error::{Error, Result, ResultExt};

/// Version of the core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::entities::{FieldAttributes, FieldInfo, StructInfo};
    pub use crate::error::{Result, ResultExt};
}
