//! Code rendering for imcodegen
//!
//! - [`widget`]: per-field widget snippets from binding templates
//! - [`header`]: the complete header via a handlebars template
//! - [`formatter`]: optional external formatting pass

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod formatter;
pub mod header;
pub mod widget;

pub use formatter::{run_formatter, FormatError, DEFAULT_FORMATTER, DEFAULT_FORMAT_TIMEOUT};
pub use header::{normalize_include, GeneratorOptions, HeaderRenderer, DEFAULT_HEADER_TEMPLATE};
pub use widget::{emit_widget, prettify_name, select_template, EmitOptions};

use imcodegen_core::config::Config;
use imcodegen_core::entities::StructInfo;
use imcodegen_core::error::Result;

/// Render a header with the bundled template
pub fn generate_header(
    structs: &[StructInfo],
    config: &Config,
    opts: &GeneratorOptions,
) -> Result<String> {
    HeaderRenderer::new()?.render(structs, config, opts)
}
