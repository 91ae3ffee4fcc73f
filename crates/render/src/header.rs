//! Structural rendering of the generated header
//!
//! The header layout lives in a handlebars template; per-field widget code
//! is produced by [`crate::widget`] beforehand and passed in as plain text.

use crate::widget::{emit_widget, prettify_name, EmitOptions, DEFAULT_PARAM};
use handlebars::{
    no_escape, Context, Handlebars, Helper, HelperResult, Output, RenderContext, RenderErrorReason,
};
use imcodegen_core::config::Config;
use imcodegen_core::entities::StructInfo;
use imcodegen_core::error::{Error, Result};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Header template compiled into the binary
pub const DEFAULT_HEADER_TEMPLATE: &str = include_str!("../templates/codegen.hpp.hbs");

const TEMPLATE_NAME: &str = "codegen.hpp";

/// Indentation of statements inside generated draw functions
const BODY_INDENT: &str = "        ";

/// Namespace used when none is given
pub const DEFAULT_NAMESPACE: &str = "codegen";

/// Options for one generated header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Namespace wrapping all generated code
    pub namespace: String,

    /// Extra headers to include, bare names get angle brackets
    pub includes: Vec<String>,

    /// Name of the `type_list` alias, not generated when `None`
    pub type_list: Option<String>,

    /// Generate `type_name<T>` specializations
    pub generate_names: bool,

    /// Parameter name of the draw functions
    pub param: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            includes: Vec::new(),
            type_list: None,
            generate_names: true,
            param: DEFAULT_PARAM.to_string(),
        }
    }
}

/// Wrap a bare header name in angle brackets, keep delimited ones as given
pub fn normalize_include(include: &str) -> String {
    let include = include.trim();
    if include.starts_with('<') || include.starts_with('"') {
        include.to_string()
    } else {
        format!("<{include}>")
    }
}

#[derive(Debug, Serialize)]
struct OptionsView<'a> {
    namespace: &'a str,
    includes: Vec<String>,
    generate_names: bool,
    type_list: Option<&'a str>,
    param: &'a str,
}

#[derive(Debug, Serialize)]
struct StructView<'a> {
    name: &'a str,
    full_name: String,
    display_name: Option<&'a str>,
    line: usize,
    widgets: Vec<String>,
}

#[derive(Debug, Serialize)]
struct HeaderView<'a> {
    opts: OptionsView<'a>,
    structs: Vec<StructView<'a>>,
}

/// `{{prettify name}}`: snake_case to Title Case
fn prettify_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let value = h
        .param(0)
        .and_then(|param| param.value().as_str())
        .ok_or(RenderErrorReason::ParamNotFoundForIndex("prettify", 0))?;
    out.write(&prettify_name(value))?;
    Ok(())
}

/// Renders complete headers from extracted structs
pub struct HeaderRenderer {
    handlebars: Handlebars<'static>,
}

impl HeaderRenderer {
    /// Renderer using the bundled template
    pub fn new() -> Result<Self> {
        Self::with_template(DEFAULT_HEADER_TEMPLATE)
    }

    /// Renderer using a handlebars template read from disk
    pub fn from_template_file(path: &Path) -> Result<Self> {
        let template = std::fs::read_to_string(path)?;
        debug!("Loaded header template from {}", path.display());
        Self::with_template(&template)
    }

    /// Renderer using a caller-supplied handlebars template
    pub fn with_template(template: &str) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(no_escape);
        handlebars.register_helper("prettify", Box::new(prettify_helper));
        handlebars
            .register_template_string(TEMPLATE_NAME, template)
            .map_err(|e| Error::render(format!("Invalid header template: {e}")))?;

        Ok(Self { handlebars })
    }

    /// Render the header for `structs`
    pub fn render(
        &self,
        structs: &[StructInfo],
        config: &Config,
        opts: &GeneratorOptions,
    ) -> Result<String> {
        let emit = EmitOptions {
            indent: BODY_INDENT.to_string(),
            param: opts.param.clone(),
        };

        let structs = structs
            .iter()
            .map(|info| {
                let widgets: Vec<String> = info
                    .fields
                    .iter()
                    .filter_map(|field| emit_widget(field, config, &emit))
                    .collect();
                debug!(
                    "Rendering {} with {} of {} fields",
                    info.full_name(),
                    widgets.len(),
                    info.fields.len()
                );

                StructView {
                    name: &info.name,
                    full_name: info.full_name(),
                    display_name: info.display_name.as_deref(),
                    line: info.line,
                    widgets,
                }
            })
            .collect();

        let view = HeaderView {
            opts: OptionsView {
                namespace: &opts.namespace,
                includes: opts.includes.iter().map(|i| normalize_include(i)).collect(),
                generate_names: opts.generate_names,
                type_list: opts.type_list.as_deref(),
                param: &opts.param,
            },
            structs,
        };

        self.handlebars
            .render(TEMPLATE_NAME, &view)
            .map_err(|e| Error::render(format!("Failed to render header: {e}")))
    }
}
