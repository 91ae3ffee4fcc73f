//! Header generation pipeline
//!
//! Config, template and input are all loaded before anything is rendered,
//! and output is only written once the complete text exists.

use anyhow::{Context, Result};
use imcodegen_core::config::Config;
use imcodegen_languages::extract_file;
use imcodegen_render::{run_formatter, GeneratorOptions, HeaderRenderer, DEFAULT_FORMAT_TIMEOUT};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// One generation run
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Annotated C++ header
    pub input: PathBuf,

    /// Widget bindings XML
    pub config: PathBuf,

    /// Output header, stdout when `None`
    pub output: Option<PathBuf>,

    pub options: GeneratorOptions,

    /// Header template replacing the bundled one
    pub template: Option<PathBuf>,

    /// Formatter program to run over the result
    pub formatter: Option<String>,
}

impl GenerateRequest {
    pub fn new(input: impl Into<PathBuf>, config: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            config: config.into(),
            output: None,
            options: GeneratorOptions::default(),
            template: None,
            formatter: None,
        }
    }
}

fn load_renderer(template: Option<&Path>) -> Result<HeaderRenderer> {
    let renderer = match template {
        Some(path) => HeaderRenderer::from_template_file(path)
            .with_context(|| format!("Failed to load template {}", path.display()))?,
        None => HeaderRenderer::new()?,
    };
    Ok(renderer)
}

/// Write generated code, creating parent directories as needed
pub fn write_output(path: &Path, code: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    fs::write(path, code).with_context(|| format!("Failed to write {}", path.display()))
}

fn format_or_keep(code: String, program: &str) -> String {
    match run_formatter(&code, program, DEFAULT_FORMAT_TIMEOUT) {
        Ok(formatted) => formatted,
        Err(e) => {
            warn!("Formatter failed, keeping unformatted output: {e}");
            code
        }
    }
}

/// Print the extracted structs as JSON, returning how many were found
pub fn dump_model(input: &Path, stdout: &mut dyn Write) -> Result<usize> {
    let structs =
        extract_file(input).with_context(|| format!("Failed to process {}", input.display()))?;

    serde_json::to_writer_pretty(&mut *stdout, &structs).context("Failed to serialize model")?;
    writeln!(stdout).context("Failed to write to stdout")?;
    Ok(structs.len())
}

/// Run the pipeline, returning the number of generated types
///
/// When no annotated struct is found nothing is written and `0` is returned.
pub fn run(request: &GenerateRequest, stdout: &mut dyn Write) -> Result<usize> {
    let config = Config::from_file(&request.config).context("Failed to load widget bindings")?;
    let renderer = load_renderer(request.template.as_deref())?;

    debug!("Parsing {}", request.input.display());
    let structs = extract_file(&request.input)
        .with_context(|| format!("Failed to process {}", request.input.display()))?;

    if structs.is_empty() {
        warn!(
            "No @imgui annotated structs found in {}",
            request.input.display()
        );
        return Ok(0);
    }

    debug!("Found {} annotated structs:", structs.len());
    for info in &structs {
        debug!("  - {} ({} fields)", info.full_name(), info.fields.len());
    }

    let mut code = renderer.render(&structs, &config, &request.options)?;
    if let Some(program) = &request.formatter {
        code = format_or_keep(code, program);
    }

    match &request.output {
        Some(path) => {
            write_output(path, &code)?;
            info!("Generated {}: {} types", path.display(), structs.len());
        }
        None => {
            stdout
                .write_all(code.as_bytes())
                .context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(structs.len())
}
