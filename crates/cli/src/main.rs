//! imcodegen - ImGui editor code from annotated C++ headers
//!
//! Structs opted in with `// @imgui` get a `draw()` function whose widgets
//! come from an XML bindings file.

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use anyhow::{bail, Result};
use clap::Parser;
use imcodegen::{dump_model, run, GenerateRequest, STARTER_CONFIG};
use imcodegen_render::header::DEFAULT_NAMESPACE;
use imcodegen_render::widget::DEFAULT_PARAM;
use imcodegen_render::{GeneratorOptions, DEFAULT_FORMATTER};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "imcodegen")]
#[command(about = "Generate ImGui editor code from annotated C++ headers")]
#[command(version)]
struct Cli {
    /// Input C++ header
    #[arg(value_name = "INPUT", required_unless_present = "dump_config")]
    input: Option<PathBuf>,

    /// Widget bindings config XML
    #[arg(
        short,
        long,
        value_name = "FILE",
        required_unless_present_any = ["dump_config", "dump_model"]
    )]
    config: Option<PathBuf>,

    /// Output header file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Namespace of the generated code
    #[arg(short, long, default_value = DEFAULT_NAMESPACE)]
    namespace: String,

    /// Add an #include to the generated file (repeatable)
    #[arg(long = "include", value_name = "HEADER")]
    includes: Vec<String>,

    /// Generate a type list alias with the given name
    #[arg(long, value_name = "NAME")]
    type_list: Option<String>,

    /// Don't generate type_name<T> traits
    #[arg(long)]
    no_names: bool,

    /// Parameter name of the draw functions
    #[arg(long, default_value = DEFAULT_PARAM)]
    param: String,

    /// Handlebars template replacing the bundled header layout
    #[arg(long, value_name = "FILE")]
    template: Option<PathBuf>,

    /// Run the formatter over the output
    #[arg(long)]
    format: bool,

    /// Formatter program
    #[arg(long, default_value = DEFAULT_FORMATTER)]
    formatter: String,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print a starter bindings config and exit
    #[arg(long)]
    dump_config: bool,

    /// Print the structs extracted from INPUT as JSON and exit
    #[arg(long, conflicts_with = "dump_config")]
    dump_model: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if cli.dump_config {
        print!("{STARTER_CONFIG}");
        return Ok(());
    }

    if cli.dump_model {
        let Some(input) = cli.input else {
            bail!("--dump-model needs an input file");
        };
        dump_model(&input, &mut io::stdout().lock())?;
        return Ok(());
    }

    let (Some(input), Some(config)) = (cli.input, cli.config) else {
        bail!("input file and --config are required (or use --dump-config)");
    };

    let request = GenerateRequest {
        input,
        config,
        output: cli.output,
        options: GeneratorOptions {
            namespace: cli.namespace,
            includes: cli.includes,
            type_list: cli.type_list,
            generate_names: !cli.no_names,
            param: cli.param,
        },
        template: cli.template,
        formatter: cli.format.then_some(cli.formatter),
    };

    run(&request, &mut io::stdout().lock())?;
    Ok(())
}

/// Initialize logging on stderr, stdout carries generated code
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "imcodegen={level},imcodegen_core={level},imcodegen_languages={level},imcodegen_render={level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
