use std::fs;
use std::io::{self, Write};
use std::process;

use clap::Parser;
use jtrace::config::{Limit, TraceConfig};
use jtrace::errors::ConfigError;
use jtrace::{ErrorRecord, StackTraceRenderer, TraceError};
use owo_colors::OwoColorize;

#[derive(Parser)]
#[command(name = "jtrace", about = "Render captured errors as Java-style stack traces")]
struct Cli {
    /// Path to a JSON error record
    file: Option<String>,
    /// Render an inline JSON error record
    #[arg(long)]
    eval: Option<String>,
    /// Path to a JSON config file
    #[arg(long)]
    config: Option<String>,
    /// Render call arguments
    #[arg(long)]
    include_args: bool,
    /// Render arrays, objects and dates in full instead of their type names
    #[arg(long)]
    include_complex_args: bool,
    /// Character budget for one frame's arguments, or "unlimited"
    #[arg(long, value_parser = parse_args_max_length)]
    args_max_length: Option<Limit>,
    /// Frames printed per error, or "unlimited"
    #[arg(long, value_parser = parse_max_items)]
    max_items: Option<Limit>,
    /// Causes printed in full, or "unlimited"
    #[arg(long, value_parser = parse_max_causes)]
    max_causes: Option<Limit>,
    /// Print version and exit
    #[arg(long)]
    version: bool,
}

fn parse_args_max_length(value: &str) -> Result<Limit, ConfigError> {
    Limit::parse("argsMaxLength", value)
}

fn parse_max_items(value: &str) -> Result<Limit, ConfigError> {
    Limit::parse("maxItems", value)
}

fn parse_max_causes(value: &str) -> Result<Limit, ConfigError> {
    Limit::parse("maxCauses", value)
}

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!(
            "{} {}",
            "jtrace".bright_cyan().bold(),
            env!("CARGO_PKG_VERSION").bright_black()
        );
        return;
    }

    if let Err(err) = run(cli) {
        eprintln!("{} {err}", "error:".red().bold());
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), TraceError> {
    let config = load_config(&cli)?;

    let json = match (&cli.eval, &cli.file) {
        (Some(inline), _) => inline.clone(),
        (None, Some(file)) => read(file)?,
        (None, None) => io::read_to_string(io::stdin())?,
    };
    let record = ErrorRecord::from_json(&json)?;

    let mut stdout = io::stdout().lock();
    StackTraceRenderer::new(&config).write_to(&mut stdout, &record)?;
    writeln!(stdout)?;
    Ok(())
}

fn load_config(cli: &Cli) -> Result<TraceConfig, TraceError> {
    let base = match &cli.config {
        Some(path) => TraceConfig::from_json(&read(path)?)?,
        None => TraceConfig::default(),
    };

    let mut builder = base.to_builder();
    if cli.include_args {
        builder = builder.include_args(true);
    }
    if cli.include_complex_args {
        builder = builder.include_complex_args(true);
    }
    if let Some(limit) = cli.args_max_length {
        builder = builder.args_max_length(limit.into())?;
    }
    if let Some(limit) = cli.max_items {
        builder = builder.max_items(limit.into());
    }
    if let Some(limit) = cli.max_causes {
        builder = builder.max_causes(limit.into());
    }
    Ok(builder.build())
}

fn read(path: &str) -> Result<String, TraceError> {
    fs::read_to_string(path).map_err(|err| {
        TraceError::Io(io::Error::new(
            err.kind(),
            format!("could not read '{}': {err}", path.yellow()),
        ))
    })
}
