//! CLI entry point for parcel-sort.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use parcel_sort::config::{Config, OutputFormat};
use parcel_sort::{logging, ErrorKind, SortError};

use cli::{Cli, Commands};
use cmd::ui::Output;

/// Exit status for non-numeric input.
const EXIT_TYPE_ERROR: u8 = 2;
/// Exit status for zero, negative or non-finite input.
const EXIT_VALUE_ERROR: u8 = 3;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", error_marker(), err);
            ExitCode::from(exit_status(&err))
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    logging::init(&logging::resolve_filter(
        cli.verbose,
        cli.quiet,
        &config.log.level,
    ));

    let color = config.output.color.enabled(atty::is(atty::Stream::Stdout));
    colored::control::set_override(color);

    let output_for = |format: Option<cli::FormatArg>| {
        let format = format
            .map(OutputFormat::from)
            .unwrap_or(config.output.format);
        Output::new(format, color)
    };

    match cli.command {
        Commands::Classify {
            width,
            height,
            length,
            mass,
            format,
        } => cmd::classify::cmd_classify(&output_for(format), &width, &height, &length, &mass),
        Commands::Thresholds { format } => cmd::classify::cmd_thresholds(&output_for(format)),
        Commands::Version { detailed } => cmd::util::cmd_version(detailed),
        Commands::Completion { shell } => cmd::util::cmd_completion(shell),
    }
}

/// Red `✗` when stderr is a terminal, plain otherwise.
///
/// Decided from stderr alone: the color override set in `run` follows
/// stdout and may never have been applied if config loading failed.
fn error_marker() -> String {
    if atty::is(atty::Stream::Stderr) {
        colored::control::set_override(true);
        "✗".red().to_string()
    } else {
        "✗".to_string()
    }
}

/// Map an error to the process exit status.
fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<SortError>().map(SortError::kind) {
        Some(ErrorKind::Type) => EXIT_TYPE_ERROR,
        Some(ErrorKind::Value) => EXIT_VALUE_ERROR,
        None => 1,
    }
}
