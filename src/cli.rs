//! CLI argument definitions for parcel-sort.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use parcel_sort::config::OutputFormat;

#[derive(Parser)]
#[command(name = "parcel-sort")]
#[command(version)]
#[command(about = "Classify packages as STANDARD, SPECIAL or REJECTED", long_about = None)]
#[command(
    after_help = "EXAMPLES:\n    parcel-sort classify 10 10 10 1        STANDARD\n    parcel-sort classify 150 1 1 1         SPECIAL (bulky)\n    parcel-sort classify 150 150 1 20      REJECTED (bulky and heavy)"
)]
pub struct Cli {
    /// Path to a config file (defaults to .parcel-sort.yaml, then ~/.config/parcel-sort/config.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a package by its dimensions (cm) and mass (kg)
    ///
    /// Values may be written as integers, decimals or scientific notation.
    /// Exit status is 2 for non-numeric input and 3 for zero, negative or
    /// non-finite input. Values starting with '-' are read as values, not flags.
    Classify {
        /// Width in centimeters
        #[arg(allow_hyphen_values = true)]
        width: String,
        /// Height in centimeters
        #[arg(allow_hyphen_values = true)]
        height: String,
        /// Length in centimeters
        #[arg(allow_hyphen_values = true)]
        length: String,
        /// Mass in kilograms
        #[arg(allow_hyphen_values = true)]
        mass: String,
        /// Output format (overrides config)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },
    /// Show the fixed classification thresholds
    Thresholds {
        /// Output format (overrides config)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },
    /// Show version information
    Version {
        /// Include commit and build date
        #[arg(long = "long")]
        detailed: bool,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// `--format` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Human,
    Json,
    Quiet,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Human => OutputFormat::Human,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Quiet => OutputFormat::Quiet,
        }
    }
}
