//! Presentation and logging settings for the `parcel-sort` binary.
//!
//! Classification thresholds are fixed constants and are never read from
//! configuration. Only output format, color, and log verbosity live here.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Project-local config file, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".parcel-sort.yaml";

/// Log levels accepted by `log.level`.
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

default_fn!(default_log_level, String, "warn".to_string());

/// Output format for classification results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored label plus derived quantities
    #[default]
    Human,
    /// One JSON object per invocation
    Json,
    /// Label only
    Quiet,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Quiet => write!(f, "quiet"),
        }
    }
}

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolve against whether the output stream is a terminal.
    pub fn enabled(&self, is_tty: bool) -> bool {
        match self {
            ColorChoice::Auto => is_tty,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub color: ColorChoice,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LogConfig {
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.level.as_str()) {
            anyhow::bail!(
                "log.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.level
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load configuration, falling back to defaults when no file exists.
    ///
    /// Lookup order:
    /// 1. `explicit` path (must exist)
    /// 2. `.parcel-sort.yaml` in the working directory
    /// 3. `~/.config/parcel-sort/config.yaml`
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_with(
            explicit,
            Path::new(PROJECT_CONFIG_FILE),
            global_config_path().as_deref(),
        )
    }

    /// Same as [`Config::load`] with the project and global paths supplied.
    pub fn load_with(
        explicit: Option<&Path>,
        project_path: &Path,
        global_path: Option<&Path>,
    ) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        if project_path.exists() {
            return Self::load_from(project_path);
        }

        match global_path.filter(|p| p.exists()) {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        // An empty file deserializes to YAML null
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(content).context("Failed to parse config")?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.log.validate()
    }
}

/// Returns the path to the global config file at ~/.config/parcel-sort/config.yaml
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config/parcel-sort/config.yaml"))
}
