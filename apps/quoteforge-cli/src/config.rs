//! # CLI Configuration
//!
//! Display and behaviour settings for the `quoteforge` binary.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--format`, `--strict`)
//! 2. Environment variables (`QUOTEFORGE_*`)
//! 3. Config file (`--config <PATH>`, else `config.json` in the platform
//!    config directory)
//! 4. Defaults (this file)
//!
//! Configuration is read-only after startup.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ValueEnum;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Most decimal places text output will show.
pub const MAX_CURRENCY_DECIMALS: u8 = 6;

/// How command output is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned, human-readable text with currency formatting.
    #[default]
    Text,
    /// Pretty-printed JSON of the engine's values.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("QUOTEFORGE_FORMAT".to_string())),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CliConfig {
    /// Currency symbol used in text output.
    pub currency_symbol: String,

    /// Decimal places shown in text output. Display only.
    pub currency_decimals: u8,

    pub format: OutputFormat,

    /// Validate the quote before pricing it and fail on the first violation.
    pub strict: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            format: OutputFormat::Text,
            strict: false,
        }
    }
}

impl CliConfig {
    /// Loads defaults, then the config file, then the process environment,
    /// and checks the result.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit_path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.apply_env(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values whatever layer they came from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currency_decimals > MAX_CURRENCY_DECIMALS {
            return Err(ConfigError::InvalidValue(format!(
                "currencyDecimals (at most {MAX_CURRENCY_DECIMALS})"
            )));
        }
        Ok(())
    }

    /// Reads a JSON config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "Config file loaded");
        Ok(config)
    }

    /// Overlays `QUOTEFORGE_*` variables from `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(symbol) = lookup("QUOTEFORGE_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Some(decimals) = lookup("QUOTEFORGE_CURRENCY_DECIMALS") {
            self.currency_decimals = decimals
                .trim()
                .parse::<u8>()
                .map_err(|_| ConfigError::InvalidValue("QUOTEFORGE_CURRENCY_DECIMALS".to_string()))?;
        }

        if let Some(format) = lookup("QUOTEFORGE_FORMAT") {
            self.format = format.parse()?;
        }

        if let Some(strict) = lookup("QUOTEFORGE_STRICT") {
            self.strict = strict
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("QUOTEFORGE_STRICT".to_string()))?;
        }

        Ok(())
    }
}

/// `config.json` inside the platform config directory.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.QuoteForge.quoteforge/config.json`
/// - **Windows**: `%APPDATA%\QuoteForge\quoteforge\config\config.json`
/// - **Linux**: `~/.config/quoteforge/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "QuoteForge", "quoteforge")
        .map(|dirs| dirs.config_dir().join("config.json"))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Failed to read config file {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
