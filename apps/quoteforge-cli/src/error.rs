//! # CLI Error Type
//!
//! Unified error type for the `quoteforge` commands.
//!
//! ## Error Flow
//! ```text
//! read file ──── io::Error ─────────────► CliError::Read
//! parse JSON ─── serde_json::Error ─────► CliError::Parse
//! load config ── ConfigError ───────────► CliError::Config
//! --strict ───── ValidationError ───────► CliError::Validation
//! render JSON ── serde_json::Error ─────► CliError::Render
//!                                              │
//!                                              ▼
//!                               stderr + exit code 1 (main.rs)
//! ```
//!
//! Pricing itself never fails, so there is no variant for it.

use std::path::PathBuf;

use quoteforge_core::ValidationError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read quote {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Quote {} is not a valid quote document: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Quote failed validation: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message() {
        let err: CliError = ValidationError::Required {
            field: "id".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Quote failed validation: id is required");
    }

    #[test]
    fn test_config_error_is_transparent() {
        let err: CliError = ConfigError::InvalidValue("QUOTEFORGE_FORMAT".to_string()).into();
        assert_eq!(err.to_string(), "Invalid value for QUOTEFORGE_FORMAT");
    }
}
