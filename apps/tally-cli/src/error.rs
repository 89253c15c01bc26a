//! Error types for the Tally CLI.
//!
//! ```text
//! ConfigError ──────┐
//! ValidationError ──┼──► CliError ──► main() ──► stderr, exit code 1
//! io / json ────────┘
//! ```

use std::path::PathBuf;

use tally_core::ValidationError;
use thiserror::Error;

/// Result type alias for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// An environment override could not be parsed.
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    /// The merged configuration breaks a rule.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Anything a command can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ConfigError::InvalidValue {
            key: "TALLY_TAX_RATE_BPS".to_string(),
            value: "seven".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for TALLY_TAX_RATE_BPS: 'seven'");

        let err: CliError = ValidationError::MustBePositive {
            field: "purchase_quantity".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Invalid input: purchase_quantity must be positive");
    }

    #[test]
    fn test_config_error_is_transparent() {
        let err: CliError = ConfigError::NotFound(PathBuf::from("/nope/tally.toml")).into();
        assert_eq!(err.to_string(), "Config file not found: /nope/tally.toml");
    }
}
