//! # Tally Configuration
//!
//! Configuration management for the CLI.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     TALLY_TAX_RATE_BPS=700                                             │
//! │     TALLY_LOG_LEVEL=debug                                              │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/tally/tally.toml (Linux)                                 │
//! │     ~/Library/Application Support/com.tally.tally/tally.toml (macOS)   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     15% / 10% / 5% category rates, 7% tax, 5% above 10 units           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # tally.toml
//! [pricing]
//! tax_rate_bps = 700
//! quantity_threshold = 10
//! quantity_discount_bps = 500
//!
//! [pricing.categories]
//! eletronicos = 1500
//! roupas = 1000
//! alimentos = 500
//!
//! [logging]
//! level = "info"
//! format = "pretty"  # pretty | json
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tally_core::validation::validate_rate_bps;
use tally_core::{PricingRules, Rate};

use crate::error::{ConfigError, ConfigResult};

/// Environment variable names.
pub const ENV_TAX_RATE_BPS: &str = "TALLY_TAX_RATE_BPS";
pub const ENV_QUANTITY_THRESHOLD: &str = "TALLY_QUANTITY_THRESHOLD";
pub const ENV_QUANTITY_DISCOUNT_BPS: &str = "TALLY_QUANTITY_DISCOUNT_BPS";
pub const ENV_LOG_LEVEL: &str = "TALLY_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "TALLY_LOG_FORMAT";

// =============================================================================
// Logging Settings
// =============================================================================

/// Output format for log lines on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,

    /// One JSON object per line.
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::Invalid(format!(
                "Unknown log format: '{}'. Valid options: pretty, json",
                other
            ))),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directive, e.g. `info` or `tally_cli=debug`.
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyConfig {
    /// Rules handed to `StandardPricing`.
    #[serde(default)]
    pub pricing: PricingRules,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl TallyConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`tally.toml`)
    /// 3. Environment variables
    ///
    /// Runs before any tracing subscriber exists, so it logs nothing; callers
    /// report the [`TallyConfig::source_path`] once logging is up.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let source = Self::source_path(config_path)?;
        Self::load_from(source.as_deref())
    }

    /// Loads from an already resolved file (or defaults when `None`), then
    /// applies environment overrides and validates.
    pub fn load_from(source: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match source {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// The file [`TallyConfig::load`] reads, if any.
    ///
    /// An explicit `config_path` must exist; the platform default path is
    /// used only when present.
    pub fn source_path(config_path: Option<PathBuf>) -> ConfigResult<Option<PathBuf>> {
        match config_path {
            Some(path) if path.exists() => Ok(Some(path)),
            Some(path) => Err(ConfigError::NotFound(path)),
            None => Ok(Self::default_config_path().filter(|path| path.exists())),
        }
    }

    /// Reads and parses a TOML file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses TOML text. Category keys are folded to lowercase.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let mut config: TallyConfig = toml::from_str(contents)?;
        config.pricing = config.pricing.normalized();
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        let rules = &self.pricing;

        validate_rate_bps("tax_rate_bps", rules.tax_rate.bps())
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        validate_rate_bps("quantity_discount_bps", rules.quantity_discount.bps())
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        for (category, rate) in &rules.categories {
            if category.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "category names must not be empty".into(),
                ));
            }
            validate_rate_bps(&format!("categories.{}", category), rate.bps())
                .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        }

        if rules.quantity_threshold < 0 {
            return Err(ConfigError::Invalid(
                "quantity_threshold must not be negative".into(),
            ));
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Invalid("logging.level must not be empty".into()));
        }

        Ok(())
    }

    /// Applies overrides from a key lookup (the process environment in
    /// [`TallyConfig::load`]).
    ///
    /// Unparseable values are errors rather than silently ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_TAX_RATE_BPS) {
            let bps = parse_env::<u32>(ENV_TAX_RATE_BPS, &value)?;
            self.pricing.tax_rate = Rate::from_bps(bps);
        }

        if let Some(value) = lookup(ENV_QUANTITY_THRESHOLD) {
            let threshold = parse_env::<i64>(ENV_QUANTITY_THRESHOLD, &value)?;
            self.pricing.quantity_threshold = threshold;
        }

        if let Some(value) = lookup(ENV_QUANTITY_DISCOUNT_BPS) {
            let bps = parse_env::<u32>(ENV_QUANTITY_DISCOUNT_BPS, &value)?;
            self.pricing.quantity_discount = Rate::from_bps(bps);
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }

        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            self.logging.format = format.parse()?;
        }

        Ok(())
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "tally", "tally")
            .map(|dirs| dirs.config_dir().join("tally.toml"))
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> ConfigResult<T> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}
