//! riskdash configuration management.
//!
//! Handles loading of the CLI configuration from a TOML file with
//! environment variable override support.

use riskdata_core::generator::DatasetConfig;
use serde::Deserialize;
use std::path::Path;

use crate::output::ReportFormat;

/// Environment variable overriding the dataset seed
pub const ENV_SEED: &str = "RISKDASH_SEED";
/// Environment variable overriding the dataset size
pub const ENV_SIZE: &str = "RISKDASH_SIZE";
/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "RISKDASH_LOG_LEVEL";

const MAX_SIZE: usize = 1_000_000;

/// CLI configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RiskDashConfig {
    /// Log level used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Default dashboard output format
    #[serde(default)]
    pub format: ReportFormat,

    /// Dataset generation parameters
    #[serde(default)]
    pub dataset: DatasetConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for RiskDashConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: ReportFormat::default(),
            dataset: DatasetConfig::default(),
        }
    }
}

impl RiskDashConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or the defaults when no file exists
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply overrides from a key lookup such as `std::env::var`
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup(ENV_SEED).and_then(|s| s.parse().ok()) {
            self.dataset.seed = Some(seed);
        }

        if let Some(size) = lookup(ENV_SIZE).and_then(|s| s.parse().ok()) {
            self.dataset.size = size;
        }

        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = log_level;
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if self.dataset.size == 0 {
            errors.push("dataset.size must be greater than 0".to_string());
        }
        if self.dataset.size > MAX_SIZE {
            errors.push(format!(
                "dataset.size {} exceeds maximum allowed (1,000,000)",
                self.dataset.size
            ));
        }

        if let Err(e) = self.dataset.validate() {
            errors.push(e.to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Configuration error type
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// IO error reading config file
    Io(String),
    /// Parse error in config file
    Parse(String),
    /// Validation error
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {}", msg),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::Validation(errors) => write!(f, "Validation errors: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {}
