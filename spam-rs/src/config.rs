//! Configuration for spam-rs

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, SpamError};
use crate::model::{TrainingOptions, DEFAULT_PRIOR};
use crate::vocabulary::{DEFAULT_SMOOTHING, MAX_SMOOTHING};

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Training corpora and model parameters
    #[serde(default)]
    pub training: TrainingConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Training configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrainingConfig {
    /// Files making up the spam corpus
    #[serde(default = "default_spam_paths")]
    pub spam_paths: Vec<PathBuf>,
    /// Files making up the ham corpus
    #[serde(default = "default_ham_paths")]
    pub ham_paths: Vec<PathBuf>,
    /// Additive smoothing constant (k), at most `MAX_SMOOTHING`
    #[serde(default = "default_smoothing")]
    pub smoothing: u64,
    /// Prior probability of each class
    #[serde(default = "default_prior")]
    pub prior: f64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by RUST_LOG
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "pretty" or "compact"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_spam_paths() -> Vec<PathBuf> {
    vec![PathBuf::from("./spam-dataset.txt")]
}

fn default_ham_paths() -> Vec<PathBuf> {
    vec![PathBuf::from("./ham-dataset.txt")]
}

fn default_smoothing() -> u64 {
    DEFAULT_SMOOTHING
}

fn default_prior() -> f64 {
    DEFAULT_PRIOR
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            spam_paths: default_spam_paths(),
            ham_paths: default_ham_paths(),
            smoothing: default_smoothing(),
            prior: default_prior(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl TrainingConfig {
    /// Model parameters taken from this configuration
    pub fn options(&self) -> TrainingOptions {
        TrainingOptions {
            smoothing: self.smoothing,
            prior: self.prior,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SpamError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| SpamError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let training = &self.training;

        if training.spam_paths.is_empty() {
            return Err(SpamError::EmptyCorpusList("spam"));
        }
        if training.ham_paths.is_empty() {
            return Err(SpamError::EmptyCorpusList("ham"));
        }
        if !(1..=MAX_SMOOTHING).contains(&training.smoothing) {
            return Err(SpamError::Config(format!(
                "smoothing must be between 1 and {}, got {}",
                MAX_SMOOTHING, training.smoothing
            )));
        }
        if !(training.prior > 0.0 && training.prior < 1.0) {
            return Err(SpamError::Config(format!(
                "prior must be between 0 and 1, got {}",
                training.prior
            )));
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "compact") {
            return Err(SpamError::Config(format!(
                "Unknown log format '{}'",
                self.logging.format
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.training.spam_paths, vec![PathBuf::from("./spam-dataset.txt")]);
        assert_eq!(config.training.ham_paths, vec![PathBuf::from("./ham-dataset.txt")]);
        assert_eq!(config.training.smoothing, 1);
        assert_eq!(config.training.prior, 0.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[training]
spam_paths = ["data/spam1.txt", "data/spam2.txt"]
ham_paths = ["data/ham.txt"]
smoothing = 2

[logging]
level = "debug"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.training.spam_paths.len(), 2);
        assert_eq!(config.training.ham_paths, vec![PathBuf::from("data/ham.txt")]);
        assert_eq!(config.training.smoothing, 2);
        assert_eq!(config.training.prior, 0.5);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "compact");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.training.smoothing, 1);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.training.smoothing = 0;
        assert!(matches!(config.validate(), Err(SpamError::Config(_))));

        let mut config = Config::default();
        config.training.smoothing = MAX_SMOOTHING + 1;
        assert!(matches!(config.validate(), Err(SpamError::Config(_))));

        let mut config = Config::default();
        config.training.smoothing = u64::MAX;
        assert!(matches!(config.validate(), Err(SpamError::Config(_))));

        let mut config = Config::default();
        config.training.smoothing = MAX_SMOOTHING;
        assert!(config.validate().is_ok());

        let mut config = Config::default();
        config.training.prior = 1.0;
        assert!(matches!(config.validate(), Err(SpamError::Config(_))));

        let mut config = Config::default();
        config.training.ham_paths.clear();
        assert!(matches!(config.validate(), Err(SpamError::EmptyCorpusList("ham"))));

        let mut config = Config::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file_missing() {
        let err = Config::from_file(Path::new("/nonexistent/spam.toml")).unwrap_err();
        assert!(matches!(err, SpamError::Config(_)));
    }
}
