//! Dashboard configuration management.
//!
//! Handles loading and management of the TUI configuration from TOML
//! files with environment variable override support.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use dash_engine::controller::Timings;

/// Dashboard configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TuiConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log file path; logging is disabled entirely when unset
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Header clock cadence in milliseconds
    #[serde(default = "default_clock_tick_ms")]
    pub clock_tick_ms: u64,

    /// Delay between view attach and chart creation in milliseconds
    #[serde(default = "default_view_settle_ms")]
    pub view_settle_ms: u64,

    /// Quiet window a resize burst must close before charts rebuild,
    /// in milliseconds
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_clock_tick_ms() -> u64 {
    1_000
}

fn default_view_settle_ms() -> u64 {
    100
}

fn default_resize_debounce_ms() -> u64 {
    100
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_file: None,
            clock_tick_ms: default_clock_tick_ms(),
            view_settle_ms: default_view_settle_ms(),
            resize_debounce_ms: default_resize_debounce_ms(),
        }
    }
}

impl TuiConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from the default path or return default config
    pub fn load_or_default() -> Self {
        let config_path = PathBuf::from("acuity_tui.toml");
        Self::load(&config_path).unwrap_or_default()
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Self {
        if let Ok(log_level) = std::env::var("ACUITY_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Ok(log_file) = std::env::var("ACUITY_LOG_FILE") {
            self.log_file = Some(PathBuf::from(log_file));
        }

        if let Ok(ms) = std::env::var("ACUITY_CLOCK_TICK_MS") {
            if let Ok(ms) = ms.parse() {
                self.clock_tick_ms = ms;
            }
        }

        if let Ok(ms) = std::env::var("ACUITY_VIEW_SETTLE_MS") {
            if let Ok(ms) = ms.parse() {
                self.view_settle_ms = ms;
            }
        }

        if let Ok(ms) = std::env::var("ACUITY_RESIZE_DEBOUNCE_MS") {
            if let Ok(ms) = ms.parse() {
                self.resize_debounce_ms = ms;
            }
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        // Validate log level
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        // Validate log file path
        if let Some(log_file) = &self.log_file {
            if log_file.as_os_str().is_empty() {
                errors.push("log_file cannot be empty".to_string());
            }
        }

        // Validate clock cadence range
        if self.clock_tick_ms == 0 {
            errors.push("clock_tick_ms must be greater than 0".to_string());
        }
        if self.clock_tick_ms > 60_000 {
            errors.push(format!(
                "clock_tick_ms {} exceeds maximum allowed (60,000)",
                self.clock_tick_ms
            ));
        }

        // Validate delay ranges
        if self.view_settle_ms > 10_000 {
            errors.push(format!(
                "view_settle_ms {} exceeds maximum allowed (10,000)",
                self.view_settle_ms
            ));
        }
        if self.resize_debounce_ms > 10_000 {
            errors.push(format!(
                "resize_debounce_ms {} exceeds maximum allowed (10,000)",
                self.resize_debounce_ms
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load configuration from file and validate
    pub fn load_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from file with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }

    /// The engine delays this configuration describes
    pub fn timings(&self) -> Timings {
        Timings {
            clock_period: Duration::from_millis(self.clock_tick_ms),
            view_settle_delay: Duration::from_millis(self.view_settle_ms),
            resize_debounce: Duration::from_millis(self.resize_debounce_ms),
        }
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.clock_tick_ms, 1_000);
        assert_eq!(config.view_settle_ms, 100);
        assert_eq!(config.resize_debounce_ms, 100);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_default_config_validates() {
        let config = TuiConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_override() {
        std::env::set_var("ACUITY_VIEW_SETTLE_MS", "250");
        let config = TuiConfig::default().with_env_override();
        assert_eq!(config.view_settle_ms, 250);
        std::env::remove_var("ACUITY_VIEW_SETTLE_MS");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: TuiConfig = toml::from_str("log_level = \"debug\"").unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.clock_tick_ms, 1_000);
        assert_eq!(config.resize_debounce_ms, 100);
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = TuiConfig::default();
        config.log_level = "invalid".to_string();

        let result = config.validate();
        assert!(result.is_err());

        if let Err(ConfigError::Validation(errors)) = result {
            assert!(errors.iter().any(|e| e.contains("log_level")));
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_validate_valid_log_levels() {
        for level in &["trace", "debug", "info", "warn", "error", "INFO", "DEBUG"] {
            let mut config = TuiConfig::default();
            config.log_level = level.to_string();
            assert!(config.validate().is_ok(), "Log level '{}' should be valid", level);
        }
    }

    #[test]
    fn test_validate_clock_tick_zero() {
        let mut config = TuiConfig::default();
        config.clock_tick_ms = 0;

        let result = config.validate();
        assert!(result.is_err());

        if let Err(ConfigError::Validation(errors)) = result {
            assert!(errors.iter().any(|e| e.contains("clock_tick_ms")));
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_validate_clock_tick_too_large() {
        let mut config = TuiConfig::default();
        config.clock_tick_ms = 120_000;

        let result = config.validate();
        assert!(result.is_err());

        if let Err(ConfigError::Validation(errors)) = result {
            assert!(errors.iter().any(|e| e.contains("exceeds maximum")));
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_validate_empty_log_file() {
        let mut config = TuiConfig::default();
        config.log_file = Some(PathBuf::from(""));

        let result = config.validate();
        assert!(result.is_err());

        if let Err(ConfigError::Validation(errors)) = result {
            assert!(errors.iter().any(|e| e.contains("log_file")));
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_validate_multiple_errors() {
        let mut config = TuiConfig::default();
        config.log_level = "invalid".to_string();
        config.clock_tick_ms = 0;
        config.view_settle_ms = 60_000;

        let result = config.validate();
        assert!(result.is_err());

        if let Err(ConfigError::Validation(errors)) = result {
            assert!(errors.len() >= 3, "Expected at least 3 validation errors");
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::Validation(vec!["Error 1".to_string(), "Error 2".to_string()]);
        let display = format!("{}", error);
        assert!(display.contains("Error 1"));
        assert!(display.contains("Error 2"));
    }

    #[test]
    fn test_timings_mapping() {
        let mut config = TuiConfig::default();
        config.clock_tick_ms = 500;
        config.view_settle_ms = 80;
        config.resize_debounce_ms = 120;

        let timings = config.timings();
        assert_eq!(timings.clock_period, Duration::from_millis(500));
        assert_eq!(timings.view_settle_delay, Duration::from_millis(80));
        assert_eq!(timings.resize_debounce, Duration::from_millis(120));
    }
}
