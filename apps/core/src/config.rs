//! Runtime configuration read from environment variables.
//!
//! An optional `.env` file is honoured; variables already set in the process
//! environment win over the file. Nothing here affects classification.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use validator::Validate;

use crate::engine::history::DEFAULT_HISTORY_CAPACITY;
use crate::error::AppError;

pub const ENV_LOG_FILTER: &str = "MOOD_LOG";
pub const ENV_LOG_FORMAT: &str = "MOOD_LOG_FORMAT";
pub const ENV_HISTORY_CAPACITY: &str = "MOOD_HISTORY_CAPACITY";

const DEFAULT_LOG_FILTER: &str = "info";

/// Log output style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// Bunyan-style JSON lines
    Bunyan,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Bunyan => write!(f, "bunyan"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "bunyan" | "json" => Ok(LogFormat::Bunyan),
            other => Err(AppError::Config(format!(
                "Unknown log format '{}', expected 'pretty' or 'bunyan'",
                other
            ))),
        }
    }
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// `EnvFilter` directive, e.g. `info` or `mood_detective_core=debug`
    #[validate(length(min = 1))]
    pub log_filter: String,
    pub log_format: LogFormat,
    /// Number of analyses kept in the in-memory history
    #[validate(range(min = 1, max = 64))]
    pub history_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::default(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl AppConfig {
    /// Load from the process environment, after reading `.env` if one exists
    pub fn from_env() -> Result<Self, AppError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an explicit env file without modifying the process environment
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let mut file_vars = HashMap::new();

        let entries = dotenv::from_path_iter(path).map_err(|e| {
            AppError::Config(format!("Cannot read env file {}: {}", path.display(), e))
        })?;
        for entry in entries {
            let (key, value) = entry.map_err(|e| {
                AppError::Config(format!("Invalid entry in {}: {}", path.display(), e))
            })?;
            file_vars.insert(key, value);
        }

        Self::from_lookup(|key| env::var(key).ok().or_else(|| file_vars.get(key).cloned()))
    }

    /// Build and validate a config from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(filter) = lookup(ENV_LOG_FILTER) {
            config.log_filter = filter.trim().to_string();
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            config.log_format = format.parse()?;
        }
        if let Some(capacity) = lookup(ENV_HISTORY_CAPACITY) {
            config.history_capacity = capacity.trim().parse().map_err(|_| {
                AppError::Config(format!(
                    "{} must be a positive integer, got '{}'",
                    ENV_HISTORY_CAPACITY, capacity
                ))
            })?;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.history_capacity, 8);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_LOG_FILTER, "debug"),
            (ENV_LOG_FORMAT, "Bunyan"),
            (ENV_HISTORY_CAPACITY, "12"),
        ]))
        .unwrap();

        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.log_format, LogFormat::Bunyan);
        assert_eq!(config.history_capacity, 12);
    }

    #[test]
    fn test_invalid_values() {
        let err = AppConfig::from_lookup(lookup_from(&[(ENV_LOG_FORMAT, "xml")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        let err =
            AppConfig::from_lookup(lookup_from(&[(ENV_HISTORY_CAPACITY, "lots")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_validation() {
        let err = AppConfig::from_lookup(lookup_from(&[(ENV_HISTORY_CAPACITY, "0")])).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = AppConfig::from_lookup(lookup_from(&[(ENV_LOG_FILTER, "   ")])).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_log_format_display_round_trip() {
        for format in [LogFormat::Pretty, LogFormat::Bunyan] {
            assert_eq!(format.to_string().parse::<LogFormat>().unwrap(), format);
        }
    }
}
