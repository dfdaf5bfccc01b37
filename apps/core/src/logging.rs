//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout stays free for JSON reports.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

use crate::config::{AppConfig, LogFormat};
use crate::error::AppError;

/// Name reported in bunyan records
const APP_NAME: &str = "mood-detective";

/// Build the filter for a config
pub fn env_filter(config: &AppConfig) -> Result<EnvFilter, AppError> {
    EnvFilter::try_new(&config.log_filter).map_err(|e| {
        AppError::Config(format!("Invalid log filter '{}': {}", config.log_filter, e))
    })
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(config: &AppConfig) -> Result<(), AppError> {
    let filter = env_filter(config)?;

    match config.log_format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| AppError::Internal(format!("Failed to install logger: {}", e))),
        LogFormat::Bunyan => {
            let subscriber = Registry::default()
                .with(filter)
                .with(JsonStorageLayer)
                .with(BunyanFormattingLayer::new(
                    APP_NAME.to_string(),
                    std::io::stderr,
                ));
            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| AppError::Internal(format!("Failed to install logger: {}", e)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_filter() {
        let config = AppConfig {
            log_filter: "mood_detective_core=debug,info".to_string(),
            ..AppConfig::default()
        };
        assert!(env_filter(&config).is_ok());
    }

    #[test]
    fn test_invalid_filter_is_config_error() {
        let config = AppConfig {
            log_filter: "mood_detective_core=loud".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(env_filter(&config), Err(AppError::Config(_))));
    }
}
