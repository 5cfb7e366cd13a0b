//! Application settings management
//!
//! Defines the configuration structure and the loaders for settings from
//! TOML files and environment variables.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level configuration for the routing subsystem
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
}

/// Locale configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    pub default_locale: String,
    pub supported_locales: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from the `config` file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("ROUTELINGO").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Load settings from an explicit file, still honoring environment overrides
    pub fn from_file(path: &Path) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("ROUTELINGO").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> crate::utils::errors::Result<()> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            i18n: I18nConfig {
                default_locale: "en".to_string(),
                supported_locales: vec!["en".to_string(), "de".to_string()],
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
        }
    }
}
