//! Configuration validation
//!
//! Startup validation for the application settings; invalid configuration
//! blocks the build before any catalog is constructed.

use std::collections::HashSet;

use super::Settings;
use crate::utils::errors::{Result, RouteLingoError};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate locale configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.default_locale.is_empty() {
        return Err(RouteLingoError::Config(
            "Default locale is required".to_string(),
        ));
    }

    if config.supported_locales.is_empty() {
        return Err(RouteLingoError::Config(
            "At least one supported locale is required".to_string(),
        ));
    }

    if !config.supported_locales.contains(&config.default_locale) {
        return Err(RouteLingoError::Config(
            "Default locale must be in the supported locale list".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for locale in &config.supported_locales {
        if !seen.insert(locale.as_str()) {
            return Err(RouteLingoError::Config(format!(
                "Locale '{}' is listed more than once",
                locale
            )));
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(RouteLingoError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(RouteLingoError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}
