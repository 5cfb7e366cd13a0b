//! Supported-locale handling
//!
//! Gates every raw locale token entering the crate. Membership is an O(1)
//! hash-set test; invalid input falls back to the default locale without
//! an error.

use std::collections::HashSet;

use tracing::debug;

use crate::config::I18nConfig;
use crate::utils::errors::{Result, RouteLingoError};

/// The supported-locale set and its designated default
///
/// The default locale is the one that never appears as a URL prefix.
#[derive(Debug, Clone)]
pub struct LocaleSet {
    default: String,
    ordered: Vec<String>,
    index: HashSet<String>,
}

impl LocaleSet {
    /// Build the locale set from configuration
    pub fn new(config: &I18nConfig) -> Result<Self> {
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

        let index = config.supported_locales.iter().cloned().collect();

        Ok(Self {
            default: config.default_locale.clone(),
            ordered: config.supported_locales.clone(),
            index,
        })
    }

    /// Check whether `raw` is a supported locale code
    pub fn is_valid(&self, raw: &str) -> bool {
        self.index.contains(raw)
    }

    /// Coerce `raw` to a supported locale, falling back to the default
    ///
    /// Invalid input is corrected silently; callers never see an error for
    /// a malformed locale token.
    pub fn resolve<'a>(&'a self, raw: &'a str) -> &'a str {
        if self.is_valid(raw) {
            raw
        } else {
            debug!(locale = raw, fallback = %self.default, "Unsupported locale, using default");
            &self.default
        }
    }

    /// The default locale code
    pub fn default_locale(&self) -> &str {
        &self.default
    }

    /// Supported locale codes, in configured order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }
}
