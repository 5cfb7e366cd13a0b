//! Error handling for RouteLingo
//!
//! This module defines the error types used throughout the crate and the
//! policy attached to each class of failure: catalog inconsistencies are
//! fatal at startup, unresolved paths are an ordinary `None` rather than
//! an error, and invalid locale input is coerced to the default locale.

use thiserror::Error;

use crate::routes::{Namespace, RouteKey};

/// Main error type for RouteLingo operations
#[derive(Error, Debug)]
pub enum RouteLingoError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Missing translation key '{namespace}.{key}' for locale '{locale}'")]
    MissingTranslationKey {
        locale: String,
        namespace: Namespace,
        key: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Catalog consistency errors, detected once while the catalog is built
///
/// None of these can surface after construction; a catalog that builds
/// successfully answers every lookup.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Translations for locale '{locale}' are not valid JSON: {source}")]
    Parse {
        locale: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No translation source provided for supported locale '{0}'")]
    MissingLocale(String),

    #[error("Locale '{locale}' is missing namespace '{namespace}'")]
    MissingNamespace { locale: String, namespace: Namespace },

    #[error("Locale '{locale}' defines unknown namespace '{namespace}'")]
    UnknownNamespace { locale: String, namespace: String },

    #[error("Locale '{locale}' is missing key '{key}' in namespace '{namespace}'")]
    MissingKey {
        locale: String,
        namespace: Namespace,
        key: String,
    },

    #[error("Locale '{locale}' defines key '{key}' in namespace '{namespace}' that the default locale does not")]
    ExtraKey {
        locale: String,
        namespace: Namespace,
        key: String,
    },

    #[error("Locale '{locale}' defines unknown route key '{key}'")]
    UnknownRouteKey { locale: String, key: String },

    #[error("Locale '{locale}' has no slug for route '{route}'")]
    MissingSlug { locale: String, route: RouteKey },

    #[error("Route '{route}' must have a non-empty slug in locale '{locale}'")]
    EmptySlug { locale: String, route: RouteKey },

    #[error("Home slug must be empty, locale '{locale}' maps it to '{slug}'")]
    HomeSlugNotEmpty { locale: String, slug: String },

    #[error("Routes '{first}' and '{second}' share slug '{slug}' in locale '{locale}'")]
    SlugCollision {
        locale: String,
        slug: String,
        first: RouteKey,
        second: RouteKey,
    },
}

/// Result type alias for RouteLingo operations
pub type Result<T> = std::result::Result<T, RouteLingoError>;

impl RouteLingoError {
    /// Check if the error is recoverable
    ///
    /// None of these are: catalog and configuration errors block startup,
    /// and a missing translation key is a programmer error. The
    /// recoverable conditions of this crate (an unresolved path, an
    /// unsupported locale token) are not errors at all.
    pub fn is_recoverable(&self) -> bool {
        match self {
            RouteLingoError::Catalog(_) => false,
            RouteLingoError::Config(_) => false,
            RouteLingoError::MissingTranslationKey { .. } => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RouteLingoError::Catalog(_) => ErrorSeverity::Critical,
            RouteLingoError::Config(_) => ErrorSeverity::Critical,
            RouteLingoError::MissingTranslationKey { .. } => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
