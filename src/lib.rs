//! RouteLingo
//!
//! Localized routing and translation lookup for multilingual static
//! sites. The crate stores per-locale UI translations, converts abstract
//! route keys into locale-specific URL paths, resolves paths back into
//! route keys for navigation and language switching, and enumerates the
//! localized slugs a static-site generator needs to pre-render.

pub mod catalog;
pub mod config;
pub mod locale;
pub mod routes;
pub mod utils;

// Re-export commonly used types
pub use catalog::Catalog;
pub use config::{I18nConfig, LoggingConfig, Settings};
pub use locale::LocaleSet;
pub use routes::{Namespace, RouteKey};
pub use utils::errors::{CatalogError, Result, RouteLingoError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
