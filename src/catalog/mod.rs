//! Translation catalog
//!
//! The immutable `locale -> namespace -> key -> string` table, including
//! the reserved `routes` namespace, plus the accessor surface for single
//! strings and whole namespaces. The catalog is an explicit value handed
//! to callers; there is no process-wide singleton.

pub mod loader;

use std::collections::{BTreeMap, HashMap};

use tracing::info;

use crate::config::I18nConfig;
use crate::locale::LocaleSet;
use crate::routes::{Namespace, RouteKey};
use crate::utils::errors::{Result, RouteLingoError};

use loader::LocaleTable;

/// Built-in catalog sources for the reference deployment.
const EMBEDDED_SOURCES: &[(&str, &str)] = &[
    ("en", include_str!("../../translations/en.json")),
    ("de", include_str!("../../translations/de.json")),
];

/// Immutable translation catalog shared by every caller
///
/// Built once at startup and never mutated, so it can be read from any
/// number of parallel render workers without synchronization.
#[derive(Debug, Clone)]
pub struct Catalog {
    locales: LocaleSet,
    tables: HashMap<String, LocaleTable>,
    route_index: HashMap<String, RouteKey>,
}

impl Catalog {
    /// Build a catalog from per-locale JSON sources
    ///
    /// Every consistency invariant is checked here; construction is the
    /// only place a catalog error can surface.
    pub fn from_sources(config: &I18nConfig, sources: &[(String, String)]) -> Result<Self> {
        let locales = LocaleSet::new(config)?;
        let (tables, route_index) = loader::build_tables(&locales, sources)?;

        info!(
            locales = tables.len(),
            routes = RouteKey::ALL.len(),
            "Translation catalog constructed"
        );

        Ok(Self {
            locales,
            tables,
            route_index,
        })
    }

    /// Build the catalog from the translation files embedded in the crate
    pub fn embedded(config: &I18nConfig) -> Result<Self> {
        let sources: Vec<(String, String)> = EMBEDDED_SOURCES
            .iter()
            .map(|(code, json)| ((*code).to_string(), (*json).to_string()))
            .collect();
        Self::from_sources(config, &sources)
    }

    /// The supported-locale set backing this catalog
    pub fn locales(&self) -> &LocaleSet {
        &self.locales
    }

    /// Check whether `raw` is a supported locale code
    pub fn is_valid_locale(&self, raw: &str) -> bool {
        self.locales.is_valid(raw)
    }

    /// Coerce a raw locale token to a supported code
    pub fn resolve_locale<'a>(&'a self, raw: &'a str) -> &'a str {
        self.locales.resolve(raw)
    }

    /// Look up a single translation
    ///
    /// An invalid locale is coerced to the default first. An unknown key
    /// is a programmer error and fails fast instead of producing a blank
    /// string in the rendered page.
    pub fn t(&self, locale: &str, namespace: Namespace, key: &str) -> Result<&str> {
        let code = self.locales.resolve(locale);
        self.entries(code, namespace)
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| RouteLingoError::MissingTranslationKey {
                locale: code.to_string(),
                namespace,
                key: key.to_string(),
            })
    }

    /// The full ordered key-to-value mapping of one namespace
    pub fn namespace(&self, locale: &str, namespace: Namespace) -> &BTreeMap<String, String> {
        let code = self.locales.resolve(locale);
        self.entries(code, namespace)
    }

    fn entries(&self, code: &str, namespace: Namespace) -> &BTreeMap<String, String> {
        // code always comes out of resolve(), and construction verified
        // every supported locale and namespace, so both lookups are total.
        &self.tables[code].text[&namespace]
    }

    pub(crate) fn table(&self, code: &str) -> &LocaleTable {
        &self.tables[code]
    }

    pub(crate) fn route_index(&self) -> &HashMap<String, RouteKey> {
        &self.route_index
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::config::Settings;
    use crate::utils::errors::RouteLingoError;

    fn create_test_catalog() -> Catalog {
        Catalog::embedded(&Settings::default().i18n).expect("embedded catalog must build")
    }

    #[test]
    fn test_embedded_catalog_builds() {
        let catalog = create_test_catalog();
        assert!(catalog.is_valid_locale("en"));
        assert!(catalog.is_valid_locale("de"));
        assert!(!catalog.is_valid_locale("fr"));
    }

    #[test]
    fn test_localized_lookup() {
        let catalog = create_test_catalog();

        assert_eq!(catalog.t("en", Namespace::Nav, "about").unwrap(), "About us");
        assert_eq!(catalog.t("de", Namespace::Nav, "about").unwrap(), "Über uns");
        assert_eq!(catalog.t("de", Namespace::Footer, "imprint").unwrap(), "Impressum");
    }

    #[test]
    fn test_invalid_locale_fallback() {
        let catalog = create_test_catalog();

        assert_eq!(catalog.t("fr", Namespace::Nav, "home").unwrap(), "Home");
        assert_eq!(catalog.resolve_locale("nl"), "en");
    }

    #[test]
    fn test_unknown_key_fails_fast() {
        let catalog = create_test_catalog();

        let result = catalog.t("en", Namespace::Nav, "careers");
        assert_matches!(
            result,
            Err(RouteLingoError::MissingTranslationKey { key, .. }) if key == "careers"
        );
    }

    #[test]
    fn test_namespace_iteration_order() {
        let catalog = create_test_catalog();

        let nav = catalog.namespace("de", Namespace::Nav);
        let keys: Vec<&str> = nav.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["about", "contact", "home", "services"]);
        assert_eq!(nav["services"], "Dienstleistungen");
    }

    #[test]
    fn test_routes_namespace_holds_slug_table() {
        let catalog = create_test_catalog();

        let routes = catalog.namespace("de", Namespace::Routes);
        assert_eq!(routes["about"], "ueber-uns");
        assert_eq!(routes["home"], "");
    }
}
