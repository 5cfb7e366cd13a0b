//! Catalog construction from per-locale JSON sources
//!
//! Parses one JSON document per supported locale and checks every catalog
//! invariant before any lookup can happen: identical namespace and key
//! sets across locales, a slug for every route key, an empty home slug,
//! and no slug collision within a locale. A catalog that passes here
//! never fails a lookup later.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, info};

use crate::locale::LocaleSet;
use crate::routes::{Namespace, RouteKey};
use crate::utils::errors::CatalogError;

/// Parsed translation tables for a single locale
#[derive(Debug, Clone)]
pub(crate) struct LocaleTable {
    /// Every namespace as an ordered key to value map
    pub(crate) text: HashMap<Namespace, BTreeMap<String, String>>,
    /// The `routes` namespace, materialized against the closed route set
    pub(crate) slugs: HashMap<RouteKey, String>,
}

type Tables = HashMap<String, LocaleTable>;
type RouteIndex = HashMap<String, RouteKey>;

/// Parse and validate all sources, producing the per-locale tables and
/// the flattened slug-to-route reverse index.
pub(crate) fn build_tables(
    locales: &LocaleSet,
    sources: &[(String, String)],
) -> Result<(Tables, RouteIndex), CatalogError> {
    let mut tables = Tables::new();

    for (code, json) in sources {
        if !locales.is_valid(code) {
            debug!(locale = %code, "Ignoring translation source for unsupported locale");
            continue;
        }
        tables.insert(code.clone(), build_locale_table(code, json)?);
        info!(locale = %code, "Loaded translations");
    }

    for code in locales.iter() {
        if !tables.contains_key(code) {
            return Err(CatalogError::MissingLocale(code.to_string()));
        }
    }

    check_key_sets_match(locales, &tables)?;

    let route_index = build_route_index(locales, &tables);
    Ok((tables, route_index))
}

/// Parse one locale document and validate its route table
fn build_locale_table(locale: &str, json: &str) -> Result<LocaleTable, CatalogError> {
    let parsed: BTreeMap<String, BTreeMap<String, String>> =
        serde_json::from_str(json).map_err(|source| CatalogError::Parse {
            locale: locale.to_string(),
            source,
        })?;

    let mut text = HashMap::new();
    for (name, entries) in parsed {
        match Namespace::parse(&name) {
            Some(namespace) => {
                text.insert(namespace, entries);
            }
            None => {
                return Err(CatalogError::UnknownNamespace {
                    locale: locale.to_string(),
                    namespace: name,
                });
            }
        }
    }

    for namespace in Namespace::ALL {
        if !text.contains_key(&namespace) {
            return Err(CatalogError::MissingNamespace {
                locale: locale.to_string(),
                namespace,
            });
        }
    }

    let slugs = build_slug_table(locale, &text[&Namespace::Routes])?;
    Ok(LocaleTable { text, slugs })
}

/// Map the `routes` namespace onto the closed route-key set and check the
/// slug invariants for one locale.
fn build_slug_table(
    locale: &str,
    routes: &BTreeMap<String, String>,
) -> Result<HashMap<RouteKey, String>, CatalogError> {
    let mut slugs = HashMap::new();
    for (key, slug) in routes {
        match RouteKey::parse(key) {
            Some(route) => {
                slugs.insert(route, slug.clone());
            }
            None => {
                return Err(CatalogError::UnknownRouteKey {
                    locale: locale.to_string(),
                    key: key.clone(),
                });
            }
        }
    }

    for route in RouteKey::ALL {
        if !slugs.contains_key(&route) {
            return Err(CatalogError::MissingSlug {
                locale: locale.to_string(),
                route,
            });
        }
    }

    let home = &slugs[&RouteKey::Home];
    if !home.is_empty() {
        return Err(CatalogError::HomeSlugNotEmpty {
            locale: locale.to_string(),
            slug: home.clone(),
        });
    }

    let mut seen: HashMap<&str, RouteKey> = HashMap::new();
    for route in RouteKey::ALL {
        if route == RouteKey::Home {
            continue;
        }
        let slug = &slugs[&route];
        if slug.is_empty() {
            return Err(CatalogError::EmptySlug {
                locale: locale.to_string(),
                route,
            });
        }
        if let Some(first) = seen.insert(slug.as_str(), route) {
            return Err(CatalogError::SlugCollision {
                locale: locale.to_string(),
                slug: slug.clone(),
                first,
                second: route,
            });
        }
    }

    Ok(slugs)
}

/// Every locale must define exactly the key set of the default locale,
/// namespace by namespace.
fn check_key_sets_match(locales: &LocaleSet, tables: &Tables) -> Result<(), CatalogError> {
    let reference = &tables[locales.default_locale()];

    for code in locales.iter() {
        if code == locales.default_locale() {
            continue;
        }
        let table = &tables[code];
        for namespace in Namespace::ALL {
            let expected = &reference.text[&namespace];
            let actual = &table.text[&namespace];

            for key in expected.keys() {
                if !actual.contains_key(key) {
                    return Err(CatalogError::MissingKey {
                        locale: code.to_string(),
                        namespace,
                        key: key.clone(),
                    });
                }
            }
            for key in actual.keys() {
                if !expected.contains_key(key) {
                    return Err(CatalogError::ExtraKey {
                        locale: code.to_string(),
                        namespace,
                        key: key.clone(),
                    });
                }
            }
        }
    }

    Ok(())
}

/// Flatten every locale's slug table into one reverse index.
///
/// Locales are visited in configured order and route keys in declaration
/// order; the first insertion wins, which reproduces the first-match
/// semantics of a linear scan. The index is deliberately not scoped per
/// locale: a slug resolves from any locale's table.
fn build_route_index(locales: &LocaleSet, tables: &Tables) -> RouteIndex {
    let mut index = RouteIndex::new();
    for code in locales.iter() {
        let table = &tables[code];
        for route in RouteKey::ALL {
            if route == RouteKey::Home {
                continue;
            }
            index.entry(table.slugs[&route].clone()).or_insert(route);
        }
    }
    index
}
