//! End-to-end checks over the embedded catalog
//!
//! Exercises the crate the way the static-site generator does: build the
//! catalog once, then translate, build links, resolve the current URL and
//! enumerate pre-render slugs across both locales.

use assert_matches::assert_matches;

use routelingo::{Catalog, Namespace, RouteKey, RouteLingoError, Settings};

fn create_test_catalog() -> Catalog {
    let settings = Settings::default();
    settings.validate().expect("default settings must validate");
    Catalog::embedded(&settings.i18n).expect("embedded catalog must build")
}

#[test]
fn test_home_path_identities() {
    let catalog = create_test_catalog();

    assert_eq!(catalog.build_path(RouteKey::Home, "en"), "/");
    assert_eq!(catalog.build_path(RouteKey::Home, "de"), "/de");
}

#[test]
fn test_reference_scenarios() {
    let catalog = create_test_catalog();

    assert_eq!(catalog.build_path(RouteKey::About, "de"), "/de/ueber-uns");
    assert_eq!(
        catalog.resolve_route_key("/de/ueber-uns"),
        Some(RouteKey::About)
    );
    assert_eq!(catalog.build_path(RouteKey::About, "en"), "/about");
    assert_eq!(catalog.resolve_route_key("/about"), Some(RouteKey::About));
    assert_eq!(
        catalog.resolve_route_key("/de/ueber-uns/"),
        catalog.resolve_route_key("/de/ueber-uns")
    );
    assert_eq!(catalog.resolve_route_key("/unknown"), None);
}

#[test]
fn test_round_trip_across_locales_and_routes() {
    let catalog = create_test_catalog();

    for locale in catalog.locales().iter().collect::<Vec<_>>() {
        for route in RouteKey::ALL {
            let path = catalog.build_path(route, locale);
            assert_eq!(
                catalog.resolve_route_key(&path),
                Some(route),
                "round trip failed for {route} in {locale}: {path}"
            );
        }
    }
}

#[test]
fn test_built_paths_are_well_formed() {
    let catalog = create_test_catalog();

    for locale in ["en", "de"] {
        for route in RouteKey::ALL {
            let path = catalog.build_path(route, locale);
            assert!(path.starts_with('/'), "{path} must be absolute");
            assert!(!path.contains("//"), "{path} must not contain //");
            assert!(
                path == "/" || !path.ends_with('/'),
                "{path} must not end with a slash"
            );
        }
    }
}

#[test]
fn test_catalog_completeness_across_locales() {
    let catalog = create_test_catalog();

    for namespace in Namespace::ALL {
        let reference: Vec<&String> = catalog.namespace("en", namespace).keys().collect();
        let other: Vec<&String> = catalog.namespace("de", namespace).keys().collect();
        assert_eq!(
            reference, other,
            "key sets differ in namespace {namespace}"
        );
    }
}

#[test]
fn test_slug_enumeration() {
    let catalog = create_test_catalog();

    let de = catalog.list_slugs("de");
    assert_eq!(
        de,
        vec![
            "ueber-uns",
            "dienstleistungen",
            "kontakt",
            "impressum",
            "datenschutz"
        ]
    );

    let en = catalog.list_slugs("en");
    assert_eq!(
        en,
        vec!["about", "services", "contact", "imprint", "privacy"]
    );

    for slugs in [de, en] {
        assert!(!slugs.iter().any(String::is_empty));
        let mut deduped = slugs.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), slugs.len());
    }
}

#[test]
fn test_enumerated_slugs_resolve() {
    let catalog = create_test_catalog();

    for locale in ["en", "de"] {
        for slug in catalog.list_slugs(locale) {
            let path = format!("/{locale}/{slug}");
            assert!(
                catalog.resolve_route_key(&path).is_some(),
                "{path} did not resolve"
            );
        }
    }
}

#[test]
fn test_language_switch_round_trip() {
    // The language switcher resolves the current URL back to its route
    // key, then rebuilds the path for the other locale.
    let catalog = create_test_catalog();

    let current = "/de/dienstleistungen";
    let route = catalog.resolve_route_key(current).expect("must resolve");
    assert_eq!(catalog.build_path(route, "en"), "/services");
}

#[test]
fn test_translation_lookup() {
    let catalog = create_test_catalog();

    assert_eq!(catalog.t("en", Namespace::Nav, "home").unwrap(), "Home");
    assert_eq!(catalog.t("de", Namespace::Nav, "home").unwrap(), "Startseite");
    assert_eq!(
        catalog.t("de", Namespace::Ui, "language_switch").unwrap(),
        "English"
    );

    assert_matches!(
        catalog.t("en", Namespace::Ui, "does_not_exist"),
        Err(RouteLingoError::MissingTranslationKey { .. })
    );
}

#[test]
fn test_invalid_locale_coercion() {
    let catalog = create_test_catalog();

    assert_eq!(catalog.resolve_locale("fr"), "en");
    assert_eq!(catalog.build_path(RouteKey::Contact, "fr"), "/contact");
    assert_eq!(catalog.t("fr", Namespace::Nav, "home").unwrap(), "Home");
    assert_eq!(catalog.list_slugs("fr"), catalog.list_slugs("en"));
}

#[test]
fn test_library_info() {
    assert!(routelingo::info().starts_with(routelingo::NAME));
}
