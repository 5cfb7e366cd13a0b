//! Locale-aware URL paths
//!
//! Builds the absolute path for a route key, resolves a path back into a
//! route key, and enumerates the localized slugs the static-site
//! generator pre-renders. The default locale never carries a URL prefix.

use tracing::debug;

use crate::catalog::Catalog;

use super::RouteKey;

impl Catalog {
    /// Absolute URL path for `route` in `locale`
    ///
    /// Home maps to `/` for the default locale and `/{locale}` otherwise;
    /// every other route maps to `/{slug}` or `/{locale}/{slug}`. The
    /// result is always well-formed: no double slashes, no trailing slash
    /// except the root itself.
    pub fn build_path(&self, route: RouteKey, locale: &str) -> String {
        let code = self.resolve_locale(locale);
        let is_default = code == self.locales().default_locale();

        if route == RouteKey::Home {
            return if is_default {
                "/".to_string()
            } else {
                format!("/{code}")
            };
        }

        let slug = &self.table(code).slugs[&route];
        if is_default {
            format!("/{slug}")
        } else {
            format!("/{code}/{slug}")
        }
    }

    /// Recover the abstract route key from an absolute URL path
    ///
    /// A trailing slash is ignored. `/` and `/{supported-locale}` are the
    /// home page. Otherwise the slug candidate is the sole segment, or
    /// the second segment when the first is taken for a locale prefix;
    /// the prefix itself is not checked against the supported set. The
    /// candidate matches a slug from any locale's route table. Unknown
    /// paths yield `None`; the caller decides what to render.
    pub fn resolve_route_key(&self, path: &str) -> Option<RouteKey> {
        let normalized = if path == "/" {
            path
        } else {
            path.strip_suffix('/').unwrap_or(path)
        };

        if normalized == "/" {
            return Some(RouteKey::Home);
        }

        let segments: Vec<&str> = normalized.split('/').filter(|s| !s.is_empty()).collect();
        let candidate = match segments.as_slice() {
            [] => return None,
            [single] if self.is_valid_locale(single) => return Some(RouteKey::Home),
            [single] => *single,
            [_, second, ..] => *second,
        };

        let resolved = self.route_index().get(candidate).copied();
        if resolved.is_none() {
            debug!(path, candidate, "No route key for path");
        }
        resolved
    }

    /// Every pre-renderable slug for `locale`, in route declaration order
    ///
    /// The home route is excluded: the generator treats the home page as
    /// a distinguished root, not as a dynamic-slug page.
    pub fn list_slugs(&self, locale: &str) -> Vec<String> {
        let code = self.resolve_locale(locale);
        let table = self.table(code);

        RouteKey::ALL
            .iter()
            .copied()
            .filter(|route| *route != RouteKey::Home)
            .map(|route| table.slugs[&route].clone())
            .collect()
    }
}
