//! Closed identifier sets for routes and translation namespaces
//!
//! Route keys and namespaces are fixed enums so that an invalid
//! combination cannot be expressed by callers; catalog sources are
//! checked against these sets when the catalog is built.

use std::fmt;

/// Stable identifier for a logical page, independent of language and URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKey {
    Home,
    About,
    Services,
    Contact,
    Imprint,
    Privacy,
}

impl RouteKey {
    /// All route keys, in declaration order
    pub const ALL: [RouteKey; 6] = [
        RouteKey::Home,
        RouteKey::About,
        RouteKey::Services,
        RouteKey::Contact,
        RouteKey::Imprint,
        RouteKey::Privacy,
    ];

    /// Identifier used in catalog sources
    pub fn as_str(self) -> &'static str {
        match self {
            RouteKey::Home => "home",
            RouteKey::About => "about",
            RouteKey::Services => "services",
            RouteKey::Contact => "contact",
            RouteKey::Imprint => "imprint",
            RouteKey::Privacy => "privacy",
        }
    }

    /// Parse a catalog identifier back into a route key
    pub fn parse(value: &str) -> Option<RouteKey> {
        RouteKey::ALL.iter().copied().find(|key| key.as_str() == value)
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named grouping of related translation keys
///
/// `Routes` is reserved: it holds the per-locale slug for every route key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Nav,
    Ui,
    Footer,
    Routes,
}

impl Namespace {
    /// All namespaces, in declaration order
    pub const ALL: [Namespace; 4] = [
        Namespace::Nav,
        Namespace::Ui,
        Namespace::Footer,
        Namespace::Routes,
    ];

    /// Identifier used in catalog sources
    pub fn as_str(self) -> &'static str {
        match self {
            Namespace::Nav => "nav",
            Namespace::Ui => "ui",
            Namespace::Footer => "footer",
            Namespace::Routes => "routes",
        }
    }

    /// Parse a catalog identifier back into a namespace
    pub fn parse(value: &str) -> Option<Namespace> {
        Namespace::ALL.iter().copied().find(|ns| ns.as_str() == value)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
