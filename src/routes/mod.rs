//! Route identifiers and locale-aware URL path handling

pub mod keys;
pub mod paths;

pub use keys::{Namespace, RouteKey};
