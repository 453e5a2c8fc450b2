//! Path rewrite module
//!
//! Applies the rewrite table to a requested path before filesystem
//! lookup.

use crate::config::RoutesConfig;

/// Resolve a requested path against the rewrite table
///
/// The root path maps to the configured root index; paths in the
/// index-page set get `/index.html` appended; everything else passes
/// through unchanged.
pub fn resolve_path(path: &str, routes: &RoutesConfig) -> String {
    if path == "/" {
        return routes.root_index.clone();
    }
    if routes.index_pages.iter().any(|page| page == path) {
        return format!("{path}/index.html");
    }
    path.to_string()
}
