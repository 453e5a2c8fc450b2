//! MIME type detection module
//!
//! Maps a resolved request path to a Content-Type via the configured
//! suffix table.

use crate::config::ContentTypeRule;

/// Look up the Content-Type for a path
///
/// Rules are checked in order with an exact, case-sensitive suffix
/// match; the first match wins. Paths matching no rule get the default
/// type.
pub fn content_type_for<'a>(
    path: &str,
    rules: &'a [ContentTypeRule],
    default: &'a str,
) -> &'a str {
    rules
        .iter()
        .find(|rule| path.ends_with(&rule.suffix))
        .map_or(default, |rule| rule.mime.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HttpConfig;

    fn lookup<'a>(http: &'a HttpConfig, path: &str) -> &'a str {
        content_type_for(path, &http.content_types, &http.default_content_type)
    }

    #[test]
    fn test_mapped_suffixes() {
        let http = HttpConfig::default();
        assert_eq!(lookup(&http, "/index.html"), "text/html");
        assert_eq!(lookup(&http, "/style.css"), "text/css");
        assert_eq!(lookup(&http, "/app.js"), "application/javascript");
        assert_eq!(lookup(&http, "/favicon.ico"), "image/x-icon");
        assert_eq!(lookup(&http, "/logo.png"), "image/png");
        assert_eq!(lookup(&http, "/photo.jpg"), "image/jpeg");
        assert_eq!(lookup(&http, "/photo.jpeg"), "image/jpeg");
        assert_eq!(lookup(&http, "/icon.svg"), "image/svg+xml");
    }

    #[test]
    fn test_unknown_suffix_gets_default() {
        let http = HttpConfig::default();
        assert_eq!(lookup(&http, "/archive.tar"), "application/octet-stream");
        assert_eq!(lookup(&http, "/no_extension"), "application/octet-stream");
    }

    #[test]
    fn test_suffix_match_is_case_sensitive() {
        let http = HttpConfig::default();
        assert_eq!(lookup(&http, "/INDEX.HTML"), "application/octet-stream");
    }
}
