// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub routes: RoutesConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_access_log")]
    pub access_log: bool,
    /// Echo the raw request text (request line + headers) to the log
    #[serde(default)]
    pub show_request: bool,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_log_level() -> String {
    "info".to_string()
}

const fn default_access_log() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            access_log: default_access_log(),
            show_request: false,
            access_log_file: None,
            error_log_file: None,
        }
    }
}

/// Routes configuration
///
/// Carries the static root and the rewrite table applied to request
/// paths before filesystem lookup.
#[derive(Debug, Deserialize, Clone)]
pub struct RoutesConfig {
    /// Directory all servable files live under
    #[serde(default = "default_static_root")]
    pub static_root: String,
    /// Path the root request `/` is rewritten to
    #[serde(default = "default_root_index")]
    pub root_index: String,
    /// Paths served by appending `/index.html`
    #[serde(default = "default_index_pages")]
    pub index_pages: Vec<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_static_root() -> String {
    "static".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_root_index() -> String {
    "/index.html".to_string()
}

fn default_index_pages() -> Vec<String> {
    ["/registration", "/login", "/article", "/comment", "/main"]
        .into_iter()
        .map(ToString::to_string)
        .collect()
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            static_root: default_static_root(),
            root_index: default_root_index(),
            index_pages: default_index_pages(),
        }
    }
}

/// HTTP response configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    /// Ordered suffix-to-MIME rules; first match wins
    #[serde(default = "default_content_types")]
    pub content_types: Vec<ContentTypeRule>,
    /// Type used when no rule matches
    #[serde(default = "default_content_type")]
    pub default_content_type: String,
}

/// One suffix-to-MIME mapping rule
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ContentTypeRule {
    pub suffix: String,
    pub mime: String,
}

fn default_content_types() -> Vec<ContentTypeRule> {
    [
        (".html", "text/html"),
        (".css", "text/css"),
        (".js", "application/javascript"),
        (".ico", "image/x-icon"),
        (".png", "image/png"),
        (".jpg", "image/jpeg"),
        (".jpeg", "image/jpeg"),
        (".svg", "image/svg+xml"),
    ]
    .into_iter()
    .map(|(suffix, mime)| ContentTypeRule {
        suffix: suffix.to_string(),
        mime: mime.to_string(),
    })
    .collect()
}

#[allow(clippy::missing_const_for_fn)]
fn default_content_type() -> String {
    "application/octet-stream".to_string()
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            content_types: default_content_types(),
            default_content_type: default_content_type(),
        }
    }
}
