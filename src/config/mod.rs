// Configuration module entry point
// Loads the server configuration from file, environment, and defaults

mod types;

use std::net::SocketAddr;

// Re-export public types
pub use types::{Config, ContentTypeRule, HttpConfig, LoggingConfig, RoutesConfig, ServerConfig};

impl Config {
    /// Load configuration from the default "config.toml" file
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional; environment variables prefixed with
    /// `SERVER` override it, and hardcoded defaults fill the rest.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
