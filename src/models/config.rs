use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Configuration options for the catalog service.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Path to the SQLite database file.
    pub database_url: String,
    /// Interface the HTTP server binds to.
    pub address: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load settings from `<config_path>.yaml` (optional) overridden by
    /// `APP_*` environment variables.
    pub fn load(config_path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("database_url", "app.db")?
            .set_default("address", "127.0.0.1")?
            .set_default("port", 8080)?
            .add_source(File::with_name(config_path).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}
