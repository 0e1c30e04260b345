//! Configuration for pdf-slides-server

use std::env;

/// Server configuration, loaded from the environment with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP listener to
    pub host: String,
    /// Port to bind the HTTP listener to
    pub port: u16,
    /// Maximum accepted request body size in bytes (default: 50MB)
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            max_body_bytes: 50 * 1024 * 1024,
        }
    }
}

impl Config {
    /// Build a config from `SERVER_HOST`, `SERVER_PORT` and `MAX_BODY_BYTES`,
    /// falling back to defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Config::default();
        Config {
            host: env::var("SERVER_HOST").unwrap_or(defaults.host),
            port: env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            max_body_bytes: env::var("MAX_BODY_BYTES")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(defaults.max_body_bytes),
        }
    }
}
