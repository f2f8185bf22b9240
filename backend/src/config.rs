//! Server configuration file and environment variable handling.
//!
//! Settings come from an optional TOML file (path in `VA_CONFIG`) and are
//! then overridden by environment variables:
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `VA_BODY_LIMIT_BYTES`: Maximum request body size (default: 50 MiB)
//! - `VA_MAX_DURATION_SECONDS`: Longest timeline served (default: 7 days)
//! - `VA_SEED_FILE`: JSON file of video records loaded at startup
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 9000
//!
//! [storage]
//! seed_file = "data/videos.json"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Environment variable naming the TOML configuration file.
pub const CONFIG_PATH_ENV: &str = "VA_CONFIG";

/// Error raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}

/// Complete server configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub storage: StorageSettings,
}

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
    /// Timelines are linear in duration; longer requests are rejected.
    #[serde(default = "default_max_duration_seconds")]
    pub max_duration_seconds: u64,
}

/// Repository settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_body_limit_bytes() -> usize {
    50 * 1024 * 1024
}

fn default_max_duration_seconds() -> u64 {
    7 * 24 * 60 * 60
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            body_limit_bytes: default_body_limit_bytes(),
            max_duration_seconds: default_max_duration_seconds(),
        }
    }
}

impl ServerConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Read configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Load the file named by `VA_CONFIG` (if any), then apply environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(Path::new(&path))?,
            _ => Self::default(),
        };
        config.apply_overrides(|key| env::var(key).ok())?;
        Ok(config)
    }

    /// Override settings from a key lookup (normally the process environment).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST").filter(|h| !h.trim().is_empty()) {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = parse_value("PORT", &port)?;
        }
        if let Some(limit) = lookup("VA_BODY_LIMIT_BYTES") {
            self.server.body_limit_bytes = parse_value("VA_BODY_LIMIT_BYTES", &limit)?;
        }
        if let Some(max) = lookup("VA_MAX_DURATION_SECONDS") {
            self.server.max_duration_seconds = parse_value("VA_MAX_DURATION_SECONDS", &max)?;
        }
        if let Some(seed) = lookup("VA_SEED_FILE").filter(|s| !s.trim().is_empty()) {
            self.storage.seed_file = Some(PathBuf::from(seed));
        }
        Ok(())
    }

    /// Address the server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse().map_err(|_| ConfigError::InvalidValue {
            key: "HOST".to_string(),
            value: self.server.host.clone(),
        })
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}
