//! Configuration types for the employee registry.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every section and
//! field is optional in the file and falls back to its default.

use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;

/// Top-level registry configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Cross-origin request settings.
    pub cors: CorsConfig,
    /// Storage backend settings.
    pub storage: StorageConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind, e.g. "127.0.0.1" or "0.0.0.0".
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    /// Returns the socket address to bind, if `host` is a valid IP address.
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        format!("{}:{}", self.host, self.port).parse().ok()
    }
}

/// Cross-origin request settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Origins allowed to call the API from a browser.
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

/// Storage backend settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON data file; records are kept only in memory when unset.
    pub data_file: Option<PathBuf>,
    /// Reject records whose email another record already uses.
    pub unique_emails: bool,
}
