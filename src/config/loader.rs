//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the registry
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{RegistryError, RegistryResult};

use super::types::RegistryConfig;

/// Loads and provides access to the registry configuration.
///
/// # File Format
///
/// ```text
/// server:
///   host: 0.0.0.0
///   port: 8080
/// cors:
///   allowed_origins:
///     - http://localhost:3000
/// storage:
///   data_file: ./data/employees.json
///   unique_emails: true
/// ```
///
/// # Example
///
/// ```no_run
/// use employee_registry::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/registry.yaml")?;
/// println!("Listening on port {}", loader.config().server.port);
/// # Ok::<(), employee_registry::error::RegistryError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: RegistryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown value types (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> RegistryResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RegistryError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, path_str)
    }

    /// Parses configuration from YAML text.
    ///
    /// # Example
    ///
    /// ```
    /// use employee_registry::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::from_yaml_str("server:\n  port: 9000\n")?;
    /// assert_eq!(loader.config().server.port, 9000);
    /// assert_eq!(loader.config().server.host, "127.0.0.1");
    /// # Ok::<(), employee_registry::error::RegistryError>(())
    /// ```
    pub fn from_yaml_str(content: &str) -> RegistryResult<Self> {
        Self::parse(content, "<inline>".to_string())
    }

    fn parse(content: &str, path: String) -> RegistryResult<Self> {
        // An empty document means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = serde_yaml::from_str::<RegistryConfig>(content).map_err(|e| {
            RegistryError::ConfigParseError {
                path,
                message: e.to_string(),
            }
        })?;

        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> RegistryConfig {
        self.config
    }
}
