//! Configuration loading and management for the employee registry.
//!
//! This module loads listener, CORS, and storage settings from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use employee_registry::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/registry.yaml").unwrap();
//! println!("Binding {}:{}", config.config().server.host, config.config().server.port);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CorsConfig, RegistryConfig, ServerConfig, StorageConfig};
