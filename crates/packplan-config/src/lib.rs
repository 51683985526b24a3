//! Catalog configuration for packplan.
//!
//! Load the allowed pack sizes (and the HTTP server settings) from a TOML
//! or JSON file. The loader owns input validation: the solver is only ever
//! handed a non-empty, strictly positive, sorted catalog.
//!
//! # Examples
//!
//! Parse a catalog from a TOML string:
//!
//! ```
//! use packplan_config::CatalogConfig;
//!
//! let config = CatalogConfig::from_toml_str(r#"
//!     pack_sizes = [500, 250, 1000]
//!
//!     [server]
//!     bind_addr = "127.0.0.1:9090"
//! "#).unwrap();
//!
//! assert_eq!(config.validated_sizes().unwrap(), vec![250, 500, 1000]);
//! assert_eq!(config.server.bind_addr, "127.0.0.1:9090");
//! ```
//!
//! A bare JSON array is accepted for compatibility with plain
//! pack-list config files:
//!
//! ```
//! use packplan_config::CatalogConfig;
//!
//! let config = CatalogConfig::from_json_str("[250, 500, 1000]").unwrap();
//! assert_eq!(config.pack_sizes, vec![250, 500, 1000]);
//! ```

use std::path::Path;

use packplan_core::PackSize;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[cfg(test)]
mod tests;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for the HTTP service binary.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP service binds to.
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Catalog configuration: allowed pack sizes plus server settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Allowed pack sizes. Must be non-empty and strictly positive.
    #[serde(default)]
    pub pack_sizes: Vec<PackSize>,

    /// HTTP server settings, consumed only by the service binary.
    #[serde(default)]
    pub server: ServerConfig,
}

impl CatalogConfig {
    /// Loads configuration from a file, dispatching on its extension
    /// (`.toml` or `.json`).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, fails to parse, or has
    /// an unrecognized extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_file(path),
            Some("json") => Self::from_json_file(path),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parses configuration from a JSON string.
    ///
    /// Accepts both the object form `{"pack_sizes": [...]}` and a bare
    /// top-level array of sizes.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        if let Ok(pack_sizes) = serde_json::from_str::<Vec<PackSize>>(s) {
            return Ok(Self {
                pack_sizes,
                server: ServerConfig::default(),
            });
        }
        Ok(serde_json::from_str(s)?)
    }

    /// Validates and normalizes the catalog: errors on an empty list or a
    /// zero size, collapses duplicates, and returns the sizes sorted
    /// ascending.
    pub fn validated_sizes(&self) -> Result<Vec<PackSize>, ConfigError> {
        if self.pack_sizes.is_empty() {
            return Err(ConfigError::Invalid("pack sizes list is empty".into()));
        }
        if let Some(index) = self.pack_sizes.iter().position(|&size| size == 0) {
            return Err(ConfigError::Invalid(format!(
                "invalid pack size at index {index}: 0"
            )));
        }

        let mut sizes = self.pack_sizes.clone();
        sizes.sort_unstable();
        let before = sizes.len();
        sizes.dedup();
        if sizes.len() < before {
            warn!(
                dropped = before - sizes.len(),
                "duplicate pack sizes collapsed"
            );
        }
        Ok(sizes)
    }
}
