//! Configuration management for ollama-connection
//!
//! TOML-based connection settings with built-in defaults.
//! Location: ~/.ollama-connection/config.toml

use crate::errors::{ConnectionError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default Ollama base address
pub const DEFAULT_OLLAMA_ADDRESS: &str = "http://127.0.0.1:11434/";

/// Connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base address, request paths are appended to it verbatim
    #[serde(default = "default_address")]
    pub address: String,

    /// Exit the process when the server cannot be validated
    #[serde(default)]
    pub strict: bool,
}

fn default_address() -> String {
    DEFAULT_OLLAMA_ADDRESS.to_string()
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            strict: false,
        }
    }
}

impl ConnectionConfig {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(config_path) => Self::load_from_file(config_path),
            None => Self::load_default(),
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConnectionError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: ConnectionConfig = toml::from_str(&contents)
            .map_err(|e| ConnectionError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load from the standard location, falling back to built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(ConnectionConfig::default())
    }

    /// Standard configuration file path
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".ollama-connection").join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.address.trim().is_empty() {
            return Err(ConnectionError::ConfigError(
                "address must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| ConnectionError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;
        Ok(())
    }
}
