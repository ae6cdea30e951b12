//! Application Configuration
//!
//! Loads registry settings from defaults, optional files and environment variables.

use std::path::PathBuf;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::models::versions::V1_0_0;

/// Registry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    /// Chain config document to load; the embedded document when unset
    #[serde(default)]
    pub chain_config_path: Option<PathBuf>,
    /// Version used by lookups that don't name one
    pub default_version: String,
    /// Version that unversioned document entries are migrated to
    pub legacy_version: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            chain_config_path: None,
            default_version: V1_0_0.to_string(),
            legacy_version: V1_0_0.to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub registry: RegistryConfig,
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source is malformed or a value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

        Self::builder()?
            // Merge config files if they exist
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            // Override with environment variables (e.g., APP__REGISTRY__DEFAULT_VERSION)
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Builder pre-populated with the registry defaults
    fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("registry.default_version", V1_0_0)?
            .set_default("registry.legacy_version", V1_0_0)
    }
}
