//! JSON Chain Config Source
//!
//! Reads the registry document from a file, or from the copy of
//! `config/chain-config.json` embedded at build time.

use std::fs;
use std::path::{Path, PathBuf};

use super::document::{table_from_document, ChainConfigDocument};
use crate::domain::gateways::ChainConfigSource;
use crate::domain::models::chain_config_table::ChainConfigTable;
use crate::domain::models::versions::V1_0_0;
use crate::shared::errors::LoadError;

/// Registry document shipped with the crate
pub const EMBEDDED_CHAIN_CONFIG: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config/chain-config.json"));

#[derive(Debug, Clone)]
enum Origin {
    Embedded,
    File(PathBuf),
}

/// JSON document implementation of ChainConfigSource
#[derive(Debug, Clone)]
pub struct JsonChainConfigSource {
    origin: Origin,
    legacy_version: String,
}

impl JsonChainConfigSource {
    /// Source reading the embedded document
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            origin: Origin::Embedded,
            legacy_version: V1_0_0.to_string(),
        }
    }

    /// Source reading the document at `path`
    #[must_use]
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            origin: Origin::File(path.as_ref().to_path_buf()),
            legacy_version: V1_0_0.to_string(),
        }
    }

    /// Version that unversioned (legacy) entries are migrated to
    #[must_use]
    pub fn with_legacy_version(mut self, legacy_version: impl Into<String>) -> Self {
        self.legacy_version = legacy_version.into();
        self
    }

    /// Parse and validate a raw document
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Parse` for malformed JSON and
    /// `LoadError::Validation`/`LoadError::InvalidChainId` for invalid records.
    pub fn parse_str(&self, raw: &str) -> Result<ChainConfigTable, LoadError> {
        let document: ChainConfigDocument = serde_json::from_str(raw)?;
        table_from_document(document, &self.legacy_version)
    }
}

impl ChainConfigSource for JsonChainConfigSource {
    fn load(&self) -> Result<ChainConfigTable, LoadError> {
        let table = match &self.origin {
            Origin::Embedded => self.parse_str(EMBEDDED_CHAIN_CONFIG)?,
            Origin::File(path) => {
                let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })?;
                self.parse_str(&raw)?
            }
        };

        tracing::info!(
            origin = ?self.origin,
            chains = table.chain_ids().len(),
            records = table.len(),
            "Chain config document loaded"
        );
        Ok(table)
    }
}
