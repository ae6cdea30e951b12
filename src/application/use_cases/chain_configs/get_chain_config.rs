//! Get Chain Config Use Case
//!
//! Retrieves the chain config for a chain id and version.

use std::sync::Arc;

use crate::domain::gateways::ChainConfigRepository;
use crate::domain::models::chain_config::{ChainConfig, ChainId};
use crate::shared::errors::UseCaseError;

/// Use case for getting one chain config
pub struct GetChainConfigUseCase {
    chain_config_repository: Arc<dyn ChainConfigRepository>,
    default_version: String,
}

impl GetChainConfigUseCase {
    /// Create a new GetChainConfigUseCase
    ///
    /// `default_version` is used whenever a caller does not name a version.
    #[must_use]
    pub fn new(chain_config_repository: Arc<dyn ChainConfigRepository>, default_version: impl Into<String>) -> Self {
        Self {
            chain_config_repository,
            default_version: default_version.into(),
        }
    }

    #[must_use]
    pub fn default_version(&self) -> &str {
        &self.default_version
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the chain id or version doesn't exist.
    pub fn execute(&self, chain_id: ChainId, version: Option<&str>) -> Result<ChainConfig, UseCaseError> {
        let version = version.unwrap_or(self.default_version.as_str());
        tracing::debug!(chain_id = %chain_id, version, "Getting chain config");

        let config = self.chain_config_repository.find(chain_id, version).ok_or_else(|| {
            tracing::warn!(chain_id = %chain_id, version, "Chain config not found");
            UseCaseError::NotFound {
                chain_id,
                version: version.to_string(),
            }
        })?;

        Ok(config)
    }
}
