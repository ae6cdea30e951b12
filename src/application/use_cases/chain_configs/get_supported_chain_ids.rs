//! Get Supported Chain Ids Use Case
//!
//! Lists every chain id the registry holds at least one version for.

use std::sync::Arc;

use crate::domain::gateways::ChainConfigRepository;
use crate::domain::models::chain_config::ChainId;

/// Use case for listing supported chain ids
pub struct GetSupportedChainIdsUseCase {
    chain_config_repository: Arc<dyn ChainConfigRepository>,
}

impl GetSupportedChainIdsUseCase {
    /// Create a new GetSupportedChainIdsUseCase
    #[must_use]
    pub fn new(chain_config_repository: Arc<dyn ChainConfigRepository>) -> Self {
        Self { chain_config_repository }
    }

    /// Execute the use case
    #[must_use]
    pub fn execute(&self) -> Vec<ChainId> {
        let chain_ids = self.chain_config_repository.chain_ids();
        tracing::debug!(count = chain_ids.len(), "Listed supported chain ids");
        chain_ids
    }
}
