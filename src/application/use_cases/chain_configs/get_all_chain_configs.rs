//! Get All Chain Configs Use Case
//!
//! Returns a deep copy of every chain config, for inspection or export.

use std::sync::Arc;

use crate::domain::gateways::ChainConfigRepository;
use crate::domain::models::chain_config_table::ChainConfigTable;

/// Use case for snapshotting the whole registry
pub struct GetAllChainConfigsUseCase {
    chain_config_repository: Arc<dyn ChainConfigRepository>,
}

impl GetAllChainConfigsUseCase {
    /// Create a new GetAllChainConfigsUseCase
    #[must_use]
    pub fn new(chain_config_repository: Arc<dyn ChainConfigRepository>) -> Self {
        Self { chain_config_repository }
    }

    /// Execute the use case
    #[must_use]
    pub fn execute(&self) -> ChainConfigTable {
        let snapshot = self.chain_config_repository.snapshot();
        tracing::debug!(records = snapshot.len(), "Took chain config snapshot");
        snapshot
    }
}
