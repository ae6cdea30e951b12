//! Merge Chain Configs Use Case
//!
//! Applies a patch table to the registry: new (chain id, version) keys need a
//! complete record, existing keys are replaced or patched field by field.

use std::sync::Arc;

use crate::domain::gateways::ChainConfigRepository;
use crate::domain::models::chain_config_table::{ChainConfigTable, MergeSummary};
use crate::shared::errors::UseCaseError;

/// Use case for merging chain configs
pub struct MergeChainConfigsUseCase {
    chain_config_repository: Arc<dyn ChainConfigRepository>,
}

impl MergeChainConfigsUseCase {
    /// Create a new MergeChainConfigsUseCase
    #[must_use]
    pub fn new(chain_config_repository: Arc<dyn ChainConfigRepository>) -> Self {
        Self { chain_config_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` if the patch introduces a new key with an
    /// incomplete record. Keys merged before the failing one stay merged.
    pub fn execute(&self, patch: ChainConfigTable) -> Result<MergeSummary, UseCaseError> {
        tracing::info!(records = patch.len(), "Merging chain configs");

        let summary = self.chain_config_repository.merge(patch).map_err(|e| {
            tracing::warn!(error = %e, "Chain config merge rejected");
            e
        })?;

        tracing::info!(
            inserted = summary.inserted,
            replaced = summary.replaced,
            patched = summary.patched,
            "Chain configs merged successfully"
        );
        Ok(summary)
    }
}
