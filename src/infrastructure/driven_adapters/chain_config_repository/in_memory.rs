//! In-Memory Chain Config Repository Implementation
//!
//! Implements the ChainConfigRepository trait over a table guarded by a
//! reader-writer lock.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::gateways::ChainConfigRepository;
use crate::domain::models::chain_config::{ChainConfig, ChainId};
use crate::domain::models::chain_config_table::{ChainConfigTable, MergeSummary};
use crate::shared::errors::DomainError;

/// In-memory implementation of ChainConfigRepository
pub struct InMemoryChainConfigRepository {
    table: RwLock<ChainConfigTable>,
}

impl InMemoryChainConfigRepository {
    /// Create a new InMemoryChainConfigRepository holding `table`
    #[must_use]
    pub fn new(table: ChainConfigTable) -> Self {
        Self {
            table: RwLock::new(table),
        }
    }

    // Merges never panic while holding the write guard, so a poisoned lock
    // still guards a consistent table.
    fn read(&self) -> RwLockReadGuard<'_, ChainConfigTable> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ChainConfigTable> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ChainConfigRepository for InMemoryChainConfigRepository {
    fn find(&self, chain_id: ChainId, version: &str) -> Option<ChainConfig> {
        self.read().get(chain_id, version).cloned()
    }

    fn chain_ids(&self) -> Vec<ChainId> {
        self.read().chain_ids()
    }

    fn snapshot(&self) -> ChainConfigTable {
        self.read().clone()
    }

    fn merge(&self, patch: ChainConfigTable) -> Result<MergeSummary, DomainError> {
        self.write().merge(patch)
    }
}
