//! Chain Config Repository Gateway
//!
//! Abstract trait defining the contract for reading and merging chain configs.

use crate::domain::models::chain_config::{ChainConfig, ChainId};
use crate::domain::models::chain_config_table::{ChainConfigTable, MergeSummary};
use crate::shared::errors::DomainError;

/// Repository trait for chain config lookups and merges.
///
/// Every read hands back an owned copy: later merges are never visible
/// through a value returned earlier.
#[cfg_attr(test, mockall::automock)]
pub trait ChainConfigRepository: Send + Sync {
    /// Find the record for a chain id and version
    fn find(&self, chain_id: ChainId, version: &str) -> Option<ChainConfig>;

    /// List every chain id that has at least one version
    fn chain_ids(&self) -> Vec<ChainId>;

    /// Deep copy of every record
    fn snapshot(&self) -> ChainConfigTable;

    /// Merge a patch table, holding exclusive access for the whole call
    fn merge(&self, patch: ChainConfigTable) -> Result<MergeSummary, DomainError>;
}
