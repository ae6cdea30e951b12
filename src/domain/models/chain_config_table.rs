//! Chain Config Table
//!
//! Two-level table of chain configs keyed by chain id, then by contract-suite
//! version, together with the rules for merging a patch table into it.

use std::collections::BTreeMap;

use crate::domain::models::chain_config::{ChainConfig, ChainId};
use crate::shared::errors::DomainError;

/// Records keyed by chain id, then by version string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainConfigTable(BTreeMap<ChainId, BTreeMap<String, ChainConfig>>);

/// Counts of what a merge did, per (chain id, version) key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub inserted: usize,
    pub replaced: usize,
    pub patched: usize,
}

impl ChainConfigTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, chain_id: ChainId, version: &str) -> Option<&ChainConfig> {
        self.0.get(&chain_id).and_then(|by_version| by_version.get(version))
    }

    #[must_use]
    pub fn contains(&self, chain_id: ChainId, version: &str) -> bool {
        self.get(chain_id, version).is_some()
    }

    /// Insert a record, returning the one it replaced
    pub fn insert(
        &mut self,
        chain_id: ChainId,
        version: impl Into<String>,
        config: ChainConfig,
    ) -> Option<ChainConfig> {
        self.0.entry(chain_id).or_default().insert(version.into(), config)
    }

    /// Chain ids with at least one version, ascending
    #[must_use]
    pub fn chain_ids(&self) -> Vec<ChainId> {
        self.0.keys().copied().collect()
    }

    /// Versions recorded for a chain, ascending
    #[must_use]
    pub fn versions(&self, chain_id: ChainId) -> Vec<&str> {
        self.0
            .get(&chain_id)
            .map(|by_version| by_version.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Number of (chain id, version) records
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChainId, &str, &ChainConfig)> {
        self.0.iter().flat_map(|(chain_id, by_version)| {
            by_version
                .iter()
                .map(move |(version, config)| (*chain_id, version.as_str(), config))
        })
    }

    /// Merge a patch table into this one, key by key in ascending order.
    ///
    /// - An existing key is replaced by a complete patch record, otherwise the
    ///   set fields of the patch record are merged into it.
    /// - A new key requires a complete patch record.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IncompleteNewEntry` for the first new key whose
    /// record is incomplete. Keys processed before it stay applied.
    pub fn merge(&mut self, patch: ChainConfigTable) -> Result<MergeSummary, DomainError> {
        let mut summary = MergeSummary::default();

        for (chain_id, by_version) in patch.0 {
            for (version, provided) in by_version {
                if let Some(existing) = self
                    .0
                    .get_mut(&chain_id)
                    .and_then(|existing_versions| existing_versions.get_mut(&version))
                {
                    if provided.is_complete() {
                        *existing = provided;
                        summary.replaced += 1;
                    } else {
                        existing.merge_from(&provided);
                        summary.patched += 1;
                    }
                    continue;
                }

                if !provided.is_complete() {
                    return Err(DomainError::IncompleteNewEntry { chain_id, version });
                }
                self.insert(chain_id, version, provided);
                summary.inserted += 1;
            }
        }

        Ok(summary)
    }
}

impl FromIterator<(ChainId, String, ChainConfig)> for ChainConfigTable {
    fn from_iter<I: IntoIterator<Item = (ChainId, String, ChainConfig)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (chain_id, version, config) in iter {
            table.insert(chain_id, version, config);
        }
        table
    }
}
