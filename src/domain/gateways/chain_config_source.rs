//! Chain Config Source Gateway
//!
//! Where the initial chain config table comes from.

use crate::domain::models::chain_config_table::ChainConfigTable;
use crate::shared::errors::LoadError;

/// Source of the table the registry starts with
pub trait ChainConfigSource {
    /// Load and validate the full table
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the source is missing, unreadable or invalid.
    fn load(&self) -> Result<ChainConfigTable, LoadError>;
}
