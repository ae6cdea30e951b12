//! Domain Models
//!
//! Pure domain entities and value objects for chain configuration.

pub mod chain_config;
pub mod chain_config_table;
pub mod versions;

pub use chain_config::{ChainConfig, ChainId, ContractRole, Contracts, Eip712Domain, TypedDataDomain};
pub use chain_config_table::{ChainConfigTable, MergeSummary};
