//! Domain Layer
//!
//! Contains the chain config model, the merge rules and the gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::{ChainConfigRepository, ChainConfigSource};
pub use models::{
    ChainConfig, ChainConfigTable, ChainId, ContractRole, Contracts, Eip712Domain, MergeSummary,
    TypedDataDomain,
};
