//! Atlas Chain Config Registry
//!
//! Per-chain, per-version Atlas contract addresses and EIP-712 signing domains,
//! loaded once at startup and patchable at runtime. Laid out following
//! Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use domain::models::versions;
pub use domain::models::{
    ChainConfig, ChainConfigTable, ChainId, ContractRole, Contracts, Eip712Domain, MergeSummary, TypedDataDomain,
};
pub use infrastructure::driven_adapters::{AppConfig, RegistryConfig};
pub use infrastructure::driving_adapters::ConfigRegistry;
pub use shared::errors::{DomainError, LoadError, UseCaseError};
