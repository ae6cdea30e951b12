//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod chain_config_repository;
pub mod chain_config_source;

pub use chain_config_repository::ChainConfigRepository;
pub use chain_config_source::ChainConfigSource;

#[cfg(test)]
pub use chain_config_repository::MockChainConfigRepository;
