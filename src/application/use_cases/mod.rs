//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod chain_configs;

pub use chain_configs::{
    GetAllChainConfigsUseCase, GetChainConfigUseCase, GetContractAddressUseCase, GetEip712DomainUseCase,
    GetSupportedChainIdsUseCase, MergeChainConfigsUseCase,
};
