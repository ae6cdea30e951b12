//! Chain Config Use Cases
//!
//! Lookups and merges over the chain config registry.

mod get_all_chain_configs;
mod get_chain_config;
mod get_contract_address;
mod get_eip712_domain;
mod get_supported_chain_ids;
mod merge_chain_configs;

pub use get_all_chain_configs::GetAllChainConfigsUseCase;
pub use get_chain_config::GetChainConfigUseCase;
pub use get_contract_address::GetContractAddressUseCase;
pub use get_eip712_domain::GetEip712DomainUseCase;
pub use get_supported_chain_ids::GetSupportedChainIdsUseCase;
pub use merge_chain_configs::MergeChainConfigsUseCase;
