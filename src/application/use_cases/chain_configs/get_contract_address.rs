//! Get Contract Address Use Case
//!
//! Resolves the address of one contract role for a chain id and version.

use std::sync::Arc;

use alloy_primitives::Address;

use super::GetChainConfigUseCase;
use crate::domain::models::chain_config::{ChainId, ContractRole};
use crate::shared::errors::UseCaseError;

/// Use case for getting a contract address
pub struct GetContractAddressUseCase {
    get_chain_config: Arc<GetChainConfigUseCase>,
}

impl GetContractAddressUseCase {
    /// Create a new GetContractAddressUseCase
    #[must_use]
    pub fn new(get_chain_config: Arc<GetChainConfigUseCase>) -> Self {
        Self { get_chain_config }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the chain id or version doesn't exist.
    pub fn execute(
        &self,
        role: ContractRole,
        chain_id: ChainId,
        version: Option<&str>,
    ) -> Result<Address, UseCaseError> {
        let config = self.get_chain_config.execute(chain_id, version)?;
        Ok(config.contracts.address(role))
    }
}
