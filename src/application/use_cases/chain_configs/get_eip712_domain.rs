//! Get EIP-712 Domain Use Case
//!
//! Packages the signing domain of a chain id and version for typed-data signing.

use std::sync::Arc;

use super::GetChainConfigUseCase;
use crate::domain::models::chain_config::{ChainId, TypedDataDomain};
use crate::shared::errors::UseCaseError;

/// Use case for getting the typed-data signing domain
pub struct GetEip712DomainUseCase {
    get_chain_config: Arc<GetChainConfigUseCase>,
}

impl GetEip712DomainUseCase {
    /// Create a new GetEip712DomainUseCase
    #[must_use]
    pub fn new(get_chain_config: Arc<GetChainConfigUseCase>) -> Self {
        Self { get_chain_config }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the chain id or version doesn't exist.
    pub fn execute(&self, chain_id: ChainId, version: Option<&str>) -> Result<TypedDataDomain, UseCaseError> {
        let config = self.get_chain_config.execute(chain_id, version)?;
        Ok(config.typed_data_domain())
    }
}
