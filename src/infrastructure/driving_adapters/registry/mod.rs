//! Config Registry
//!
//! The accessor surface the host application uses. Built once at the
//! composition root and shared by cloning; clones see the same table.

use std::path::Path;
use std::sync::Arc;

use alloy_primitives::Address;

use crate::application::use_cases::chain_configs::{
    GetAllChainConfigsUseCase, GetChainConfigUseCase, GetContractAddressUseCase, GetEip712DomainUseCase,
    GetSupportedChainIdsUseCase, MergeChainConfigsUseCase,
};
use crate::domain::gateways::{ChainConfigRepository, ChainConfigSource};
use crate::domain::models::chain_config::{ChainConfig, ChainId, ContractRole, TypedDataDomain};
use crate::domain::models::chain_config_table::{ChainConfigTable, MergeSummary};
use crate::infrastructure::driven_adapters::chain_config_repository::InMemoryChainConfigRepository;
use crate::infrastructure::driven_adapters::chain_config_source::document::{
    document_from_table, patch_from_document, ChainConfigPatchDocument,
};
use crate::infrastructure::driven_adapters::chain_config_source::JsonChainConfigSource;
use crate::infrastructure::driven_adapters::config::{AppConfig, RegistryConfig};
use crate::shared::errors::{LoadError, UseCaseError};

/// Chain config registry shared across the application
#[derive(Clone)]
pub struct ConfigRegistry {
    get_chain_config_use_case: Arc<GetChainConfigUseCase>,
    get_supported_chain_ids_use_case: Arc<GetSupportedChainIdsUseCase>,
    get_all_chain_configs_use_case: Arc<GetAllChainConfigsUseCase>,
    merge_chain_configs_use_case: Arc<MergeChainConfigsUseCase>,
    get_contract_address_use_case: Arc<GetContractAddressUseCase>,
    get_eip712_domain_use_case: Arc<GetEip712DomainUseCase>,
    legacy_version: String,
}

impl ConfigRegistry {
    /// Wire the use cases over an existing repository
    #[must_use]
    pub fn new(chain_config_repository: Arc<dyn ChainConfigRepository>, settings: &RegistryConfig) -> Self {
        let get_chain_config_use_case = Arc::new(GetChainConfigUseCase::new(
            chain_config_repository.clone(),
            settings.default_version.clone(),
        ));

        Self {
            get_supported_chain_ids_use_case: Arc::new(GetSupportedChainIdsUseCase::new(
                chain_config_repository.clone(),
            )),
            get_all_chain_configs_use_case: Arc::new(GetAllChainConfigsUseCase::new(chain_config_repository.clone())),
            merge_chain_configs_use_case: Arc::new(MergeChainConfigsUseCase::new(chain_config_repository)),
            get_contract_address_use_case: Arc::new(GetContractAddressUseCase::new(get_chain_config_use_case.clone())),
            get_eip712_domain_use_case: Arc::new(GetEip712DomainUseCase::new(get_chain_config_use_case.clone())),
            get_chain_config_use_case,
            legacy_version: settings.legacy_version.clone(),
        }
    }

    /// Build a registry from a source
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the source cannot be loaded.
    pub fn load(source: &dyn ChainConfigSource, settings: &RegistryConfig) -> Result<Self, LoadError> {
        let table = source.load()?;
        Ok(Self::new(Arc::new(InMemoryChainConfigRepository::new(table)), settings))
    }

    /// Build a registry from settings: the configured document, or the embedded one
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the document is missing, unreadable or invalid.
    pub fn from_settings(settings: &RegistryConfig) -> Result<Self, LoadError> {
        let source = match &settings.chain_config_path {
            Some(path) => JsonChainConfigSource::from_path(path),
            None => JsonChainConfigSource::embedded(),
        }
        .with_legacy_version(settings.legacy_version.clone());

        Self::load(&source, settings)
    }

    /// Build a registry from the embedded document with default settings
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the embedded document is invalid.
    pub fn embedded() -> Result<Self, LoadError> {
        Self::from_settings(&RegistryConfig::default())
    }

    /// Build a registry from the document at `path` with default settings
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the document is missing, unreadable or invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::from_settings(&RegistryConfig {
            chain_config_path: Some(path.as_ref().to_path_buf()),
            ..RegistryConfig::default()
        })
    }

    /// Load `AppConfig` and build the registry it describes
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the settings or the document cannot be loaded.
    pub fn bootstrap() -> Result<Self, LoadError> {
        let config = AppConfig::load()?;
        tracing::info!("Configuration loaded successfully");
        Self::from_settings(&config.registry)
    }

    /// Like [`ConfigRegistry::bootstrap`], but terminates the process on failure.
    ///
    /// For composition roots that cannot run without the registry.
    #[must_use]
    pub fn init_or_abort() -> Self {
        match Self::bootstrap() {
            Ok(registry) => registry,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load chain config registry");
                std::process::exit(1);
            }
        }
    }

    /// Version used when a lookup passes `None`
    #[must_use]
    pub fn default_version(&self) -> &str {
        self.get_chain_config_use_case.default_version()
    }

    /// Chain config for a chain id and version (default version when `None`)
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the chain id or version doesn't exist.
    pub fn chain_config(
        &self,
        chain_id: impl Into<ChainId>,
        version: Option<&str>,
    ) -> Result<ChainConfig, UseCaseError> {
        self.get_chain_config_use_case.execute(chain_id.into(), version)
    }

    /// Every chain id with at least one version, in no guaranteed order
    #[must_use]
    pub fn supported_chain_ids(&self) -> Vec<ChainId> {
        self.get_supported_chain_ids_use_case.execute()
    }

    /// Deep copy of the whole registry
    #[must_use]
    pub fn all_chain_configs(&self) -> ChainConfigTable {
        self.get_all_chain_configs_use_case.execute()
    }

    /// Merge a patch table into the registry
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` if a new key carries an incomplete record.
    /// Keys merged before the failing one stay merged.
    pub fn merge_chain_configs(&self, patch: ChainConfigTable) -> Result<MergeSummary, UseCaseError> {
        self.merge_chain_configs_use_case.execute(patch)
    }

    /// Merge a JSON patch document, in either document layout
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::InvalidPatch` if the document cannot be parsed,
    /// or the errors of [`ConfigRegistry::merge_chain_configs`].
    pub fn merge_chain_configs_json(&self, raw: &str) -> Result<MergeSummary, UseCaseError> {
        let document: ChainConfigPatchDocument =
            serde_json::from_str(raw).map_err(|e| UseCaseError::InvalidPatch(e.to_string()))?;
        let patch = patch_from_document(document, &self.legacy_version)?;
        self.merge_chain_configs(patch)
    }

    /// Render the current registry as a versioned JSON document
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if serialization fails.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&document_from_table(&self.all_chain_configs()))
    }

    /// Address of a contract role
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the chain id or version doesn't exist.
    pub fn contract_address(
        &self,
        role: ContractRole,
        chain_id: impl Into<ChainId>,
        version: Option<&str>,
    ) -> Result<Address, UseCaseError> {
        self.get_contract_address_use_case.execute(role, chain_id.into(), version)
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the chain id or version doesn't exist.
    pub fn atlas_address(&self, chain_id: impl Into<ChainId>, version: Option<&str>) -> Result<Address, UseCaseError> {
        self.contract_address(ContractRole::Atlas, chain_id, version)
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the chain id or version doesn't exist.
    pub fn atlas_verification_address(
        &self,
        chain_id: impl Into<ChainId>,
        version: Option<&str>,
    ) -> Result<Address, UseCaseError> {
        self.contract_address(ContractRole::AtlasVerification, chain_id, version)
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the chain id or version doesn't exist.
    pub fn sorter_address(&self, chain_id: impl Into<ChainId>, version: Option<&str>) -> Result<Address, UseCaseError> {
        self.contract_address(ContractRole::Sorter, chain_id, version)
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the chain id or version doesn't exist.
    pub fn simulator_address(
        &self,
        chain_id: impl Into<ChainId>,
        version: Option<&str>,
    ) -> Result<Address, UseCaseError> {
        self.contract_address(ContractRole::Simulator, chain_id, version)
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the chain id or version doesn't exist.
    pub fn multicall3_address(
        &self,
        chain_id: impl Into<ChainId>,
        version: Option<&str>,
    ) -> Result<Address, UseCaseError> {
        self.contract_address(ContractRole::Multicall3, chain_id, version)
    }

    /// EIP-712 typed-data domain for a chain id and version
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the chain id or version doesn't exist.
    pub fn eip712_domain(
        &self,
        chain_id: impl Into<ChainId>,
        version: Option<&str>,
    ) -> Result<TypedDataDomain, UseCaseError> {
        self.get_eip712_domain_use_case.execute(chain_id.into(), version)
    }
}
