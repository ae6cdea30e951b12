//! Chain Config Document DTOs
//!
//! Serde shapes of the chain config JSON document, in both layouts:
//!
//! - versioned: `{ "<chainId>": { "<version>": { "contracts": .., "eip712Domain": .. } } }`
//! - legacy: `{ "<chainId>": { "contracts": .., "eip712Domain": .. } }`
//!
//! Legacy entries are migrated to the versioned layout under a caller-chosen
//! version. Contract addresses may be bare hex strings or `{ "address": "0x.." }`.

use std::collections::BTreeMap;
use std::str::FromStr;

use alloy_primitives::Address;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationErrors};

use crate::domain::models::chain_config::{ChainConfig, ChainId, Contracts, Eip712Domain};
use crate::domain::models::chain_config_table::ChainConfigTable;
use crate::shared::errors::{LoadError, UseCaseError};

lazy_static! {
    /// Regex for validating Ethereum addresses
    static ref ETHEREUM_ADDRESS_REGEX: Regex = Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("valid regex");
}

/// Validates an Ethereum address format
fn validate_ethereum_address(address: &str) -> Result<(), validator::ValidationError> {
    if ETHEREUM_ADDRESS_REGEX.is_match(address) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("ethereum_address");
        error.message = Some("Invalid Ethereum address format (must be 0x followed by 40 hex characters)".into());
        Err(error)
    }
}

/// Contract address as written in a document
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum AddressEntry {
    Bare(String),
    Object { address: String },
}

impl From<AddressEntry> for String {
    fn from(entry: AddressEntry) -> Self {
        match entry {
            AddressEntry::Bare(address) | AddressEntry::Object { address } => address,
        }
    }
}

fn deserialize_address<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    AddressEntry::deserialize(deserializer).map(String::from)
}

fn deserialize_optional_address<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<AddressEntry>::deserialize(deserializer).map(|entry| entry.map(String::from))
}

/// Flatten validation errors into `field: message` strings
fn field_messages(prefix: &str, errors: &ValidationErrors) -> Vec<String> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| {
                format!(
                    "{}.{}: {}",
                    prefix,
                    field,
                    e.message.as_ref().map_or("invalid", |m| m.as_ref())
                )
            })
        })
        .collect()
}

/// Contract addresses of a complete record
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContractsDto {
    #[serde(deserialize_with = "deserialize_address")]
    #[validate(custom(function = "validate_ethereum_address"))]
    pub atlas: String,

    #[serde(deserialize_with = "deserialize_address")]
    #[validate(custom(function = "validate_ethereum_address"))]
    pub atlas_verification: String,

    #[serde(deserialize_with = "deserialize_address")]
    #[validate(custom(function = "validate_ethereum_address"))]
    pub sorter: String,

    #[serde(deserialize_with = "deserialize_address")]
    #[validate(custom(function = "validate_ethereum_address"))]
    pub simulator: String,

    #[serde(deserialize_with = "deserialize_address")]
    #[validate(custom(function = "validate_ethereum_address"))]
    pub multicall3: String,
}

/// Signing domain of a complete record
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Eip712DomainDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "version must not be empty"))]
    pub version: String,

    #[validate(range(min = 1, message = "chainId must be at least 1"))]
    pub chain_id: u64,

    #[validate(custom(function = "validate_ethereum_address"))]
    pub verifying_contract: String,
}

/// Complete record as found in the registry document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChainConfigDto {
    pub contracts: ContractsDto,
    pub eip712_domain: Eip712DomainDto,
}

impl ChainConfigDto {
    /// Validate and convert into the domain model
    ///
    /// # Errors
    ///
    /// Returns the list of field errors if the record is malformed or incomplete.
    pub fn into_domain(self) -> Result<ChainConfig, Vec<String>> {
        let mut errors = Vec::new();
        if let Err(e) = self.contracts.validate() {
            errors.extend(field_messages("contracts", &e));
        }
        if let Err(e) = self.eip712_domain.validate() {
            errors.extend(field_messages("eip712Domain", &e));
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let parse = |field: &str, value: &str| {
            Address::from_str(value).map_err(|e| format!("contracts.{field}: {e}"))
        };
        let contracts = Contracts {
            atlas: parse("atlas", &self.contracts.atlas).map_err(|e| vec![e])?,
            atlas_verification: parse("atlasVerification", &self.contracts.atlas_verification)
                .map_err(|e| vec![e])?,
            sorter: parse("sorter", &self.contracts.sorter).map_err(|e| vec![e])?,
            simulator: parse("simulator", &self.contracts.simulator).map_err(|e| vec![e])?,
            multicall3: parse("multicall3", &self.contracts.multicall3).map_err(|e| vec![e])?,
        };

        let config = ChainConfig {
            contracts,
            eip712_domain: Eip712Domain {
                name: self.eip712_domain.name,
                version: self.eip712_domain.version,
                chain_id: self.eip712_domain.chain_id,
                verifying_contract: self.eip712_domain.verifying_contract,
            },
        };
        if !config.is_complete() {
            return Err(vec!["contracts: every contract address must be non-zero".to_string()]);
        }
        Ok(config)
    }
}

impl From<&ChainConfig> for ChainConfigDto {
    fn from(config: &ChainConfig) -> Self {
        Self {
            contracts: ContractsDto {
                atlas: config.contracts.atlas.to_checksum(None),
                atlas_verification: config.contracts.atlas_verification.to_checksum(None),
                sorter: config.contracts.sorter.to_checksum(None),
                simulator: config.contracts.simulator.to_checksum(None),
                multicall3: config.contracts.multicall3.to_checksum(None),
            },
            eip712_domain: Eip712DomainDto {
                name: config.eip712_domain.name.clone(),
                version: config.eip712_domain.version.clone(),
                chain_id: config.eip712_domain.chain_id,
                verifying_contract: config.eip712_domain.verifying_contract.clone(),
            },
        }
    }
}

/// Contract addresses of a patch (all fields optional)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContractsPatchDto {
    #[serde(default, deserialize_with = "deserialize_optional_address")]
    pub atlas: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_address")]
    pub atlas_verification: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_address")]
    pub sorter: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_address")]
    pub simulator: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_address")]
    pub multicall3: Option<String>,
}

/// Signing domain of a patch (all fields optional)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Eip712DomainPatchDto {
    pub name: Option<String>,
    pub version: Option<String>,
    pub chain_id: Option<u64>,
    pub verifying_contract: Option<String>,
}

/// Possibly incomplete record supplied to a merge
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChainConfigPatchDto {
    #[serde(default)]
    pub contracts: ContractsPatchDto,
    #[serde(default)]
    pub eip712_domain: Eip712DomainPatchDto,
}

/// Absent or malformed patch addresses become `Address::ZERO`, which merges
/// treat as unset.
fn lenient_address(field: &str, value: Option<&str>) -> Address {
    match value {
        None => Address::ZERO,
        Some(raw) => Address::from_str(raw).unwrap_or_else(|e| {
            tracing::warn!(field, value = raw, error = %e, "Malformed address in patch treated as unset");
            Address::ZERO
        }),
    }
}

impl From<ChainConfigPatchDto> for ChainConfig {
    fn from(dto: ChainConfigPatchDto) -> Self {
        Self {
            contracts: Contracts {
                atlas: lenient_address("atlas", dto.contracts.atlas.as_deref()),
                atlas_verification: lenient_address(
                    "atlasVerification",
                    dto.contracts.atlas_verification.as_deref(),
                ),
                sorter: lenient_address("sorter", dto.contracts.sorter.as_deref()),
                simulator: lenient_address("simulator", dto.contracts.simulator.as_deref()),
                multicall3: lenient_address("multicall3", dto.contracts.multicall3.as_deref()),
            },
            eip712_domain: Eip712Domain {
                name: dto.eip712_domain.name.unwrap_or_default(),
                version: dto.eip712_domain.version.unwrap_or_default(),
                chain_id: dto.eip712_domain.chain_id.unwrap_or_default(),
                verifying_contract: dto.eip712_domain.verifying_contract.unwrap_or_default(),
            },
        }
    }
}

/// One chain's entry, in either document layout
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ChainEntryDto<T> {
    Legacy(T),
    Versioned(BTreeMap<String, T>),
}

impl<T> ChainEntryDto<T> {
    /// Records keyed by version, placing a legacy record under `legacy_version`
    pub fn into_versions(self, legacy_version: &str) -> BTreeMap<String, T> {
        match self {
            Self::Legacy(record) => BTreeMap::from([(legacy_version.to_string(), record)]),
            Self::Versioned(by_version) => by_version,
        }
    }
}

/// Registry document as read at load time
pub type ChainConfigDocument = BTreeMap<String, ChainEntryDto<ChainConfigDto>>;

/// Patch document accepted by JSON merges
pub type ChainConfigPatchDocument = BTreeMap<String, ChainEntryDto<ChainConfigPatchDto>>;

/// Versioned document as written by exports
pub type VersionedChainConfigDocument = BTreeMap<String, BTreeMap<String, ChainConfigDto>>;

/// Validate a load document and build the table
///
/// # Errors
///
/// Returns `LoadError::InvalidChainId` for a non-numeric key and
/// `LoadError::Validation` for the first malformed or incomplete record.
pub fn table_from_document(document: ChainConfigDocument, legacy_version: &str) -> Result<ChainConfigTable, LoadError> {
    let mut table = ChainConfigTable::new();

    for (key, entry) in document {
        let chain_id = ChainId::from_str(&key).map_err(|_| LoadError::InvalidChainId(key.clone()))?;
        for (version, dto) in entry.into_versions(legacy_version) {
            let config = dto.into_domain().map_err(|errors| LoadError::Validation {
                chain_id,
                version: version.clone(),
                errors,
            })?;
            table.insert(chain_id, version, config);
        }
    }

    Ok(table)
}

/// Build a patch table from a patch document
///
/// # Errors
///
/// Returns `UseCaseError::InvalidPatch` for a non-numeric chain id key.
pub fn patch_from_document(
    document: ChainConfigPatchDocument,
    legacy_version: &str,
) -> Result<ChainConfigTable, UseCaseError> {
    let mut patch = ChainConfigTable::new();

    for (key, entry) in document {
        let chain_id = ChainId::from_str(&key)
            .map_err(|_| UseCaseError::InvalidPatch(format!("invalid chain id key '{key}'")))?;
        for (version, dto) in entry.into_versions(legacy_version) {
            patch.insert(chain_id, version, ChainConfig::from(dto));
        }
    }

    Ok(patch)
}

/// Render a table as a versioned document
#[must_use]
pub fn document_from_table(table: &ChainConfigTable) -> VersionedChainConfigDocument {
    let mut document = VersionedChainConfigDocument::new();
    for (chain_id, version, config) in table.iter() {
        document
            .entry(chain_id.to_string())
            .or_default()
            .insert(version.to_string(), ChainConfigDto::from(config));
    }
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const VERSIONED_DOCUMENT: &str = r#"{
        "137": {
            "1.0.0": {
                "contracts": {
                    "atlas": "0xB363f4D32DdB0b43622eA07Ae9145726941272B4",
                    "atlasVerification": "0x621c6970fD9F124230feE35117d318069056819a",
                    "sorter": "0xf8Bd19064A77297A691a29d9a40dF76F32fc86ad",
                    "simulator": "0x82A3460920582968688FD887F21c5F3155A3BBd4",
                    "multicall3": "0xcA11bde05977b3631167028862bE2a173976CA11"
                },
                "eip712Domain": {
                    "name": "AtlasVerification",
                    "version": "1.0",
                    "chainId": 137,
                    "verifyingContract": "0x621c6970fD9F124230feE35117d318069056819a"
                }
            }
        }
    }"#;

    const LEGACY_DOCUMENT: &str = r#"{
        "11155111": {
            "contracts": {
                "atlas": { "address": "0x9EE12d2fed4B43F4Be37F69930CcaD9B65133482" },
                "atlasVerification": { "address": "0xB6F66a1b7cec02324D83c8DEA192818cA23A08B3" },
                "sorter": { "address": "0xFE3c655d4D305Ac7f1c2F6306C79397560Afea0C" },
                "simulator": { "address": "0xc3ab39ebd49D80bc36208545021224BAF6d2Bdb0" },
                "multicall3": { "address": "0xcA11bde05977b3631167028862bE2a173976CA11" }
            },
            "eip712Domain": {
                "name": "AtlasVerification",
                "version": "1.0",
                "chainId": 11155111,
                "verifyingContract": "0xB6F66a1b7cec02324D83c8DEA192818cA23A08B3"
            }
        }
    }"#;

    fn parse(raw: &str) -> Result<ChainConfigTable, LoadError> {
        let document: ChainConfigDocument = serde_json::from_str(raw)?;
        table_from_document(document, "1.0.0")
    }

    #[test]
    fn test_validate_ethereum_address() {
        assert!(validate_ethereum_address("0x742d35Cc6634C0532925a3b844Bc9e7595f1dEaD").is_ok());
        assert!(validate_ethereum_address("0x123").is_err());
        assert!(validate_ethereum_address("742d35Cc6634C0532925a3b844Bc9e7595f1dEaD").is_err());
        assert!(validate_ethereum_address("0xZZ2d35Cc6634C0532925a3b844Bc9e7595f1dEaD").is_err());
    }

    #[test]
    fn test_versioned_document_with_bare_addresses() {
        let table = parse(VERSIONED_DOCUMENT).unwrap();
        let config = table.get(ChainId::new(137), "1.0.0").unwrap();

        assert_eq!(config.contracts.atlas, address!("B363f4D32DdB0b43622eA07Ae9145726941272B4"));
        assert_eq!(config.eip712_domain.chain_id, 137);
        assert!(config.is_complete());
    }

    #[test]
    fn test_legacy_document_is_migrated_under_legacy_version() {
        let table = parse(LEGACY_DOCUMENT).unwrap();

        assert_eq!(table.versions(ChainId::new(11_155_111)), vec!["1.0.0"]);
        let config = table.get(ChainId::new(11_155_111), "1.0.0").unwrap();
        assert_eq!(config.contracts.sorter, address!("FE3c655d4D305Ac7f1c2F6306C79397560Afea0C"));
    }

    #[test]
    fn test_malformed_address_is_fatal_at_load() {
        let raw = VERSIONED_DOCUMENT.replace(
            "0xf8Bd19064A77297A691a29d9a40dF76F32fc86ad",
            "0xf8Bd19064A77297A691a29d9a40dF76F32fc86",
        );

        match parse(&raw).unwrap_err() {
            LoadError::Validation { chain_id, version, errors } => {
                assert_eq!(chain_id, ChainId::new(137));
                assert_eq!(version, "1.0.0");
                assert!(errors.iter().any(|e| e.starts_with("contracts.sorter")));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_address_is_incomplete_at_load() {
        let raw = VERSIONED_DOCUMENT.replace(
            "0x82A3460920582968688FD887F21c5F3155A3BBd4",
            "0x0000000000000000000000000000000000000000",
        );
        assert!(matches!(parse(&raw).unwrap_err(), LoadError::Validation { .. }));
    }

    #[test]
    fn test_missing_domain_field_is_fatal_at_load() {
        let raw = VERSIONED_DOCUMENT.replace("\"name\": \"AtlasVerification\"", "\"name\": \"\"");
        match parse(&raw).unwrap_err() {
            LoadError::Validation { errors, .. } => {
                assert!(errors.iter().any(|e| e.starts_with("eip712Domain.name")));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_numeric_chain_id_key_is_fatal_at_load() {
        let raw = VERSIONED_DOCUMENT.replacen("\"137\"", "\"polygon\"", 1);
        assert!(matches!(parse(&raw).unwrap_err(), LoadError::InvalidChainId(key) if key == "polygon"));
    }

    #[test]
    fn test_patch_document_is_lenient() {
        let raw = r#"{
            "137": {
                "1.0.0": {
                    "contracts": {
                        "sorter": "0x8000000000000000000000000000000000000000",
                        "simulator": "not-an-address"
                    },
                    "eip712Domain": { "name": "Updated Chain" }
                }
            }
        }"#;
        let document: ChainConfigPatchDocument = serde_json::from_str(raw).unwrap();
        let patch = patch_from_document(document, "1.0.0").unwrap();
        let record = patch.get(ChainId::new(137), "1.0.0").unwrap();

        assert_eq!(record.contracts.sorter, address!("8000000000000000000000000000000000000000"));
        assert!(record.contracts.simulator.is_zero());
        assert!(record.contracts.atlas.is_zero());
        assert_eq!(record.eip712_domain.name, "Updated Chain");
        assert!(record.eip712_domain.version.is_empty());
        assert!(!record.is_complete());
    }

    #[test]
    fn test_patch_document_accepts_legacy_layout() {
        let raw = r#"{
            "137": { "contracts": { "atlas": { "address": "0x7000000000000000000000000000000000000000" } } }
        }"#;
        let document: ChainConfigPatchDocument = serde_json::from_str(raw).unwrap();
        let patch = patch_from_document(document, "1.0.0").unwrap();

        assert_eq!(
            patch.get(ChainId::new(137), "1.0.0").unwrap().contracts.atlas,
            address!("7000000000000000000000000000000000000000")
        );
    }

    #[test]
    fn test_patch_document_rejects_misspelled_fields() {
        let contracts_typo = r#"{
            "137": { "1.0.0": { "contracts": { "atlasVerifcation": "0x1111111111111111111111111111111111111111" } } }
        }"#;
        assert!(serde_json::from_str::<ChainConfigPatchDocument>(contracts_typo).is_err());

        let domain_typo = r#"{ "137": { "1.0.0": { "eip712Domain": { "verifyingContact": "0x11" } } } }"#;
        assert!(serde_json::from_str::<ChainConfigPatchDocument>(domain_typo).is_err());

        let legacy_typo = r#"{
            "137": { "contracts": { "multicall": "0x1111111111111111111111111111111111111111" } }
        }"#;
        assert!(serde_json::from_str::<ChainConfigPatchDocument>(legacy_typo).is_err());
    }

    #[test]
    fn test_patch_document_rejects_bad_chain_id_key() {
        let document: ChainConfigPatchDocument = serde_json::from_str(r#"{ "mainnet": {} }"#).unwrap();
        assert!(matches!(
            patch_from_document(document, "1.0.0").unwrap_err(),
            UseCaseError::InvalidPatch(_)
        ));
    }

    #[test]
    fn test_export_reloads_to_same_table() {
        let table = parse(VERSIONED_DOCUMENT).unwrap();
        let exported = serde_json::to_string(&document_from_table(&table)).unwrap();

        assert_eq!(parse(&exported).unwrap(), table);
    }
}
