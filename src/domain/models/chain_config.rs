//! Chain Config Domain Model
//!
//! Contract addresses and EIP-712 signing domain of one Atlas deployment,
//! identified by chain id and contract-suite version.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use alloy_primitives::{Address, U256};
use serde::Serialize;

/// Newtype wrapper for an EVM chain id
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChainId(u64);

impl ChainId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying numeric id
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

impl FromStr for ChainId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Contract roles deployed for every chain and version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractRole {
    Atlas,
    AtlasVerification,
    Sorter,
    Simulator,
    Multicall3,
}

impl ContractRole {
    pub const ALL: [Self; 5] = [
        Self::Atlas,
        Self::AtlasVerification,
        Self::Sorter,
        Self::Simulator,
        Self::Multicall3,
    ];

    /// Key used for this role in chain config documents
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Atlas => "atlas",
            Self::AtlasVerification => "atlasVerification",
            Self::Sorter => "sorter",
            Self::Simulator => "simulator",
            Self::Multicall3 => "multicall3",
        }
    }
}

impl fmt::Display for ContractRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contract addresses of one deployment. `Address::ZERO` means unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Contracts {
    pub atlas: Address,
    pub atlas_verification: Address,
    pub sorter: Address,
    pub simulator: Address,
    pub multicall3: Address,
}

impl Contracts {
    #[must_use]
    pub fn address(&self, role: ContractRole) -> Address {
        match role {
            ContractRole::Atlas => self.atlas,
            ContractRole::AtlasVerification => self.atlas_verification,
            ContractRole::Sorter => self.sorter,
            ContractRole::Simulator => self.simulator,
            ContractRole::Multicall3 => self.multicall3,
        }
    }

    fn address_mut(&mut self, role: ContractRole) -> &mut Address {
        match role {
            ContractRole::Atlas => &mut self.atlas,
            ContractRole::AtlasVerification => &mut self.atlas_verification,
            ContractRole::Sorter => &mut self.sorter,
            ContractRole::Simulator => &mut self.simulator,
            ContractRole::Multicall3 => &mut self.multicall3,
        }
    }

    /// True when every role has a non-zero address
    #[must_use]
    pub fn is_complete(&self) -> bool {
        ContractRole::ALL.iter().all(|role| !self.address(*role).is_zero())
    }

    /// Overwrite every address that is set in `patch`
    pub fn merge_from(&mut self, patch: &Contracts) {
        for role in ContractRole::ALL {
            let provided = patch.address(role);
            if !provided.is_zero() {
                *self.address_mut(role) = provided;
            }
        }
    }
}

/// EIP-712 signing domain fields. Empty strings and a zero chain id mean unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Eip712Domain {
    pub name: String,
    pub version: String,
    pub chain_id: u64,
    pub verifying_contract: String,
}

impl Eip712Domain {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.version.is_empty()
            && self.chain_id != 0
            && !self.verifying_contract.is_empty()
    }

    /// Overwrite every field that is set in `patch`
    pub fn merge_from(&mut self, patch: &Eip712Domain) {
        if !patch.name.is_empty() {
            self.name.clone_from(&patch.name);
        }
        if !patch.version.is_empty() {
            self.version.clone_from(&patch.version);
        }
        if patch.chain_id != 0 {
            self.chain_id = patch.chain_id;
        }
        if !patch.verifying_contract.is_empty() {
            self.verifying_contract.clone_from(&patch.verifying_contract);
        }
    }
}

/// Full configuration of one chain and contract-suite version.
///
/// The same type doubles as a merge patch: fields left at their default
/// value are ignored by [`ChainConfig::merge_from`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ChainConfig {
    pub contracts: Contracts,
    pub eip712_domain: Eip712Domain,
}

impl ChainConfig {
    /// True when every address and every domain field is set
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.contracts.is_complete() && self.eip712_domain.is_complete()
    }

    pub fn merge_from(&mut self, patch: &ChainConfig) {
        self.contracts.merge_from(&patch.contracts);
        self.eip712_domain.merge_from(&patch.eip712_domain);
    }

    #[must_use]
    pub fn typed_data_domain(&self) -> TypedDataDomain {
        TypedDataDomain::from(&self.eip712_domain)
    }
}

/// Typed-data domain in the shape signing libraries consume
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedDataDomain {
    pub name: String,
    pub version: String,
    pub chain_id: U256,
    pub verifying_contract: String,
}

impl From<&Eip712Domain> for TypedDataDomain {
    fn from(domain: &Eip712Domain) -> Self {
        Self {
            name: domain.name.clone(),
            version: domain.version.clone(),
            chain_id: U256::from(domain.chain_id),
            verifying_contract: domain.verifying_contract.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    fn create_test_config() -> ChainConfig {
        ChainConfig {
            contracts: Contracts {
                atlas: address!("B363f4D32DdB0b43622eA07Ae9145726941272B4"),
                atlas_verification: address!("621c6970fD9F124230feE35117d318069056819a"),
                sorter: address!("f8Bd19064A77297A691a29d9a40dF76F32fc86ad"),
                simulator: address!("82A3460920582968688FD887F21c5F3155A3BBd4"),
                multicall3: address!("cA11bde05977b3631167028862bE2a173976CA11"),
            },
            eip712_domain: Eip712Domain {
                name: "AtlasVerification".to_string(),
                version: "1.0".to_string(),
                chain_id: 137,
                verifying_contract: "0x621c6970fD9F124230feE35117d318069056819a".to_string(),
            },
        }
    }

    #[test]
    fn test_chain_id_parse_and_display() {
        let id: ChainId = "11155111".parse().unwrap();
        assert_eq!(id, ChainId::new(11_155_111));
        assert_eq!(id.to_string(), "11155111");
        assert!("sepolia".parse::<ChainId>().is_err());
        assert!("-1".parse::<ChainId>().is_err());
    }

    #[test]
    fn test_complete_config() {
        assert!(create_test_config().is_complete());
        assert!(!ChainConfig::default().is_complete());
    }

    #[test]
    fn test_single_unset_field_makes_config_incomplete() {
        let mut config = create_test_config();
        config.contracts.multicall3 = Address::ZERO;
        assert!(!config.is_complete());

        let mut config = create_test_config();
        config.eip712_domain.chain_id = 0;
        assert!(!config.is_complete());

        let mut config = create_test_config();
        config.eip712_domain.verifying_contract.clear();
        assert!(!config.is_complete());
    }

    #[test]
    fn test_merge_overwrites_only_set_fields() {
        let mut config = create_test_config();
        let patch = ChainConfig {
            contracts: Contracts {
                sorter: address!("8000000000000000000000000000000000000000"),
                ..Default::default()
            },
            eip712_domain: Eip712Domain {
                name: "Updated Chain".to_string(),
                ..Default::default()
            },
        };

        config.merge_from(&patch);

        let original = create_test_config();
        assert_eq!(config.contracts.sorter, address!("8000000000000000000000000000000000000000"));
        assert_eq!(config.contracts.atlas, original.contracts.atlas);
        assert_eq!(config.contracts.atlas_verification, original.contracts.atlas_verification);
        assert_eq!(config.contracts.simulator, original.contracts.simulator);
        assert_eq!(config.contracts.multicall3, original.contracts.multicall3);
        assert_eq!(config.eip712_domain.name, "Updated Chain");
        assert_eq!(config.eip712_domain.version, original.eip712_domain.version);
        assert_eq!(config.eip712_domain.chain_id, 137);
    }

    #[test]
    fn test_merge_with_empty_patch_is_noop() {
        let mut config = create_test_config();
        config.merge_from(&ChainConfig::default());
        assert_eq!(config, create_test_config());
    }

    #[test]
    fn test_contract_address_by_role() {
        let config = create_test_config();
        assert_eq!(config.contracts.address(ContractRole::Atlas), config.contracts.atlas);
        assert_eq!(config.contracts.address(ContractRole::Multicall3), config.contracts.multicall3);
        assert_eq!(ContractRole::AtlasVerification.to_string(), "atlasVerification");
    }

    #[test]
    fn test_typed_data_domain_widens_chain_id() {
        let domain = create_test_config().typed_data_domain();
        assert_eq!(domain.name, "AtlasVerification");
        assert_eq!(domain.chain_id, U256::from(137u64));
        assert_eq!(domain.verifying_contract, "0x621c6970fD9F124230feE35117d318069056819a");
    }
}
