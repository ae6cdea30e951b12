//! Common test utilities for e2e tests
//!
//! Provides registry fixtures, on-disk documents and tracing setup.

#![allow(dead_code)]

use std::io::Write;

use alloy_primitives::Address;
use tempfile::NamedTempFile;
use tracing_subscriber::EnvFilter;

use atlas_chain_config::{ChainConfig, ConfigRegistry, Contracts, Eip712Domain, RegistryConfig};

/// Sepolia record in the legacy unversioned layout with `{ "address": .. }` entries
pub const LEGACY_DOCUMENT: &str = r#"{
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

/// Install a tracing subscriber writing to the test harness (once per binary)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Registry over the embedded document with default settings
pub fn embedded_registry() -> ConfigRegistry {
    init_tracing();
    ConfigRegistry::embedded().expect("Failed to load embedded chain config")
}

/// Registry over the embedded document with `version` as its default
pub fn embedded_registry_with_default(version: &str) -> ConfigRegistry {
    init_tracing();
    let settings = RegistryConfig {
        default_version: version.to_string(),
        ..RegistryConfig::default()
    };
    ConfigRegistry::from_settings(&settings).expect("Failed to load embedded chain config")
}

/// Write `contents` to a temporary file kept alive by the returned handle
pub fn write_document(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// Complete record whose addresses are derived from `seed`
pub fn complete_config(seed: u8, chain_id: u64) -> ChainConfig {
    let addr = |offset: u8| Address::repeat_byte(seed.wrapping_add(offset));
    ChainConfig {
        contracts: Contracts {
            atlas: addr(0),
            atlas_verification: addr(1),
            sorter: addr(2),
            simulator: addr(3),
            multicall3: addr(4),
        },
        eip712_domain: Eip712Domain {
            name: "AtlasVerification".to_string(),
            version: "1.0".to_string(),
            chain_id,
            verifying_contract: addr(1).to_checksum(None),
        },
    }
}
