//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - In-memory chain config repository
//! - JSON chain config source
//! - Configuration

pub mod chain_config_repository;
pub mod chain_config_source;
pub mod config;

pub use chain_config_repository::InMemoryChainConfigRepository;
pub use chain_config_source::JsonChainConfigSource;
pub use self::config::{AppConfig, RegistryConfig};
