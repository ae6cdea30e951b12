//! Error Types
//!
//! Layered error types: load-time failures, domain rule violations and
//! use case errors returned to callers.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::models::chain_config::ChainId;

/// Domain-level errors representing business rule violations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("full chain configuration must be provided for new chainId: {chain_id} (version {version})")]
    IncompleteNewEntry { chain_id: ChainId, version: String },
}

/// Errors raised while building the registry from its source document.
///
/// The registry is unusable without its configuration, so these are fatal
/// at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read chain config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse chain config document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Invalid chain id key '{0}'")]
    InvalidChainId(String),

    #[error("Invalid chain config for chainId {chain_id}, version {version}: {errors:?}")]
    Validation {
        chain_id: ChainId,
        version: String,
        errors: Vec<String>,
    },
}

/// Use case-level errors returned by registry accessors
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("chain configuration not found for chainId: {chain_id}, version: {version}")]
    NotFound { chain_id: ChainId, version: String },

    #[error("Invalid patch: {0}")]
    InvalidPatch(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl UseCaseError {
    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::InvalidPatch(_) => "INVALID_PATCH",
            Self::Domain(DomainError::IncompleteNewEntry { .. }) => "INCOMPLETE_NEW_ENTRY",
        }
    }
}
