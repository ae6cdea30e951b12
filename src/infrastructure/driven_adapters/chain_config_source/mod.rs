//! Chain Config Source Implementations

pub mod document;
mod json;

pub use json::{JsonChainConfigSource, EMBEDDED_CHAIN_CONFIG};
