//! Driving Adapters
//!
//! Entry points that drive the application:
//! - The `ConfigRegistry` accessor surface used in-process by the host

pub mod registry;

pub use registry::ConfigRegistry;
