//! Infrastructure Layer
//!
//! Contains all external concerns: driving adapters (the registry facade) and
//! driven adapters (repository, document source, settings).

pub mod driven_adapters;
pub mod driving_adapters;
