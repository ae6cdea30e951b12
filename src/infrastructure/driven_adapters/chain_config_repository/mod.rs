//! Chain Config Repository Implementations

mod in_memory;

pub use in_memory::InMemoryChainConfigRepository;
