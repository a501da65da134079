pub mod domain;
pub mod memory_hooks;
pub mod ports;
pub mod store;

pub use memory_hooks::MemoryHooks;
