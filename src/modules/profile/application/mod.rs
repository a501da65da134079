pub mod domain;
pub mod ports;
pub mod profile_hooks;
pub mod store;

pub use profile_hooks::ProfileHooks;
