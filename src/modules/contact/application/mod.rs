pub mod contact_hooks;
pub mod domain;
pub mod ports;

pub use contact_hooks::ContactHooks;
