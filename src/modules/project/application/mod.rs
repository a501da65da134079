pub mod domain;
pub mod ports;
pub mod project_hooks;
pub mod store;

pub use project_hooks::ProjectHooks;
