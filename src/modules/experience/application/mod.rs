pub mod domain;
pub mod experience_hooks;
pub mod ports;
pub mod store;

pub use experience_hooks::ExperienceHooks;
