pub mod domain;
pub mod education_hooks;
pub mod ports;
pub mod store;

pub use education_hooks::EducationHooks;
