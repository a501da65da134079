pub mod domain;
pub mod navigation_hooks;
pub mod ports;

pub use navigation_hooks::NavigationHooks;
