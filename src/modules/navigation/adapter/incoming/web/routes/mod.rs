mod get_navigation;
mod get_settings;

pub use get_navigation::*;
pub use get_settings::*;
