mod get_about_section;
mod get_profile_lists;
mod get_user;

pub use get_about_section::*;
pub use get_profile_lists::*;
pub use get_user::*;
