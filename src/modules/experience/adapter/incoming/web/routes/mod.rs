mod get_experience;
mod get_experiences;

pub use get_experience::*;
pub use get_experiences::*;
