mod get_project;
mod get_projects;

pub use get_project::*;
pub use get_projects::*;
