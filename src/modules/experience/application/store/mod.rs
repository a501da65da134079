pub mod experience_store;

pub use experience_store::{ExperienceStore, ExperienceViews};
