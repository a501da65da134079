pub mod education_store;

pub use education_store::{EducationStore, EducationViews};
