pub mod app;
pub mod contact;
pub mod education;
pub mod experience;
pub mod media;
pub mod memory;
pub mod navigation;
pub mod profile;
pub mod project;
