mod experience_api;
mod experience_mock;
mod experience_static;

pub use experience_api::ExperienceApiService;
pub use experience_mock::ExperienceMockService;
pub use experience_static::ExperienceStaticService;
