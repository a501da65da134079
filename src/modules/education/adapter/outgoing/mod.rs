mod education_api;
mod education_mock;
mod education_static;

pub use education_api::EducationApiService;
pub use education_mock::EducationMockService;
pub use education_static::EducationStaticService;
