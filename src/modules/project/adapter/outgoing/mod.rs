mod project_api;
mod project_mock;
mod project_static;

pub use project_api::ProjectApiService;
pub use project_mock::ProjectMockService;
pub use project_static::ProjectStaticService;
