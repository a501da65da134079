mod media_api;
mod media_mock;

pub use media_api::MediaApiService;
pub use media_mock::MediaMockService;
