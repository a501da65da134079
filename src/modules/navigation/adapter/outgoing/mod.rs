mod navigation_api;
mod navigation_mock;
mod navigation_static;

pub use navigation_api::NavigationApiService;
pub use navigation_mock::NavigationMockService;
pub use navigation_static::NavigationStaticService;
