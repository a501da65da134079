mod profile_api;
mod profile_mock;
mod profile_static;

pub use profile_api::ProfileApiService;
pub use profile_mock::ProfileMockService;
pub use profile_static::ProfileStaticService;
