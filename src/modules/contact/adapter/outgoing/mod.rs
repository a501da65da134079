mod contact_api;
mod contact_mock;

pub use contact_api::ContactApiService;
pub use contact_mock::ContactMockService;
