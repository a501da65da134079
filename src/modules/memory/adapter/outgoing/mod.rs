mod memory_api;
mod memory_mock;
mod memory_static;

pub use memory_api::MemoryApiService;
pub use memory_mock::MemoryMockService;
pub use memory_static::MemoryStaticService;
