pub mod memory_query;
pub mod memory_repository;

pub use memory_query::MemoryQuery;
pub use memory_repository::MemoryRepository;
