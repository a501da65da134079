pub mod contact_query;
pub mod contact_repository;

pub use contact_query::ContactQuery;
pub use contact_repository::ContactRepository;
