pub mod profile_query;
pub mod profile_repository;

pub use profile_query::ProfileQuery;
pub use profile_repository::ProfileRepository;
