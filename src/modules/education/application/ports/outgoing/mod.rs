pub mod education_query;
pub mod education_repository;

pub use education_query::EducationQuery;
pub use education_repository::EducationRepository;
