pub mod navigation_query;
pub mod navigation_repository;

pub use navigation_query::NavigationQuery;
pub use navigation_repository::NavigationRepository;
