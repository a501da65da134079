pub mod json_config;
pub mod query_response;
pub mod response;

pub use query_response::{
    page_response, query_response, service_error_response, visible_item_response,
};
pub use response::{ApiResponse, PaginatedResponse, Pagination};
