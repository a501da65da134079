pub mod api_client;

pub use api_client::{endpoints, query_pairs, ApiClient, ItemsBody};
