pub mod api;
pub mod collection;
pub mod error;
pub mod http;
pub mod latency;
pub mod patch;
pub mod query;
pub mod storage;
pub mod store;
