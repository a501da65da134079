use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};

use crate::shared::http::ApiClient;
use crate::shared::storage::MemoryLocalStorage;

/// Starts an in-process upstream API on a free port and returns its `/api` base URL.
///
/// Must be called from within an actix runtime (`#[actix_web::test]`).
pub fn spawn_upstream<F>(configure: F) -> String
where
    F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
{
    let server = HttpServer::new(move || App::new().configure(configure.clone()))
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .expect("bind test upstream");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}/api")
}

pub fn api_client(base: &str) -> ApiClient {
    ApiClient::new(base, Duration::from_secs(5), Arc::new(MemoryLocalStorage::new()))
        .expect("build test client")
}
