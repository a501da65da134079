use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    services: &'static str,
    upstream: &'static str,
}

/// LIVENESS CHECK
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS CHECK
/// - Reads the portfolio settings through whichever services were selected
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    let upstream = match data.navigation.use_settings().await.error {
        None => "ok",
        Some(_) => "unhealthy",
    };

    let body = ReadinessResponse {
        status: upstream,
        services: data.service_mode,
        upstream,
    };

    if upstream == "ok" {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
