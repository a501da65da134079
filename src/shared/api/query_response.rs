use actix_web::HttpResponse;
use serde::Serialize;
use tracing::error;

use crate::shared::api::{ApiResponse, PaginatedResponse};
use crate::shared::error::ServiceError;
use crate::shared::query::QueryState;
use crate::shared::store::listing::Listable;

/// Maps a service failure onto the error envelope.
pub fn service_error_response(err: &ServiceError) -> HttpResponse {
    if err.is_not_found() {
        return ApiResponse::not_found("NOT_FOUND", &err.to_string());
    }

    match err {
        ServiceError::InvalidPatch(message) => {
            ApiResponse::bad_request("VALIDATION_ERROR", message)
        }
        _ => {
            error!(error = %err, "upstream request failed");
            ApiResponse::bad_gateway("UPSTREAM_ERROR", &err.to_string())
        }
    }
}

/// `200` with the query's data, or the mapped error.
pub fn query_response<T: Serialize>(state: QueryState<T>) -> HttpResponse {
    match state.into_result() {
        Ok(Some(data)) => ApiResponse::success(data),
        Ok(None) => ApiResponse::internal_error(),
        Err(err) => service_error_response(&err),
    }
}

/// Like [`query_response`], but a hidden item answers `404` as if it were absent.
pub fn visible_item_response<T: Listable + Serialize>(
    state: QueryState<T>,
    entity: &'static str,
    id: &str,
) -> HttpResponse {
    match state.into_result() {
        Ok(Some(item)) if item.is_visible() => ApiResponse::success(item),
        Ok(Some(_)) => service_error_response(&ServiceError::not_found(entity, id)),
        Ok(None) => ApiResponse::internal_error(),
        Err(err) => service_error_response(&err),
    }
}

/// Like [`query_response`] but keeps the pagination block.
pub fn page_response<T: Serialize>(state: QueryState<PaginatedResponse<T>>) -> HttpResponse {
    match state.into_result() {
        Ok(Some(page)) => page.ok(),
        Ok(None) => ApiResponse::internal_error(),
        Err(err) => service_error_response(&err),
    }
}
