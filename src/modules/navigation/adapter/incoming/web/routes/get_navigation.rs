use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::navigation::application::domain::entities::NavigationItem;
use crate::shared::api::query_response;
use crate::AppState;

/// Visible menu entries, ascending by order.
#[utoipa::path(
    get,
    path = "/api/navigation",
    tag = "navigation",
    responses(
        (status = 200, description = "Menu entries", body = inline(SuccessResponse<Vec<NavigationItem>>)),
        (status = 502, description = "Upstream API failed", body = ErrorResponse)
    )
)]
#[get("/api/navigation")]
pub async fn get_navigation_handler(data: web::Data<AppState>) -> impl Responder {
    query_response(data.navigation.use_navigation().await)
}
