use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::memory::application::domain::entities::Memory;
use crate::shared::api::visible_item_response;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/memories/{id}",
    tag = "memories",
    params(("id" = String, Path, description = "Memory id")),
    responses(
        (status = 200, description = "Memory found", body = inline(SuccessResponse<Memory>)),
        (status = 404, description = "No memory with this id", body = ErrorResponse)
    )
)]
#[get("/api/memories/{id}")]
pub async fn get_memory_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    visible_item_response(data.memories.use_memory(&id).await, "Memory", &id)
}
