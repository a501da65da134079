use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, PageResponse};
use crate::modules::memory::application::domain::entities::{Memory, MemoryListParams};
use crate::shared::api::page_response;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/memories",
    tag = "memories",
    params(MemoryListParams),
    responses(
        (status = 200, description = "One page of memories", body = inline(PageResponse<Memory>)),
        (status = 400, description = "Unknown mood", body = ErrorResponse),
        (status = 502, description = "Upstream API failed", body = ErrorResponse)
    )
)]
#[get("/api/memories")]
pub async fn get_memories_handler(
    query: web::Query<MemoryListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let params = MemoryListParams {
        visible: Some(true),
        ..query.into_inner()
    };
    page_response(data.memories.use_memories_page(params).await)
}
