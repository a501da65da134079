use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::experience::application::domain::entities::Experience;
use crate::shared::api::visible_item_response;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/experiences/{id}",
    tag = "experience",
    params(("id" = String, Path, description = "Experience id")),
    responses(
        (status = 200, description = "Experience found", body = inline(SuccessResponse<Experience>)),
        (status = 404, description = "No experience with this id", body = ErrorResponse)
    )
)]
#[get("/api/experiences/{id}")]
pub async fn get_experience_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    visible_item_response(data.experiences.use_experience(&id).await, "Experience", &id)
}
