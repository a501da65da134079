use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, PageResponse};
use crate::modules::experience::application::domain::entities::{
    Experience, ExperienceListParams,
};
use crate::shared::api::page_response;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/experiences",
    tag = "experience",
    params(ExperienceListParams),
    responses(
        (status = 200, description = "One page of work history", body = inline(PageResponse<Experience>)),
        (status = 400, description = "Unknown employment type", body = ErrorResponse),
        (status = 502, description = "Upstream API failed", body = ErrorResponse)
    )
)]
#[get("/api/experiences")]
pub async fn get_experiences_handler(
    query: web::Query<ExperienceListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let params = ExperienceListParams {
        visible: Some(true),
        ..query.into_inner()
    };
    page_response(data.experiences.use_experiences_page(params).await)
}
