use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, PageResponse};
use crate::modules::project::application::domain::entities::{Project, ProjectListParams};
use crate::shared::api::page_response;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    params(ProjectListParams),
    responses(
        (status = 200, description = "One page of projects", body = inline(PageResponse<Project>)),
        (status = 400, description = "Unknown filter value", body = ErrorResponse),
        (status = 502, description = "Upstream API failed", body = ErrorResponse)
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(
    query: web::Query<ProjectListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    // Hidden projects never reach the public listing.
    let params = ProjectListParams {
        visible: Some(true),
        ..query.into_inner()
    };
    page_response(data.projects.use_projects_page(params).await)
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
