use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::profile::application::domain::entities::{Skill, SocialLink, TechStack};
use crate::shared::api::query_response;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/user/social-links",
    tag = "profile",
    responses(
        (status = 200, description = "Visible social links in display order", body = inline(SuccessResponse<Vec<SocialLink>>)),
        (status = 502, description = "Upstream API failed", body = ErrorResponse)
    )
)]
#[get("/api/user/social-links")]
pub async fn get_social_links_handler(data: web::Data<AppState>) -> impl Responder {
    query_response(data.profile.use_social_links().await)
}

#[utoipa::path(
    get,
    path = "/api/user/tech-stack",
    tag = "profile",
    responses(
        (status = 200, description = "Visible technologies in display order", body = inline(SuccessResponse<Vec<TechStack>>)),
        (status = 502, description = "Upstream API failed", body = ErrorResponse)
    )
)]
#[get("/api/user/tech-stack")]
pub async fn get_tech_stack_handler(data: web::Data<AppState>) -> impl Responder {
    query_response(data.profile.use_tech_stack().await)
}

#[utoipa::path(
    get,
    path = "/api/user/skills",
    tag = "profile",
    responses(
        (status = 200, description = "Visible skills in display order", body = inline(SuccessResponse<Vec<Skill>>)),
        (status = 502, description = "Upstream API failed", body = ErrorResponse)
    )
)]
#[get("/api/user/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    query_response(data.profile.use_skills().await)
}
