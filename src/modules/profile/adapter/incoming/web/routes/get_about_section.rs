use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::profile::application::domain::entities::{Skill, TechIcon, TechStack, User};
use crate::shared::api::{service_error_response, ApiResponse};
use crate::AppState;

/// A technology with its icon identifier already resolved.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TechStackCard {
    #[serde(flatten)]
    pub tech: TechStack,
    pub icon: TechIcon,
}

impl From<TechStack> for TechStackCard {
    fn from(tech: TechStack) -> Self {
        let icon = tech.icon();
        Self { tech, icon }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AboutSection {
    pub user: User,
    pub tech_stack: Vec<TechStackCard>,
    pub skills: Vec<Skill>,
}

#[utoipa::path(
    get,
    path = "/api/sections/about",
    tag = "sections",
    responses(
        (status = 200, description = "Profile, tech stack and skills", body = inline(SuccessResponse<AboutSection>)),
        (status = 502, description = "Upstream API failed", body = ErrorResponse)
    )
)]
#[get("/api/sections/about")]
pub async fn get_about_section_handler(data: web::Data<AppState>) -> impl Responder {
    let (user, tech_stack, skills) = futures::join!(
        data.profile.use_user(),
        data.profile.use_tech_stack(),
        data.profile.use_skills(),
    );

    let section = match (user.into_result(), tech_stack.into_result(), skills.into_result()) {
        (Ok(Some(user)), Ok(Some(tech_stack)), Ok(Some(skills))) => AboutSection {
            user,
            tech_stack: tech_stack.into_iter().map(TechStackCard::from).collect(),
            skills,
        },
        (Err(err), _, _) | (_, Err(err), _) | (_, _, Err(err)) => {
            return service_error_response(&err)
        }
        _ => return ApiResponse::internal_error(),
    };

    ApiResponse::success(section)
}
