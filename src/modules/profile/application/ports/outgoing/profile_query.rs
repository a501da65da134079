use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::{Skill, SocialLink, TechStack, User};
use crate::shared::api::ApiResponse;
use crate::shared::error::ServiceError;

//
// ──────────────────────────────────────────────────────────
// Port (read side)
// ──────────────────────────────────────────────────────────
//

/// Profile reads. List reads return visible items only, in display order.
#[async_trait]
pub trait ProfileQuery: Send + Sync {
    async fn get_user(&self) -> Result<ApiResponse<User>, ServiceError>;

    async fn get_social_links(&self) -> Result<ApiResponse<Vec<SocialLink>>, ServiceError>;

    async fn get_tech_stack(&self) -> Result<ApiResponse<Vec<TechStack>>, ServiceError>;

    async fn get_skills(&self) -> Result<ApiResponse<Vec<Skill>>, ServiceError>;
}
