use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::{
    Skill, SkillDraft, SocialLink, SocialLinkDraft, TechStack, TechStackDraft, UpdateUserForm,
    User,
};
use crate::shared::api::ApiResponse;
use crate::shared::error::ServiceError;
use crate::shared::patch::EntityPatch;
use crate::shared::store::ReorderItem;

//
// ──────────────────────────────────────────────────────────
// Port (write side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn update_user(&self, form: UpdateUserForm) -> Result<ApiResponse<User>, ServiceError>;

    // Social links
    async fn create_social_link(
        &self,
        draft: SocialLinkDraft,
    ) -> Result<ApiResponse<SocialLink>, ServiceError>;

    async fn update_social_link(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<ApiResponse<SocialLink>, ServiceError>;

    async fn delete_social_link(&self, id: &str) -> Result<ApiResponse<()>, ServiceError>;

    async fn reorder_social_links(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<SocialLink>>, ServiceError>;

    // Tech stack
    async fn create_tech_stack(
        &self,
        draft: TechStackDraft,
    ) -> Result<ApiResponse<TechStack>, ServiceError>;

    async fn update_tech_stack(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<ApiResponse<TechStack>, ServiceError>;

    async fn delete_tech_stack(&self, id: &str) -> Result<ApiResponse<()>, ServiceError>;

    async fn reorder_tech_stack(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<TechStack>>, ServiceError>;

    // Skills
    async fn create_skill(&self, draft: SkillDraft) -> Result<ApiResponse<Skill>, ServiceError>;

    async fn update_skill(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<ApiResponse<Skill>, ServiceError>;

    async fn delete_skill(&self, id: &str) -> Result<ApiResponse<()>, ServiceError>;

    async fn reorder_skills(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<Skill>>, ServiceError>;
}
