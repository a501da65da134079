use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::data::{new_id, PortfolioFixtures};
use crate::modules::profile::application::domain::entities::{
    Skill, SkillDraft, SocialLink, SocialLinkDraft, TechStack, TechStackDraft, UpdateUserForm,
    User,
};
use crate::modules::profile::application::ports::outgoing::{ProfileQuery, ProfileRepository};
use crate::shared::api::ApiResponse;
use crate::shared::collection::{patched, published};
use crate::shared::error::ServiceError;
use crate::shared::latency::{Latency, MOCK_DELAY_MS};
use crate::shared::patch::EntityPatch;
use crate::shared::store::listing::with_reordered;
use crate::shared::store::ReorderItem;

/// Fixture-backed profile service for local development.
///
/// Writes return a recomputed copy and leave the fixtures as they are.
pub struct ProfileMockService {
    fixtures: Arc<PortfolioFixtures>,
    latency: Latency,
}

impl ProfileMockService {
    pub fn new(fixtures: Arc<PortfolioFixtures>, latency: Latency) -> Self {
        Self { fixtures, latency }
    }

    async fn delay(&self) {
        self.latency.wait(MOCK_DELAY_MS).await;
    }
}

#[async_trait]
impl ProfileQuery for ProfileMockService {
    async fn get_user(&self) -> Result<ApiResponse<User>, ServiceError> {
        self.delay().await;
        Ok(ApiResponse::wrap(self.fixtures.user.clone(), None))
    }

    async fn get_social_links(&self) -> Result<ApiResponse<Vec<SocialLink>>, ServiceError> {
        self.delay().await;
        Ok(ApiResponse::wrap(published(&self.fixtures.social_links), None))
    }

    async fn get_tech_stack(&self) -> Result<ApiResponse<Vec<TechStack>>, ServiceError> {
        self.delay().await;
        Ok(ApiResponse::wrap(published(&self.fixtures.tech_stack), None))
    }

    async fn get_skills(&self) -> Result<ApiResponse<Vec<Skill>>, ServiceError> {
        self.delay().await;
        Ok(ApiResponse::wrap(published(&self.fixtures.skills), None))
    }
}

#[async_trait]
impl ProfileRepository for ProfileMockService {
    async fn update_user(&self, form: UpdateUserForm) -> Result<ApiResponse<User>, ServiceError> {
        self.delay().await;
        let user = self.fixtures.user.apply(&form, Utc::now());
        Ok(ApiResponse::wrap(user, Some("User updated successfully")))
    }

    async fn create_social_link(
        &self,
        draft: SocialLinkDraft,
    ) -> Result<ApiResponse<SocialLink>, ServiceError> {
        self.delay().await;
        let link = draft.into_entity(new_id("social"));
        Ok(ApiResponse::wrap(link, Some("Social link created successfully")))
    }

    async fn update_social_link(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<ApiResponse<SocialLink>, ServiceError> {
        self.delay().await;
        let link = patched(&self.fixtures.social_links, id, &patch, "Social link")?;
        Ok(ApiResponse::wrap(link, Some("Social link updated successfully")))
    }

    async fn delete_social_link(&self, _id: &str) -> Result<ApiResponse<()>, ServiceError> {
        self.delay().await;
        Ok(ApiResponse::wrap((), Some("Social link deleted successfully")))
    }

    async fn reorder_social_links(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<SocialLink>>, ServiceError> {
        self.delay().await;
        let links = with_reordered(&self.fixtures.social_links, &items);
        Ok(ApiResponse::wrap(links, Some("Social links reordered successfully")))
    }

    async fn create_tech_stack(
        &self,
        draft: TechStackDraft,
    ) -> Result<ApiResponse<TechStack>, ServiceError> {
        self.delay().await;
        let tech = draft.into_entity(new_id("tech"));
        Ok(ApiResponse::wrap(tech, Some("Tech stack created successfully")))
    }

    async fn update_tech_stack(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<ApiResponse<TechStack>, ServiceError> {
        self.delay().await;
        let tech = patched(&self.fixtures.tech_stack, id, &patch, "Tech stack")?;
        Ok(ApiResponse::wrap(tech, Some("Tech stack updated successfully")))
    }

    async fn delete_tech_stack(&self, _id: &str) -> Result<ApiResponse<()>, ServiceError> {
        self.delay().await;
        Ok(ApiResponse::wrap((), Some("Tech stack deleted successfully")))
    }

    async fn reorder_tech_stack(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<TechStack>>, ServiceError> {
        self.delay().await;
        let stack = with_reordered(&self.fixtures.tech_stack, &items);
        Ok(ApiResponse::wrap(stack, Some("Tech stack reordered successfully")))
    }

    async fn create_skill(&self, draft: SkillDraft) -> Result<ApiResponse<Skill>, ServiceError> {
        self.delay().await;
        let skill = draft.into_entity(new_id("skill"));
        Ok(ApiResponse::wrap(skill, Some("Skill created successfully")))
    }

    async fn update_skill(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<ApiResponse<Skill>, ServiceError> {
        self.delay().await;
        let skill = patched(&self.fixtures.skills, id, &patch, "Skill")?;
        Ok(ApiResponse::wrap(skill, Some("Skill updated successfully")))
    }

    async fn delete_skill(&self, _id: &str) -> Result<ApiResponse<()>, ServiceError> {
        self.delay().await;
        Ok(ApiResponse::wrap((), Some("Skill deleted successfully")))
    }

    async fn reorder_skills(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<Skill>>, ServiceError> {
        self.delay().await;
        let skills = with_reordered(&self.fixtures.skills, &items);
        Ok(ApiResponse::wrap(skills, Some("Skills reordered successfully")))
    }
}
