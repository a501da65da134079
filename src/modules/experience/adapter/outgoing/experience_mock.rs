use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::data::{new_id, PortfolioFixtures};
use crate::modules::experience::application::domain::entities::{
    Experience, ExperienceDraft, ExperienceListParams,
};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceQuery, ExperienceRepository,
};
use crate::shared::api::{ApiResponse, PaginatedResponse};
use crate::shared::collection::{find_required, patched, visibility_toggled};
use crate::shared::error::ServiceError;
use crate::shared::latency::{Latency, MOCK_DELAY_MS};
use crate::shared::patch::EntityPatch;
use crate::shared::store::listing::with_reordered;
use crate::shared::store::ReorderItem;

const ENTITY: &str = "Experience";

pub struct ExperienceMockService {
    fixtures: Arc<PortfolioFixtures>,
    latency: Latency,
}

impl ExperienceMockService {
    pub fn new(fixtures: Arc<PortfolioFixtures>, latency: Latency) -> Self {
        Self { fixtures, latency }
    }

    async fn delay(&self) {
        self.latency.wait(MOCK_DELAY_MS).await;
    }
}

#[async_trait]
impl ExperienceQuery for ExperienceMockService {
    async fn get_experiences(
        &self,
        params: ExperienceListParams,
    ) -> Result<PaginatedResponse<Experience>, ServiceError> {
        self.delay().await;
        Ok(params.apply(&self.fixtures.experiences))
    }

    async fn get_experience(&self, id: &str) -> Result<ApiResponse<Experience>, ServiceError> {
        self.delay().await;
        let experience = find_required(&self.fixtures.experiences, id, ENTITY)?;
        Ok(ApiResponse::wrap(experience, None))
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceMockService {
    async fn create_experience(
        &self,
        draft: ExperienceDraft,
    ) -> Result<ApiResponse<Experience>, ServiceError> {
        self.delay().await;
        let experience = draft.into_entity(new_id("exp"), Utc::now());
        Ok(ApiResponse::wrap(
            experience,
            Some("Experience created successfully"),
        ))
    }

    async fn update_experience(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<ApiResponse<Experience>, ServiceError> {
        self.delay().await;
        let mut experience = patched(&self.fixtures.experiences, id, &patch, ENTITY)?;
        experience.updated_at = Utc::now();
        Ok(ApiResponse::wrap(
            experience,
            Some("Experience updated successfully"),
        ))
    }

    async fn delete_experience(&self, _id: &str) -> Result<ApiResponse<()>, ServiceError> {
        self.delay().await;
        Ok(ApiResponse::wrap((), Some("Experience deleted successfully")))
    }

    async fn toggle_visibility(&self, id: &str) -> Result<ApiResponse<Experience>, ServiceError> {
        self.delay().await;
        let experience = visibility_toggled(&self.fixtures.experiences, id, ENTITY)?;
        Ok(ApiResponse::wrap(experience, Some("Experience visibility updated")))
    }

    async fn reorder_experiences(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<Experience>>, ServiceError> {
        self.delay().await;
        let experiences = with_reordered(&self.fixtures.experiences, &items);
        Ok(ApiResponse::wrap(
            experiences,
            Some("Experiences reordered successfully"),
        ))
    }
}
