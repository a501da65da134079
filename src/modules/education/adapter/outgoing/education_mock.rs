use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::data::{new_id, PortfolioFixtures};
use crate::modules::education::application::domain::entities::{
    Education, EducationDraft, EducationListParams,
};
use crate::modules::education::application::ports::outgoing::{
    EducationQuery, EducationRepository,
};
use crate::shared::api::{ApiResponse, PaginatedResponse};
use crate::shared::collection::{find_required, patched, visibility_toggled};
use crate::shared::error::ServiceError;
use crate::shared::latency::{Latency, MOCK_DELAY_MS};
use crate::shared::patch::EntityPatch;
use crate::shared::store::listing::with_reordered;
use crate::shared::store::ReorderItem;

const ENTITY: &str = "Education";

pub struct EducationMockService {
    fixtures: Arc<PortfolioFixtures>,
    latency: Latency,
}

impl EducationMockService {
    pub fn new(fixtures: Arc<PortfolioFixtures>, latency: Latency) -> Self {
        Self { fixtures, latency }
    }

    async fn delay(&self) {
        self.latency.wait(MOCK_DELAY_MS).await;
    }
}

#[async_trait]
impl EducationQuery for EducationMockService {
    async fn get_education(
        &self,
        params: EducationListParams,
    ) -> Result<PaginatedResponse<Education>, ServiceError> {
        self.delay().await;
        Ok(params.apply(&self.fixtures.education))
    }

    async fn get_education_by_id(&self, id: &str) -> Result<ApiResponse<Education>, ServiceError> {
        self.delay().await;
        let education = find_required(&self.fixtures.education, id, ENTITY)?;
        Ok(ApiResponse::wrap(education, None))
    }
}

#[async_trait]
impl EducationRepository for EducationMockService {
    async fn create_education(
        &self,
        draft: EducationDraft,
    ) -> Result<ApiResponse<Education>, ServiceError> {
        self.delay().await;
        let education = draft.into_entity(new_id("edu"), Utc::now());
        Ok(ApiResponse::wrap(education, Some("Education created successfully")))
    }

    async fn update_education(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<ApiResponse<Education>, ServiceError> {
        self.delay().await;
        let mut education = patched(&self.fixtures.education, id, &patch, ENTITY)?;
        education.updated_at = Utc::now();
        Ok(ApiResponse::wrap(education, Some("Education updated successfully")))
    }

    async fn delete_education(&self, _id: &str) -> Result<ApiResponse<()>, ServiceError> {
        self.delay().await;
        Ok(ApiResponse::wrap((), Some("Education deleted successfully")))
    }

    async fn toggle_visibility(&self, id: &str) -> Result<ApiResponse<Education>, ServiceError> {
        self.delay().await;
        let education = visibility_toggled(&self.fixtures.education, id, ENTITY)?;
        Ok(ApiResponse::wrap(education, Some("Education visibility updated")))
    }

    async fn reorder_education(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<Education>>, ServiceError> {
        self.delay().await;
        let education = with_reordered(&self.fixtures.education, &items);
        Ok(ApiResponse::wrap(education, Some("Education reordered successfully")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> EducationMockService {
        EducationMockService::new(Arc::new(PortfolioFixtures::load().unwrap()), Latency::none())
    }

    #[tokio::test]
    async fn reorder_swaps_positions() {
        let items = vec![
            ReorderItem { id: "edu-1".to_string(), order: 2 },
            ReorderItem { id: "edu-2".to_string(), order: 1 },
        ];

        let resp = service().reorder_education(items).await.unwrap();

        let ids: Vec<&str> = resp.data.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["edu-2", "edu-1"]);
    }

    #[tokio::test]
    async fn certificates_survive_fixture_load() {
        let edu = service().get_education_by_id("edu-1").await.unwrap().data;

        assert!(!edu.certificates().is_empty());
        assert!(edu.is_current_study);
    }
}
