use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::data::{new_id, PortfolioFixtures};
use crate::modules::memory::application::domain::entities::{
    Memory, MemoryDraft, MemoryListParams,
};
use crate::modules::memory::application::ports::outgoing::{MemoryQuery, MemoryRepository};
use crate::shared::api::{ApiResponse, PaginatedResponse};
use crate::shared::collection::{find_required, patched, visibility_toggled};
use crate::shared::error::ServiceError;
use crate::shared::latency::{Latency, MOCK_DELAY_MS};
use crate::shared::patch::EntityPatch;
use crate::shared::store::listing::with_reordered;
use crate::shared::store::ReorderItem;

const ENTITY: &str = "Memory";

pub struct MemoryMockService {
    fixtures: Arc<PortfolioFixtures>,
    latency: Latency,
}

impl MemoryMockService {
    pub fn new(fixtures: Arc<PortfolioFixtures>, latency: Latency) -> Self {
        Self { fixtures, latency }
    }

    async fn delay(&self) {
        self.latency.wait(MOCK_DELAY_MS).await;
    }
}

#[async_trait]
impl MemoryQuery for MemoryMockService {
    async fn get_memories(
        &self,
        params: MemoryListParams,
    ) -> Result<PaginatedResponse<Memory>, ServiceError> {
        self.delay().await;
        Ok(params.apply(&self.fixtures.memories))
    }

    async fn get_memory(&self, id: &str) -> Result<ApiResponse<Memory>, ServiceError> {
        self.delay().await;
        let memory = find_required(&self.fixtures.memories, id, ENTITY)?;
        Ok(ApiResponse::wrap(memory, None))
    }
}

#[async_trait]
impl MemoryRepository for MemoryMockService {
    async fn create_memory(&self, draft: MemoryDraft) -> Result<ApiResponse<Memory>, ServiceError> {
        self.delay().await;
        let memory = draft.into_entity(new_id("memory"), Utc::now());
        Ok(ApiResponse::wrap(memory, Some("Memory created successfully")))
    }

    async fn update_memory(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<ApiResponse<Memory>, ServiceError> {
        self.delay().await;
        let mut memory = patched(&self.fixtures.memories, id, &patch, ENTITY)?;
        memory.updated_at = Utc::now();
        Ok(ApiResponse::wrap(memory, Some("Memory updated successfully")))
    }

    async fn delete_memory(&self, _id: &str) -> Result<ApiResponse<()>, ServiceError> {
        self.delay().await;
        Ok(ApiResponse::wrap((), Some("Memory deleted successfully")))
    }

    async fn toggle_featured(&self, id: &str) -> Result<ApiResponse<Memory>, ServiceError> {
        self.delay().await;
        let mut memory = find_required(&self.fixtures.memories, id, ENTITY)?;
        memory.is_featured = !memory.is_featured;
        Ok(ApiResponse::wrap(memory, Some("Memory featured status updated")))
    }

    async fn toggle_visibility(&self, id: &str) -> Result<ApiResponse<Memory>, ServiceError> {
        self.delay().await;
        let memory = visibility_toggled(&self.fixtures.memories, id, ENTITY)?;
        Ok(ApiResponse::wrap(memory, Some("Memory visibility updated")))
    }

    async fn reorder_memories(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<Memory>>, ServiceError> {
        self.delay().await;
        let memories = with_reordered(&self.fixtures.memories, &items);
        Ok(ApiResponse::wrap(memories, Some("Memories reordered successfully")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::memory::application::domain::entities::Mood;

    fn service() -> MemoryMockService {
        MemoryMockService::new(Arc::new(PortfolioFixtures::load().unwrap()), Latency::none())
    }

    #[tokio::test]
    async fn lookup_by_id() {
        let svc = service();

        let err = svc.get_memory("missing-id").await.unwrap_err();
        let found = svc.get_memory("memory-1").await.unwrap();

        assert_eq!(err, ServiceError::not_found(ENTITY, "missing-id"));
        assert!(found.success);
        assert_eq!(found.data.id, "memory-1");
    }

    #[tokio::test]
    async fn tag_filter_is_case_insensitive_substring() {
        let params = MemoryListParams {
            tag: Some("conf".to_string()),
            ..Default::default()
        };

        let page = service().get_memories(params).await.unwrap();

        let ids: Vec<&str> = page.data.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["memory-1"]);
    }

    #[tokio::test]
    async fn filters_and_combine() {
        let svc = service();
        let params = |visible, featured| MemoryListParams {
            visible,
            featured,
            ..Default::default()
        };

        let featured = svc.get_memories(params(None, Some(true))).await.unwrap();
        let featured_visible = svc
            .get_memories(params(Some(true), Some(true)))
            .await
            .unwrap();

        assert_eq!(featured.pagination.total, 2);
        assert_eq!(featured_visible.pagination.total, 1);
    }

    #[tokio::test]
    async fn mood_filter_is_exact() {
        let params = MemoryListParams {
            mood: Some(Mood::Grateful),
            ..Default::default()
        };

        let page = service().get_memories(params).await.unwrap();

        assert!(page.data.iter().all(|m| m.mood == Some(Mood::Grateful)));
        assert_eq!(page.data.len(), 1);
    }
}
