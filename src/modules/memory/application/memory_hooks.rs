use std::sync::Arc;

use crate::modules::memory::application::domain::entities::{
    Memory, MemoryDraft, MemoryListParams,
};
use crate::modules::memory::application::ports::outgoing::{MemoryQuery, MemoryRepository};
use crate::shared::api::{ApiResponse, PaginatedResponse};
use crate::shared::error::ServiceError;
use crate::shared::patch::EntityPatch;
use crate::shared::query::{QueryCache, QueryKey, QueryState};
use crate::shared::store::ReorderItem;

pub mod keys {
    use crate::modules::memory::application::domain::entities::MemoryListParams;
    use crate::shared::query::QueryKey;

    pub fn all() -> QueryKey {
        QueryKey::new(&["memories"])
    }

    pub fn list(params: &MemoryListParams) -> QueryKey {
        all().with_params(params)
    }

    pub fn detail(id: &str) -> QueryKey {
        all().with_segment(id)
    }
}

pub struct MemoryHooks {
    query: Arc<dyn MemoryQuery + Send + Sync>,
    repository: Arc<dyn MemoryRepository + Send + Sync>,
    pages: QueryCache<PaginatedResponse<Memory>>,
    details: QueryCache<Memory>,
}

impl MemoryHooks {
    pub fn new(
        query: Arc<dyn MemoryQuery + Send + Sync>,
        repository: Arc<dyn MemoryRepository + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            pages: QueryCache::new("memories"),
            details: QueryCache::new("memory"),
        }
    }

    pub async fn use_memories_page(
        &self,
        params: MemoryListParams,
    ) -> QueryState<PaginatedResponse<Memory>> {
        let query = Arc::clone(&self.query);
        let key = keys::list(&params);
        let result = self
            .pages
            .fetch(key, move || async move { query.get_memories(params).await })
            .await;
        QueryState::settled(result)
    }

    pub async fn use_memories(&self, params: MemoryListParams) -> QueryState<Vec<Memory>> {
        self.use_memories_page(params).await.map(|page| page.data)
    }

    pub async fn use_memory(&self, id: &str) -> QueryState<Memory> {
        let query = Arc::clone(&self.query);
        let owned = id.to_string();
        let result = self
            .details
            .fetch(keys::detail(id), move || async move {
                query.get_memory(&owned).await.map(|r| r.data)
            })
            .await;
        QueryState::settled(result)
    }

    pub async fn create_memory(&self, draft: MemoryDraft) -> Result<ApiResponse<Memory>, ServiceError> {
        let resp = self.repository.create_memory(draft).await?;
        self.invalidate_all();
        Ok(resp)
    }

    pub async fn update_memory(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<ApiResponse<Memory>, ServiceError> {
        let resp = self.repository.update_memory(id, patch).await?;
        self.invalidate_all();
        Ok(resp)
    }

    pub async fn delete_memory(&self, id: &str) -> Result<ApiResponse<()>, ServiceError> {
        let resp = self.repository.delete_memory(id).await?;
        self.invalidate_all();
        Ok(resp)
    }

    pub async fn toggle_featured(&self, id: &str) -> Result<ApiResponse<Memory>, ServiceError> {
        let resp = self.repository.toggle_featured(id).await?;
        self.invalidate_all();
        Ok(resp)
    }

    pub async fn toggle_visibility(&self, id: &str) -> Result<ApiResponse<Memory>, ServiceError> {
        let resp = self.repository.toggle_visibility(id).await?;
        self.invalidate_all();
        Ok(resp)
    }

    pub async fn reorder_memories(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<Memory>>, ServiceError> {
        let resp = self.repository.reorder_memories(items).await?;
        self.invalidate_all();
        Ok(resp)
    }

    fn invalidate_all(&self) {
        let prefix = keys::all();
        self.pages.invalidate(&prefix);
        self.details.invalidate(&prefix);
    }
}
