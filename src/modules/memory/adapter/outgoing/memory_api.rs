use async_trait::async_trait;

use crate::modules::memory::application::domain::entities::{
    Memory, MemoryDraft, MemoryListParams,
};
use crate::modules::memory::application::ports::outgoing::{MemoryQuery, MemoryRepository};
use crate::shared::api::{ApiResponse, PaginatedResponse};
use crate::shared::error::ServiceError;
use crate::shared::http::{endpoints, query_pairs, ApiClient, ItemsBody};
use crate::shared::patch::EntityPatch;
use crate::shared::store::ReorderItem;

pub struct MemoryApiService {
    client: ApiClient,
}

impl MemoryApiService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MemoryQuery for MemoryApiService {
    async fn get_memories(
        &self,
        params: MemoryListParams,
    ) -> Result<PaginatedResponse<Memory>, ServiceError> {
        self.client
            .get(endpoints::MEMORIES, &query_pairs(&params))
            .await
    }

    async fn get_memory(&self, id: &str) -> Result<ApiResponse<Memory>, ServiceError> {
        self.client
            .get(&endpoints::item(endpoints::MEMORIES, id), &[])
            .await
    }
}

#[async_trait]
impl MemoryRepository for MemoryApiService {
    async fn create_memory(&self, draft: MemoryDraft) -> Result<ApiResponse<Memory>, ServiceError> {
        self.client.post(endpoints::MEMORIES, &draft).await
    }

    async fn update_memory(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<ApiResponse<Memory>, ServiceError> {
        self.client
            .put(&endpoints::item(endpoints::MEMORIES, id), &patch)
            .await
    }

    async fn delete_memory(&self, id: &str) -> Result<ApiResponse<()>, ServiceError> {
        self.client
            .delete(&endpoints::item(endpoints::MEMORIES, id))
            .await
    }

    async fn toggle_featured(&self, id: &str) -> Result<ApiResponse<Memory>, ServiceError> {
        self.client
            .patch::<(), _>(&endpoints::toggle_featured(endpoints::MEMORIES, id), None)
            .await
    }

    async fn toggle_visibility(&self, id: &str) -> Result<ApiResponse<Memory>, ServiceError> {
        self.client
            .patch::<(), _>(&endpoints::toggle_visibility(endpoints::MEMORIES, id), None)
            .await
    }

    async fn reorder_memories(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<Memory>>, ServiceError> {
        self.client
            .patch(
                &endpoints::reorder(endpoints::MEMORIES),
                Some(&ItemsBody { items: &items }),
            )
            .await
    }
}
