use async_trait::async_trait;

use crate::modules::memory::application::domain::entities::{Memory, MemoryDraft};
use crate::shared::api::ApiResponse;
use crate::shared::error::ServiceError;
use crate::shared::patch::EntityPatch;
use crate::shared::store::ReorderItem;

#[async_trait]
pub trait MemoryRepository: Send + Sync {
    async fn create_memory(&self, draft: MemoryDraft) -> Result<ApiResponse<Memory>, ServiceError>;

    async fn update_memory(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<ApiResponse<Memory>, ServiceError>;

    async fn delete_memory(&self, id: &str) -> Result<ApiResponse<()>, ServiceError>;

    async fn toggle_featured(&self, id: &str) -> Result<ApiResponse<Memory>, ServiceError>;

    async fn toggle_visibility(&self, id: &str) -> Result<ApiResponse<Memory>, ServiceError>;

    async fn reorder_memories(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<Memory>>, ServiceError>;
}
