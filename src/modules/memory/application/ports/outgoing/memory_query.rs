use async_trait::async_trait;

use crate::modules::memory::application::domain::entities::{Memory, MemoryListParams};
use crate::shared::api::{ApiResponse, PaginatedResponse};
use crate::shared::error::ServiceError;

#[async_trait]
pub trait MemoryQuery: Send + Sync {
    /// `tag` matches any tag case-insensitively by substring; `mood` must match exactly.
    async fn get_memories(
        &self,
        params: MemoryListParams,
    ) -> Result<PaginatedResponse<Memory>, ServiceError>;

    async fn get_memory(&self, id: &str) -> Result<ApiResponse<Memory>, ServiceError>;
}
