use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::{Experience, ExperienceDraft};
use crate::shared::api::ApiResponse;
use crate::shared::error::ServiceError;
use crate::shared::patch::EntityPatch;
use crate::shared::store::ReorderItem;

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn create_experience(
        &self,
        draft: ExperienceDraft,
    ) -> Result<ApiResponse<Experience>, ServiceError>;

    async fn update_experience(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<ApiResponse<Experience>, ServiceError>;

    async fn delete_experience(&self, id: &str) -> Result<ApiResponse<()>, ServiceError>;

    async fn toggle_visibility(&self, id: &str) -> Result<ApiResponse<Experience>, ServiceError>;

    async fn reorder_experiences(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<Experience>>, ServiceError>;
}
