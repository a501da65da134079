use async_trait::async_trait;

use crate::modules::education::application::domain::entities::{Education, EducationDraft};
use crate::shared::api::ApiResponse;
use crate::shared::error::ServiceError;
use crate::shared::patch::EntityPatch;
use crate::shared::store::ReorderItem;

#[async_trait]
pub trait EducationRepository: Send + Sync {
    async fn create_education(
        &self,
        draft: EducationDraft,
    ) -> Result<ApiResponse<Education>, ServiceError>;

    async fn update_education(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<ApiResponse<Education>, ServiceError>;

    async fn delete_education(&self, id: &str) -> Result<ApiResponse<()>, ServiceError>;

    async fn toggle_visibility(&self, id: &str) -> Result<ApiResponse<Education>, ServiceError>;

    async fn reorder_education(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<Education>>, ServiceError>;
}
