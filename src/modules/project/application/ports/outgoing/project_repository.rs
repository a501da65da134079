use async_trait::async_trait;

use crate::modules::project::application::domain::entities::{CreateProjectForm, Project};
use crate::shared::api::ApiResponse;
use crate::shared::error::ServiceError;
use crate::shared::patch::EntityPatch;
use crate::shared::store::ReorderItem;

//
// ──────────────────────────────────────────────────────────
// Port (write side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(
        &self,
        form: CreateProjectForm,
    ) -> Result<ApiResponse<Project>, ServiceError>;

    async fn update_project(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<ApiResponse<Project>, ServiceError>;

    async fn delete_project(&self, id: &str) -> Result<ApiResponse<()>, ServiceError>;

    async fn toggle_featured(&self, id: &str) -> Result<ApiResponse<Project>, ServiceError>;

    async fn toggle_visibility(&self, id: &str) -> Result<ApiResponse<Project>, ServiceError>;

    async fn reorder_projects(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<Project>>, ServiceError>;
}
