use async_trait::async_trait;

use crate::modules::project::application::domain::entities::{Project, ProjectListParams};
use crate::shared::api::{ApiResponse, PaginatedResponse};
use crate::shared::error::ServiceError;

//
// ──────────────────────────────────────────────────────────
// Port (read side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    async fn get_projects(
        &self,
        params: ProjectListParams,
    ) -> Result<PaginatedResponse<Project>, ServiceError>;

    /// Fails with [`ServiceError::NotFound`] when no project has `id`.
    async fn get_project(&self, id: &str) -> Result<ApiResponse<Project>, ServiceError>;
}
