use async_trait::async_trait;

use crate::modules::project::application::domain::entities::{
    CreateProjectForm, Project, ProjectListParams,
};
use crate::modules::project::application::ports::outgoing::{ProjectQuery, ProjectRepository};
use crate::shared::api::{ApiResponse, PaginatedResponse};
use crate::shared::error::ServiceError;
use crate::shared::http::{endpoints, query_pairs, ApiClient, ItemsBody};
use crate::shared::patch::EntityPatch;
use crate::shared::store::ReorderItem;

pub struct ProjectApiService {
    client: ApiClient,
}

impl ProjectApiService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProjectQuery for ProjectApiService {
    async fn get_projects(
        &self,
        params: ProjectListParams,
    ) -> Result<PaginatedResponse<Project>, ServiceError> {
        self.client
            .get(endpoints::PROJECTS, &query_pairs(&params))
            .await
    }

    async fn get_project(&self, id: &str) -> Result<ApiResponse<Project>, ServiceError> {
        self.client
            .get(&endpoints::item(endpoints::PROJECTS, id), &[])
            .await
    }
}

#[async_trait]
impl ProjectRepository for ProjectApiService {
    async fn create_project(
        &self,
        form: CreateProjectForm,
    ) -> Result<ApiResponse<Project>, ServiceError> {
        self.client.post(endpoints::PROJECTS, &form).await
    }

    async fn update_project(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<ApiResponse<Project>, ServiceError> {
        self.client
            .put(&endpoints::item(endpoints::PROJECTS, id), &patch)
            .await
    }

    async fn delete_project(&self, id: &str) -> Result<ApiResponse<()>, ServiceError> {
        self.client
            .delete(&endpoints::item(endpoints::PROJECTS, id))
            .await
    }

    async fn toggle_featured(&self, id: &str) -> Result<ApiResponse<Project>, ServiceError> {
        self.client
            .patch::<(), _>(&endpoints::toggle_featured(endpoints::PROJECTS, id), None)
            .await
    }

    async fn toggle_visibility(&self, id: &str) -> Result<ApiResponse<Project>, ServiceError> {
        self.client
            .patch::<(), _>(&endpoints::toggle_visibility(endpoints::PROJECTS, id), None)
            .await
    }

    async fn reorder_projects(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<Project>>, ServiceError> {
        self.client
            .patch(
                &endpoints::reorder(endpoints::PROJECTS),
                Some(&ItemsBody { items: &items }),
            )
            .await
    }
}
