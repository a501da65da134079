use std::sync::Arc;

use crate::modules::project::application::domain::entities::{
    CreateProjectForm, Project, ProjectListParams,
};
use crate::modules::project::application::ports::outgoing::{ProjectQuery, ProjectRepository};
use crate::shared::api::{ApiResponse, PaginatedResponse};
use crate::shared::error::ServiceError;
use crate::shared::patch::EntityPatch;
use crate::shared::query::{QueryCache, QueryKey, QueryState};
use crate::shared::store::ReorderItem;

pub mod keys {
    use crate::modules::project::application::domain::entities::ProjectListParams;
    use crate::shared::query::QueryKey;

    pub fn all() -> QueryKey {
        QueryKey::new(&["projects"])
    }

    pub fn list(params: &ProjectListParams) -> QueryKey {
        all().with_params(params)
    }

    pub fn detail(id: &str) -> QueryKey {
        all().with_segment(id)
    }
}

pub struct ProjectHooks {
    query: Arc<dyn ProjectQuery + Send + Sync>,
    repository: Arc<dyn ProjectRepository + Send + Sync>,
    pages: QueryCache<PaginatedResponse<Project>>,
    details: QueryCache<Project>,
}

impl ProjectHooks {
    pub fn new(
        query: Arc<dyn ProjectQuery + Send + Sync>,
        repository: Arc<dyn ProjectRepository + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            pages: QueryCache::new("projects"),
            details: QueryCache::new("project"),
        }
    }

    pub async fn use_projects_page(
        &self,
        params: ProjectListParams,
    ) -> QueryState<PaginatedResponse<Project>> {
        let query = Arc::clone(&self.query);
        let key = keys::list(&params);
        let result = self
            .pages
            .fetch(key, move || async move { query.get_projects(params).await })
            .await;
        QueryState::settled(result)
    }

    pub async fn use_projects(&self, params: ProjectListParams) -> QueryState<Vec<Project>> {
        self.use_projects_page(params).await.map(|page| page.data)
    }

    pub async fn use_project(&self, id: &str) -> QueryState<Project> {
        let query = Arc::clone(&self.query);
        let owned = id.to_string();
        let result = self
            .details
            .fetch(keys::detail(id), move || async move {
                query.get_project(&owned).await.map(|r| r.data)
            })
            .await;
        QueryState::settled(result)
    }

    pub async fn create_project(
        &self,
        form: CreateProjectForm,
    ) -> Result<ApiResponse<Project>, ServiceError> {
        let resp = self.repository.create_project(form).await?;
        self.invalidate_all();
        Ok(resp)
    }

    pub async fn update_project(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<ApiResponse<Project>, ServiceError> {
        let resp = self.repository.update_project(id, patch).await?;
        self.invalidate_all();
        Ok(resp)
    }

    pub async fn delete_project(&self, id: &str) -> Result<ApiResponse<()>, ServiceError> {
        let resp = self.repository.delete_project(id).await?;
        self.invalidate_all();
        Ok(resp)
    }

    pub async fn toggle_featured(&self, id: &str) -> Result<ApiResponse<Project>, ServiceError> {
        let resp = self.repository.toggle_featured(id).await?;
        self.invalidate_all();
        Ok(resp)
    }

    pub async fn toggle_visibility(&self, id: &str) -> Result<ApiResponse<Project>, ServiceError> {
        let resp = self.repository.toggle_visibility(id).await?;
        self.invalidate_all();
        Ok(resp)
    }

    pub async fn reorder_projects(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<Project>>, ServiceError> {
        let resp = self.repository.reorder_projects(items).await?;
        self.invalidate_all();
        Ok(resp)
    }

    fn invalidate_all(&self) {
        let prefix = keys::all();
        self.pages.invalidate(&prefix);
        self.details.invalidate(&prefix);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PortfolioFixtures;
    use crate::modules::project::adapter::outgoing::ProjectMockService;
    use crate::shared::latency::Latency;
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub ProjectQueryMock {}
        #[async_trait]
        impl ProjectQuery for ProjectQueryMock {
            async fn get_projects(&self, params: ProjectListParams) -> Result<PaginatedResponse<Project>, ServiceError>;
            async fn get_project(&self, id: &str) -> Result<ApiResponse<Project>, ServiceError>;
        }
    }

    fn mock_service() -> Arc<ProjectMockService> {
        Arc::new(ProjectMockService::new(
            Arc::new(PortfolioFixtures::load().unwrap()),
            Latency::none(),
        ))
    }

    fn featured() -> ProjectListParams {
        ProjectListParams {
            featured: Some(true),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn equal_params_hit_the_cache() {
        let mut query = MockProjectQueryMock::new();
        query
            .expect_get_projects()
            .with(eq(featured()))
            .times(1)
            .returning(|_| Ok(PaginatedResponse::paginate(Vec::new(), None, None)));
        let hooks = ProjectHooks::new(Arc::new(query), mock_service());

        hooks.use_projects(featured()).await;
        let state = hooks.use_projects(featured()).await;

        assert_eq!(state.data, Some(Vec::new()));
    }

    #[tokio::test]
    async fn different_params_fetch_separately() {
        let service = mock_service();
        let hooks = ProjectHooks::new(service.clone(), service);

        let all = hooks.use_projects(ProjectListParams::default()).await;
        let only_featured = hooks.use_projects(featured()).await;

        assert_eq!(all.data.map(|d| d.len()), Some(5));
        assert_eq!(only_featured.data.map(|d| d.len()), Some(3));
    }

    #[tokio::test]
    async fn missing_project_reports_not_found() {
        let service = mock_service();
        let hooks = ProjectHooks::new(service.clone(), service);

        let state = hooks.use_project("missing-id").await;

        assert!(state.data.is_none());
        assert!(state.error.is_some_and(|e| e.is_not_found()));
    }

    #[tokio::test]
    async fn mutation_invalidates_lists_and_details() {
        let mut query = MockProjectQueryMock::new();
        query
            .expect_get_project()
            .times(2)
            .returning(|_| Err(ServiceError::Network("offline".to_string())));
        query
            .expect_get_projects()
            .times(2)
            .returning(|_| Ok(PaginatedResponse::paginate(Vec::new(), None, None)));
        let hooks = ProjectHooks::new(Arc::new(query), mock_service());

        hooks.use_projects(ProjectListParams::default()).await;
        hooks.use_project("project-1").await;
        hooks.toggle_visibility("project-1").await.unwrap();
        hooks.use_projects(ProjectListParams::default()).await;
        hooks.use_project("project-1").await;
    }
}
