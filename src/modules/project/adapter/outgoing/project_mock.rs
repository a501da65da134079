use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::data::{new_id, PortfolioFixtures};
use crate::modules::project::application::domain::entities::{
    CreateProjectForm, Project, ProjectListParams,
};
use crate::modules::project::application::ports::outgoing::{ProjectQuery, ProjectRepository};
use crate::shared::api::{ApiResponse, PaginatedResponse};
use crate::shared::collection::{find_required, patched, visibility_toggled};
use crate::shared::error::ServiceError;
use crate::shared::latency::{Latency, MOCK_DELAY_MS};
use crate::shared::patch::EntityPatch;
use crate::shared::store::listing::with_reordered;
use crate::shared::store::ReorderItem;

const ENTITY: &str = "Project";

pub struct ProjectMockService {
    fixtures: Arc<PortfolioFixtures>,
    latency: Latency,
}

impl ProjectMockService {
    pub fn new(fixtures: Arc<PortfolioFixtures>, latency: Latency) -> Self {
        Self { fixtures, latency }
    }

    async fn delay(&self) {
        self.latency.wait(MOCK_DELAY_MS).await;
    }
}

#[async_trait]
impl ProjectQuery for ProjectMockService {
    async fn get_projects(
        &self,
        params: ProjectListParams,
    ) -> Result<PaginatedResponse<Project>, ServiceError> {
        self.delay().await;
        Ok(params.apply(&self.fixtures.projects))
    }

    async fn get_project(&self, id: &str) -> Result<ApiResponse<Project>, ServiceError> {
        self.delay().await;
        let project = find_required(&self.fixtures.projects, id, ENTITY)?;
        Ok(ApiResponse::wrap(project, None))
    }
}

#[async_trait]
impl ProjectRepository for ProjectMockService {
    async fn create_project(
        &self,
        form: CreateProjectForm,
    ) -> Result<ApiResponse<Project>, ServiceError> {
        self.delay().await;
        let order = self.fixtures.projects.len() as i32 + 1;
        let project = form.into_entity(new_id("project"), order, Utc::now());
        Ok(ApiResponse::wrap(project, Some("Project created successfully")))
    }

    async fn update_project(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<ApiResponse<Project>, ServiceError> {
        self.delay().await;
        let mut project = patched(&self.fixtures.projects, id, &patch, ENTITY)?;
        project.updated_at = Utc::now();
        Ok(ApiResponse::wrap(project, Some("Project updated successfully")))
    }

    async fn delete_project(&self, _id: &str) -> Result<ApiResponse<()>, ServiceError> {
        self.delay().await;
        Ok(ApiResponse::wrap((), Some("Project deleted successfully")))
    }

    async fn toggle_featured(&self, id: &str) -> Result<ApiResponse<Project>, ServiceError> {
        self.delay().await;
        let mut project = find_required(&self.fixtures.projects, id, ENTITY)?;
        project.featured = !project.featured;
        Ok(ApiResponse::wrap(project, Some("Project featured status updated")))
    }

    async fn toggle_visibility(&self, id: &str) -> Result<ApiResponse<Project>, ServiceError> {
        self.delay().await;
        let project = visibility_toggled(&self.fixtures.projects, id, ENTITY)?;
        Ok(ApiResponse::wrap(project, Some("Project visibility updated")))
    }

    async fn reorder_projects(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<Project>>, ServiceError> {
        self.delay().await;
        let projects = with_reordered(&self.fixtures.projects, &items);
        Ok(ApiResponse::wrap(projects, Some("Projects reordered successfully")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::application::domain::entities::ProjectStatus;
    use chrono::NaiveDate;
    use serde_json::json;

    fn service() -> ProjectMockService {
        ProjectMockService::new(Arc::new(PortfolioFixtures::load().unwrap()), Latency::none())
    }

    #[tokio::test]
    async fn featured_filter() {
        let params = ProjectListParams {
            featured: Some(true),
            ..Default::default()
        };

        let page = service().get_projects(params).await.unwrap();

        assert!(page.data.iter().all(|p| p.featured));
        assert_eq!(page.pagination.total, 3);
    }

    #[tokio::test]
    async fn out_of_range_page_is_empty() {
        let params = ProjectListParams {
            page: Some(5),
            limit: Some(10),
            ..Default::default()
        };

        let page = service().get_projects(params).await.unwrap();

        assert!(page.data.is_empty());
        assert!(!page.pagination.has_next);
        assert!(page.pagination.has_prev);
    }

    #[tokio::test]
    async fn missing_project_is_not_found() {
        let err = service().get_project("project-404").await.unwrap_err();

        assert_eq!(err, ServiceError::not_found(ENTITY, "project-404"));
    }

    #[tokio::test]
    async fn create_appends_after_fixtures() {
        let svc = service();
        let form = CreateProjectForm {
            title: "New".to_string(),
            description: "Fresh project".to_string(),
            short_description: None,
            technologies: vec!["Rust".to_string()],
            github_url: None,
            live_url: None,
            status: ProjectStatus::Planned,
            featured: false,
            start_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            end_date: None,
            team_size: None,
            my_role: None,
            challenges: None,
            learnings: None,
        };

        let resp = svc.create_project(form).await.unwrap();

        assert!(resp.data.id.starts_with("project-"));
        assert_eq!(resp.data.order, 6);
        assert!(resp.data.is_visible);
        assert!(resp.data.images.is_empty());
        assert_eq!(resp.message.as_deref(), Some("Project created successfully"));
    }

    #[tokio::test]
    async fn toggles_flip_a_copy() {
        let svc = service();

        let featured = svc.toggle_featured("project-1").await.unwrap().data;
        let hidden = svc.toggle_visibility("project-1").await.unwrap().data;

        assert!(!featured.featured);
        assert!(!hidden.is_visible);
        // The fixture itself is untouched.
        let original = svc.get_project("project-1").await.unwrap().data;
        assert!(original.featured && original.is_visible);
    }

    #[tokio::test]
    async fn update_merges_patch() {
        let patch = json!({ "title": "Renamed" }).as_object().cloned().unwrap();

        let resp = service().update_project("project-2", patch).await.unwrap();

        assert_eq!(resp.data.title, "Renamed");
        assert_eq!(resp.data.id, "project-2");
    }
}
