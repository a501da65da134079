use std::sync::Arc;

use async_trait::async_trait;

use crate::data::PortfolioFixtures;
use crate::modules::project::application::domain::entities::{Project, ProjectListParams};
use crate::modules::project::application::ports::outgoing::ProjectQuery;
use crate::shared::api::{ApiResponse, PaginatedResponse};
use crate::shared::collection::find_required;
use crate::shared::error::ServiceError;
use crate::shared::latency::Latency;

pub struct ProjectStaticService {
    fixtures: Arc<PortfolioFixtures>,
    latency: Latency,
}

impl ProjectStaticService {
    pub fn new(fixtures: Arc<PortfolioFixtures>, latency: Latency) -> Self {
        Self { fixtures, latency }
    }
}

#[async_trait]
impl ProjectQuery for ProjectStaticService {
    async fn get_projects(
        &self,
        params: ProjectListParams,
    ) -> Result<PaginatedResponse<Project>, ServiceError> {
        self.latency.wait(400).await;
        Ok(params.apply(&self.fixtures.projects).with_message("Success"))
    }

    async fn get_project(&self, id: &str) -> Result<ApiResponse<Project>, ServiceError> {
        self.latency.wait(250).await;
        let project = find_required(&self.fixtures.projects, id, "Project")?;
        Ok(ApiResponse::wrap(project, Some("Success")))
    }
}
