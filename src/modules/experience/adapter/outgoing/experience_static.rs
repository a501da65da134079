use std::sync::Arc;

use async_trait::async_trait;

use crate::data::PortfolioFixtures;
use crate::modules::experience::application::domain::entities::{
    Experience, ExperienceListParams,
};
use crate::modules::experience::application::ports::outgoing::ExperienceQuery;
use crate::shared::api::{ApiResponse, PaginatedResponse};
use crate::shared::collection::find_required;
use crate::shared::error::ServiceError;
use crate::shared::latency::Latency;

pub struct ExperienceStaticService {
    fixtures: Arc<PortfolioFixtures>,
    latency: Latency,
}

impl ExperienceStaticService {
    pub fn new(fixtures: Arc<PortfolioFixtures>, latency: Latency) -> Self {
        Self { fixtures, latency }
    }
}

#[async_trait]
impl ExperienceQuery for ExperienceStaticService {
    async fn get_experiences(
        &self,
        params: ExperienceListParams,
    ) -> Result<PaginatedResponse<Experience>, ServiceError> {
        self.latency.wait(300).await;
        Ok(params
            .apply(&self.fixtures.experiences)
            .with_message("Success"))
    }

    async fn get_experience(&self, id: &str) -> Result<ApiResponse<Experience>, ServiceError> {
        self.latency.wait(200).await;
        let experience = find_required(&self.fixtures.experiences, id, "Experience")?;
        Ok(ApiResponse::wrap(experience, Some("Success")))
    }
}
