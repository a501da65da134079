use std::sync::Arc;

use async_trait::async_trait;

use crate::data::PortfolioFixtures;
use crate::modules::education::application::domain::entities::{Education, EducationListParams};
use crate::modules::education::application::ports::outgoing::EducationQuery;
use crate::shared::api::{ApiResponse, PaginatedResponse};
use crate::shared::collection::find_required;
use crate::shared::error::ServiceError;
use crate::shared::latency::Latency;

pub struct EducationStaticService {
    fixtures: Arc<PortfolioFixtures>,
    latency: Latency,
}

impl EducationStaticService {
    pub fn new(fixtures: Arc<PortfolioFixtures>, latency: Latency) -> Self {
        Self { fixtures, latency }
    }
}

#[async_trait]
impl EducationQuery for EducationStaticService {
    async fn get_education(
        &self,
        params: EducationListParams,
    ) -> Result<PaginatedResponse<Education>, ServiceError> {
        self.latency.wait(250).await;
        Ok(params.apply(&self.fixtures.education).with_message("Success"))
    }

    async fn get_education_by_id(&self, id: &str) -> Result<ApiResponse<Education>, ServiceError> {
        self.latency.wait(200).await;
        let education = find_required(&self.fixtures.education, id, "Education")?;
        Ok(ApiResponse::wrap(education, Some("Success")))
    }
}
