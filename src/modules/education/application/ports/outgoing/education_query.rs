use async_trait::async_trait;

use crate::modules::education::application::domain::entities::{Education, EducationListParams};
use crate::shared::api::{ApiResponse, PaginatedResponse};
use crate::shared::error::ServiceError;

#[async_trait]
pub trait EducationQuery: Send + Sync {
    async fn get_education(
        &self,
        params: EducationListParams,
    ) -> Result<PaginatedResponse<Education>, ServiceError>;

    async fn get_education_by_id(&self, id: &str) -> Result<ApiResponse<Education>, ServiceError>;
}
