use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::{
    Experience, ExperienceListParams,
};
use crate::shared::api::{ApiResponse, PaginatedResponse};
use crate::shared::error::ServiceError;

#[async_trait]
pub trait ExperienceQuery: Send + Sync {
    async fn get_experiences(
        &self,
        params: ExperienceListParams,
    ) -> Result<PaginatedResponse<Experience>, ServiceError>;

    async fn get_experience(&self, id: &str) -> Result<ApiResponse<Experience>, ServiceError>;
}
