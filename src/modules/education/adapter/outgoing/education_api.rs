use async_trait::async_trait;

use crate::modules::education::application::domain::entities::{
    Education, EducationDraft, EducationListParams,
};
use crate::modules::education::application::ports::outgoing::{
    EducationQuery, EducationRepository,
};
use crate::shared::api::{ApiResponse, PaginatedResponse};
use crate::shared::error::ServiceError;
use crate::shared::http::{endpoints, query_pairs, ApiClient, ItemsBody};
use crate::shared::patch::EntityPatch;
use crate::shared::store::ReorderItem;

pub struct EducationApiService {
    client: ApiClient,
}

impl EducationApiService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EducationQuery for EducationApiService {
    async fn get_education(
        &self,
        params: EducationListParams,
    ) -> Result<PaginatedResponse<Education>, ServiceError> {
        self.client
            .get(endpoints::EDUCATION, &query_pairs(&params))
            .await
    }

    async fn get_education_by_id(&self, id: &str) -> Result<ApiResponse<Education>, ServiceError> {
        self.client
            .get(&endpoints::item(endpoints::EDUCATION, id), &[])
            .await
    }
}

#[async_trait]
impl EducationRepository for EducationApiService {
    async fn create_education(
        &self,
        draft: EducationDraft,
    ) -> Result<ApiResponse<Education>, ServiceError> {
        self.client.post(endpoints::EDUCATION, &draft).await
    }

    async fn update_education(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<ApiResponse<Education>, ServiceError> {
        self.client
            .put(&endpoints::item(endpoints::EDUCATION, id), &patch)
            .await
    }

    async fn delete_education(&self, id: &str) -> Result<ApiResponse<()>, ServiceError> {
        self.client
            .delete(&endpoints::item(endpoints::EDUCATION, id))
            .await
    }

    async fn toggle_visibility(&self, id: &str) -> Result<ApiResponse<Education>, ServiceError> {
        self.client
            .patch::<(), _>(
                &endpoints::toggle_visibility(endpoints::EDUCATION, id),
                None,
            )
            .await
    }

    async fn reorder_education(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<Education>>, ServiceError> {
        self.client
            .patch(
                &endpoints::reorder(endpoints::EDUCATION),
                Some(&ItemsBody { items: &items }),
            )
            .await
    }
}
