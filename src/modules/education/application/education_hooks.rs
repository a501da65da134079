use std::sync::Arc;

use crate::modules::education::application::domain::entities::{
    Education, EducationDraft, EducationListParams,
};
use crate::modules::education::application::ports::outgoing::{
    EducationQuery, EducationRepository,
};
use crate::shared::api::{ApiResponse, PaginatedResponse};
use crate::shared::error::ServiceError;
use crate::shared::patch::EntityPatch;
use crate::shared::query::{QueryCache, QueryKey, QueryState};
use crate::shared::store::ReorderItem;

pub mod keys {
    use crate::modules::education::application::domain::entities::EducationListParams;
    use crate::shared::query::QueryKey;

    pub fn all() -> QueryKey {
        QueryKey::new(&["education"])
    }

    pub fn list(params: &EducationListParams) -> QueryKey {
        all().with_params(params)
    }

    pub fn detail(id: &str) -> QueryKey {
        all().with_segment(id)
    }
}

pub struct EducationHooks {
    query: Arc<dyn EducationQuery + Send + Sync>,
    repository: Arc<dyn EducationRepository + Send + Sync>,
    pages: QueryCache<PaginatedResponse<Education>>,
    details: QueryCache<Education>,
}

impl EducationHooks {
    pub fn new(
        query: Arc<dyn EducationQuery + Send + Sync>,
        repository: Arc<dyn EducationRepository + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            pages: QueryCache::new("education"),
            details: QueryCache::new("education-detail"),
        }
    }

    pub async fn use_education_page(
        &self,
        params: EducationListParams,
    ) -> QueryState<PaginatedResponse<Education>> {
        let query = Arc::clone(&self.query);
        let key = keys::list(&params);
        let result = self
            .pages
            .fetch(key, move || async move { query.get_education(params).await })
            .await;
        QueryState::settled(result)
    }

    pub async fn use_education(&self, params: EducationListParams) -> QueryState<Vec<Education>> {
        self.use_education_page(params).await.map(|page| page.data)
    }

    pub async fn use_education_by_id(&self, id: &str) -> QueryState<Education> {
        let query = Arc::clone(&self.query);
        let owned = id.to_string();
        let result = self
            .details
            .fetch(keys::detail(id), move || async move {
                query.get_education_by_id(&owned).await.map(|r| r.data)
            })
            .await;
        QueryState::settled(result)
    }

    pub async fn create_education(
        &self,
        draft: EducationDraft,
    ) -> Result<ApiResponse<Education>, ServiceError> {
        let resp = self.repository.create_education(draft).await?;
        self.invalidate_all();
        Ok(resp)
    }

    pub async fn update_education(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<ApiResponse<Education>, ServiceError> {
        let resp = self.repository.update_education(id, patch).await?;
        self.invalidate_all();
        Ok(resp)
    }

    pub async fn delete_education(&self, id: &str) -> Result<ApiResponse<()>, ServiceError> {
        let resp = self.repository.delete_education(id).await?;
        self.invalidate_all();
        Ok(resp)
    }

    pub async fn toggle_visibility(&self, id: &str) -> Result<ApiResponse<Education>, ServiceError> {
        let resp = self.repository.toggle_visibility(id).await?;
        self.invalidate_all();
        Ok(resp)
    }

    pub async fn reorder_education(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<Education>>, ServiceError> {
        let resp = self.repository.reorder_education(items).await?;
        self.invalidate_all();
        Ok(resp)
    }

    fn invalidate_all(&self) {
        let prefix = keys::all();
        self.pages.invalidate(&prefix);
        self.details.invalidate(&prefix);
    }
}
