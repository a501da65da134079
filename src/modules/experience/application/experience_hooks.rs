use std::sync::Arc;

use crate::modules::experience::application::domain::entities::{
    Experience, ExperienceDraft, ExperienceListParams,
};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceQuery, ExperienceRepository,
};
use crate::shared::api::{ApiResponse, PaginatedResponse};
use crate::shared::error::ServiceError;
use crate::shared::patch::EntityPatch;
use crate::shared::query::{QueryCache, QueryKey, QueryState};
use crate::shared::store::ReorderItem;

pub mod keys {
    use crate::modules::experience::application::domain::entities::ExperienceListParams;
    use crate::shared::query::QueryKey;

    pub fn all() -> QueryKey {
        QueryKey::new(&["experiences"])
    }

    pub fn list(params: &ExperienceListParams) -> QueryKey {
        all().with_params(params)
    }

    pub fn detail(id: &str) -> QueryKey {
        all().with_segment(id)
    }
}

pub struct ExperienceHooks {
    query: Arc<dyn ExperienceQuery + Send + Sync>,
    repository: Arc<dyn ExperienceRepository + Send + Sync>,
    pages: QueryCache<PaginatedResponse<Experience>>,
    details: QueryCache<Experience>,
}

impl ExperienceHooks {
    pub fn new(
        query: Arc<dyn ExperienceQuery + Send + Sync>,
        repository: Arc<dyn ExperienceRepository + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            pages: QueryCache::new("experiences"),
            details: QueryCache::new("experience"),
        }
    }

    pub async fn use_experiences_page(
        &self,
        params: ExperienceListParams,
    ) -> QueryState<PaginatedResponse<Experience>> {
        let query = Arc::clone(&self.query);
        let key = keys::list(&params);
        let result = self
            .pages
            .fetch(key, move || async move { query.get_experiences(params).await })
            .await;
        QueryState::settled(result)
    }

    pub async fn use_experiences(
        &self,
        params: ExperienceListParams,
    ) -> QueryState<Vec<Experience>> {
        self.use_experiences_page(params).await.map(|page| page.data)
    }

    pub async fn use_experience(&self, id: &str) -> QueryState<Experience> {
        let query = Arc::clone(&self.query);
        let owned = id.to_string();
        let result = self
            .details
            .fetch(keys::detail(id), move || async move {
                query.get_experience(&owned).await.map(|r| r.data)
            })
            .await;
        QueryState::settled(result)
    }

    pub async fn create_experience(
        &self,
        draft: ExperienceDraft,
    ) -> Result<ApiResponse<Experience>, ServiceError> {
        let resp = self.repository.create_experience(draft).await?;
        self.invalidate_all();
        Ok(resp)
    }

    pub async fn update_experience(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<ApiResponse<Experience>, ServiceError> {
        let resp = self.repository.update_experience(id, patch).await?;
        self.invalidate_all();
        Ok(resp)
    }

    pub async fn delete_experience(&self, id: &str) -> Result<ApiResponse<()>, ServiceError> {
        let resp = self.repository.delete_experience(id).await?;
        self.invalidate_all();
        Ok(resp)
    }

    pub async fn toggle_visibility(
        &self,
        id: &str,
    ) -> Result<ApiResponse<Experience>, ServiceError> {
        let resp = self.repository.toggle_visibility(id).await?;
        self.invalidate_all();
        Ok(resp)
    }

    pub async fn reorder_experiences(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<Experience>>, ServiceError> {
        let resp = self.repository.reorder_experiences(items).await?;
        self.invalidate_all();
        Ok(resp)
    }

    fn invalidate_all(&self) {
        let prefix = keys::all();
        self.pages.invalidate(&prefix);
        self.details.invalidate(&prefix);
    }
}
