use std::sync::Arc;

use crate::modules::navigation::application::domain::entities::{
    NavigationItem, PortfolioSettings,
};
use crate::modules::navigation::application::ports::outgoing::{
    NavigationQuery, NavigationRepository,
};
use crate::shared::api::ApiResponse;
use crate::shared::error::ServiceError;
use crate::shared::patch::EntityPatch;
use crate::shared::query::{QueryCache, QueryKey, QueryState};
use crate::shared::store::ReorderItem;

pub mod keys {
    use crate::shared::query::QueryKey;

    pub fn navigation() -> QueryKey {
        QueryKey::new(&["navigation"])
    }

    pub fn settings() -> QueryKey {
        QueryKey::new(&["settings"])
    }
}

pub struct NavigationHooks {
    query: Arc<dyn NavigationQuery + Send + Sync>,
    repository: Arc<dyn NavigationRepository + Send + Sync>,
    navigation: QueryCache<Vec<NavigationItem>>,
    settings: QueryCache<PortfolioSettings>,
}

impl NavigationHooks {
    pub fn new(
        query: Arc<dyn NavigationQuery + Send + Sync>,
        repository: Arc<dyn NavigationRepository + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            navigation: QueryCache::new("navigation"),
            settings: QueryCache::new("settings"),
        }
    }

    pub async fn use_navigation(&self) -> QueryState<Vec<NavigationItem>> {
        let query = Arc::clone(&self.query);
        let result = self
            .navigation
            .fetch(keys::navigation(), move || async move {
                query.get_navigation().await.map(|r| r.data)
            })
            .await;
        QueryState::settled(result)
    }

    pub async fn use_settings(&self) -> QueryState<PortfolioSettings> {
        let query = Arc::clone(&self.query);
        let result = self
            .settings
            .fetch(keys::settings(), move || async move {
                query.get_settings().await.map(|r| r.data)
            })
            .await;
        QueryState::settled(result)
    }

    pub async fn update_settings(
        &self,
        patch: EntityPatch,
    ) -> Result<ApiResponse<PortfolioSettings>, ServiceError> {
        let resp = self.repository.update_settings(patch).await?;
        self.settings.invalidate(&keys::settings());
        Ok(resp)
    }

    pub async fn update_navigation(
        &self,
        items: Vec<NavigationItem>,
    ) -> Result<ApiResponse<Vec<NavigationItem>>, ServiceError> {
        let resp = self.repository.update_navigation(items).await?;
        self.navigation.invalidate(&keys::navigation());
        Ok(resp)
    }

    pub async fn reorder_navigation(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<NavigationItem>>, ServiceError> {
        let resp = self.repository.reorder_navigation(items).await?;
        self.navigation.invalidate(&keys::navigation());
        Ok(resp)
    }

    pub fn invalidate(&self, prefix: &QueryKey) {
        self.navigation.invalidate(prefix);
        self.settings.invalidate(prefix);
    }
}
