use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::data::PortfolioFixtures;
use crate::modules::navigation::application::domain::entities::{
    NavigationItem, PortfolioSettings,
};
use crate::modules::navigation::application::ports::outgoing::{
    NavigationQuery, NavigationRepository,
};
use crate::shared::api::ApiResponse;
use crate::shared::collection::published;
use crate::shared::error::ServiceError;
use crate::shared::latency::{Latency, MOCK_DELAY_MS};
use crate::shared::patch::{merge_patch, EntityPatch};
use crate::shared::store::listing::with_reordered;
use crate::shared::store::ReorderItem;

pub struct NavigationMockService {
    fixtures: Arc<PortfolioFixtures>,
    latency: Latency,
}

impl NavigationMockService {
    pub fn new(fixtures: Arc<PortfolioFixtures>, latency: Latency) -> Self {
        Self { fixtures, latency }
    }

    async fn delay(&self) {
        self.latency.wait(MOCK_DELAY_MS).await;
    }
}

#[async_trait]
impl NavigationQuery for NavigationMockService {
    async fn get_navigation(&self) -> Result<ApiResponse<Vec<NavigationItem>>, ServiceError> {
        self.delay().await;
        Ok(ApiResponse::wrap(published(&self.fixtures.navigation), None))
    }

    async fn get_settings(&self) -> Result<ApiResponse<PortfolioSettings>, ServiceError> {
        self.delay().await;
        Ok(ApiResponse::wrap(self.fixtures.settings.clone(), None))
    }
}

#[async_trait]
impl NavigationRepository for NavigationMockService {
    async fn update_settings(
        &self,
        patch: EntityPatch,
    ) -> Result<ApiResponse<PortfolioSettings>, ServiceError> {
        self.delay().await;
        let mut settings = merge_patch(&self.fixtures.settings, &patch)?;
        settings.updated_at = Utc::now();
        Ok(ApiResponse::wrap(settings, Some("Settings updated successfully")))
    }

    async fn update_navigation(
        &self,
        items: Vec<NavigationItem>,
    ) -> Result<ApiResponse<Vec<NavigationItem>>, ServiceError> {
        self.delay().await;
        Ok(ApiResponse::wrap(items, Some("Navigation updated successfully")))
    }

    async fn reorder_navigation(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<NavigationItem>>, ServiceError> {
        self.delay().await;
        let navigation = with_reordered(&self.fixtures.navigation, &items);
        Ok(ApiResponse::wrap(navigation, Some("Navigation reordered successfully")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::navigation::application::domain::entities::Theme;
    use serde_json::json;

    fn service() -> NavigationMockService {
        NavigationMockService::new(Arc::new(PortfolioFixtures::load().unwrap()), Latency::none())
    }

    #[tokio::test]
    async fn navigation_hides_invisible_items() {
        let items = service().get_navigation().await.unwrap().data;

        assert_eq!(items.len(), 5);
        assert!(items.iter().all(|i| i.id != "nav-6"));
    }

    #[tokio::test]
    async fn settings_patch_overlays_fields() {
        let patch = json!({ "theme": "light", "showSidebar": false })
            .as_object()
            .cloned()
            .unwrap();

        let resp = service().update_settings(patch).await.unwrap();

        assert_eq!(resp.data.theme, Theme::Light);
        assert!(!resp.data.show_sidebar);
        assert_eq!(resp.data.primary_color, "#0ea5e9");
    }

    #[tokio::test]
    async fn settings_patch_with_bad_value_is_rejected() {
        let patch = json!({ "theme": "sepia" }).as_object().cloned().unwrap();

        let err = service().update_settings(patch).await.unwrap_err();

        assert!(matches!(err, ServiceError::InvalidPatch(_)));
    }
}
