use async_trait::async_trait;

use crate::modules::navigation::application::domain::entities::{
    NavigationItem, PortfolioSettings,
};
use crate::modules::navigation::application::ports::outgoing::{
    NavigationQuery, NavigationRepository,
};
use crate::shared::api::ApiResponse;
use crate::shared::error::ServiceError;
use crate::shared::http::{endpoints, ApiClient, ItemsBody};
use crate::shared::patch::EntityPatch;
use crate::shared::store::ReorderItem;

pub struct NavigationApiService {
    client: ApiClient,
}

impl NavigationApiService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NavigationQuery for NavigationApiService {
    async fn get_navigation(&self) -> Result<ApiResponse<Vec<NavigationItem>>, ServiceError> {
        self.client.get(endpoints::NAVIGATION, &[]).await
    }

    async fn get_settings(&self) -> Result<ApiResponse<PortfolioSettings>, ServiceError> {
        self.client.get(endpoints::SETTINGS, &[]).await
    }
}

#[async_trait]
impl NavigationRepository for NavigationApiService {
    async fn update_settings(
        &self,
        patch: EntityPatch,
    ) -> Result<ApiResponse<PortfolioSettings>, ServiceError> {
        self.client.put(endpoints::SETTINGS, &patch).await
    }

    async fn update_navigation(
        &self,
        items: Vec<NavigationItem>,
    ) -> Result<ApiResponse<Vec<NavigationItem>>, ServiceError> {
        self.client
            .put(endpoints::NAVIGATION, &ItemsBody { items: &items })
            .await
    }

    async fn reorder_navigation(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<NavigationItem>>, ServiceError> {
        self.client
            .patch(
                &endpoints::reorder(endpoints::NAVIGATION),
                Some(&ItemsBody { items: &items }),
            )
            .await
    }
}
