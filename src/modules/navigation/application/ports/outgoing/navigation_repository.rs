use async_trait::async_trait;

use crate::modules::navigation::application::domain::entities::{
    NavigationItem, PortfolioSettings,
};
use crate::shared::api::ApiResponse;
use crate::shared::error::ServiceError;
use crate::shared::patch::EntityPatch;
use crate::shared::store::ReorderItem;

#[async_trait]
pub trait NavigationRepository: Send + Sync {
    async fn update_settings(
        &self,
        patch: EntityPatch,
    ) -> Result<ApiResponse<PortfolioSettings>, ServiceError>;

    /// Replaces the whole navigation list.
    async fn update_navigation(
        &self,
        items: Vec<NavigationItem>,
    ) -> Result<ApiResponse<Vec<NavigationItem>>, ServiceError>;

    async fn reorder_navigation(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<NavigationItem>>, ServiceError>;
}
