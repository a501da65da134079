use async_trait::async_trait;

use crate::modules::navigation::application::domain::entities::{
    NavigationItem, PortfolioSettings,
};
use crate::shared::api::ApiResponse;
use crate::shared::error::ServiceError;

#[async_trait]
pub trait NavigationQuery: Send + Sync {
    /// Visible items, sorted by `order`.
    async fn get_navigation(&self) -> Result<ApiResponse<Vec<NavigationItem>>, ServiceError>;

    async fn get_settings(&self) -> Result<ApiResponse<PortfolioSettings>, ServiceError>;
}
