use std::sync::Arc;

use async_trait::async_trait;

use crate::data::PortfolioFixtures;
use crate::modules::navigation::application::domain::entities::{
    NavigationItem, PortfolioSettings,
};
use crate::modules::navigation::application::ports::outgoing::NavigationQuery;
use crate::shared::api::ApiResponse;
use crate::shared::collection::published;
use crate::shared::error::ServiceError;
use crate::shared::latency::Latency;

pub struct NavigationStaticService {
    fixtures: Arc<PortfolioFixtures>,
    latency: Latency,
}

impl NavigationStaticService {
    pub fn new(fixtures: Arc<PortfolioFixtures>, latency: Latency) -> Self {
        Self { fixtures, latency }
    }
}

#[async_trait]
impl NavigationQuery for NavigationStaticService {
    async fn get_navigation(&self) -> Result<ApiResponse<Vec<NavigationItem>>, ServiceError> {
        self.latency.wait(100).await;
        Ok(ApiResponse::wrap(
            published(&self.fixtures.navigation),
            Some("Success"),
        ))
    }

    async fn get_settings(&self) -> Result<ApiResponse<PortfolioSettings>, ServiceError> {
        self.latency.wait(100).await;
        Ok(ApiResponse::wrap(self.fixtures.settings.clone(), Some("Success")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn navigation_is_sorted_by_order() {
        let svc = NavigationStaticService::new(
            Arc::new(PortfolioFixtures::load().unwrap()),
            Latency::none(),
        );

        let orders: Vec<i32> = svc
            .get_navigation()
            .await
            .unwrap()
            .data
            .iter()
            .map(|i| i.order)
            .collect();

        assert_eq!(orders, vec![1, 2, 3, 4, 5]);
    }
}
