use std::sync::Arc;

use async_trait::async_trait;

use crate::data::PortfolioFixtures;
use crate::modules::profile::application::domain::entities::{Skill, SocialLink, TechStack, User};
use crate::modules::profile::application::ports::outgoing::ProfileQuery;
use crate::shared::api::ApiResponse;
use crate::shared::collection::published;
use crate::shared::error::ServiceError;
use crate::shared::latency::Latency;

/// Read-only profile service over the bundled fixtures, used for static deployments.
pub struct ProfileStaticService {
    fixtures: Arc<PortfolioFixtures>,
    latency: Latency,
}

impl ProfileStaticService {
    pub fn new(fixtures: Arc<PortfolioFixtures>, latency: Latency) -> Self {
        Self { fixtures, latency }
    }
}

#[async_trait]
impl ProfileQuery for ProfileStaticService {
    async fn get_user(&self) -> Result<ApiResponse<User>, ServiceError> {
        self.latency.wait(200).await;
        Ok(ApiResponse::wrap(self.fixtures.user.clone(), Some("Success")))
    }

    async fn get_social_links(&self) -> Result<ApiResponse<Vec<SocialLink>>, ServiceError> {
        self.latency.wait(150).await;
        Ok(ApiResponse::wrap(
            published(&self.fixtures.social_links),
            Some("Success"),
        ))
    }

    async fn get_tech_stack(&self) -> Result<ApiResponse<Vec<TechStack>>, ServiceError> {
        self.latency.wait(200).await;
        Ok(ApiResponse::wrap(
            published(&self.fixtures.tech_stack),
            Some("Success"),
        ))
    }

    async fn get_skills(&self) -> Result<ApiResponse<Vec<Skill>>, ServiceError> {
        self.latency.wait(180).await;
        Ok(ApiResponse::wrap(published(&self.fixtures.skills), Some("Success")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn tech_stack_is_visible_and_ordered() {
        let svc = ProfileStaticService::new(
            Arc::new(PortfolioFixtures::load().unwrap()),
            Latency::none(),
        );

        let resp = svc.get_tech_stack().await.unwrap();

        assert_eq!(resp.message.as_deref(), Some("Success"));
        assert!(resp.data.iter().all(|t| t.is_visible));
        assert!(resp.data.windows(2).all(|w| w[0].order <= w[1].order));
    }
}
