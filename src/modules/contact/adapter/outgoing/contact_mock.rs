use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::data::{new_id, PortfolioFixtures};
use crate::modules::contact::application::domain::entities::{
    ContactForm, ContactMessage, MessageListParams, MessageStatus,
};
use crate::modules::contact::application::ports::outgoing::{ContactQuery, ContactRepository};
use crate::shared::api::{ApiResponse, PaginatedResponse};
use crate::shared::error::ServiceError;
use crate::shared::latency::{Latency, MOCK_DELAY_MS};

const ENTITY: &str = "Message";

pub struct ContactMockService {
    fixtures: Arc<PortfolioFixtures>,
    latency: Latency,
}

impl ContactMockService {
    pub fn new(fixtures: Arc<PortfolioFixtures>, latency: Latency) -> Self {
        Self { fixtures, latency }
    }

    async fn delay(&self) {
        self.latency.wait(MOCK_DELAY_MS).await;
    }

    fn find(&self, id: &str) -> Result<ContactMessage, ServiceError> {
        self.fixtures
            .messages
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))
    }
}

#[async_trait]
impl ContactQuery for ContactMockService {
    async fn get_messages(
        &self,
        params: MessageListParams,
    ) -> Result<PaginatedResponse<ContactMessage>, ServiceError> {
        self.delay().await;
        Ok(params.apply(&self.fixtures.messages))
    }

    async fn get_message(&self, id: &str) -> Result<ApiResponse<ContactMessage>, ServiceError> {
        self.delay().await;
        Ok(ApiResponse::wrap(self.find(id)?, None))
    }
}

#[async_trait]
impl ContactRepository for ContactMockService {
    async fn send_message(
        &self,
        form: ContactForm,
    ) -> Result<ApiResponse<ContactMessage>, ServiceError> {
        self.delay().await;
        let message = form.into_message(new_id("msg"), Utc::now());
        Ok(ApiResponse::wrap(message, Some("Message sent successfully")))
    }

    async fn update_message_status(
        &self,
        id: &str,
        status: MessageStatus,
    ) -> Result<ApiResponse<ContactMessage>, ServiceError> {
        self.delay().await;
        let mut message = self.find(id)?;
        message.status = status;
        message.updated_at = Utc::now();
        Ok(ApiResponse::wrap(message, Some("Message status updated")))
    }

    async fn delete_message(&self, _id: &str) -> Result<ApiResponse<()>, ServiceError> {
        self.delay().await;
        Ok(ApiResponse::wrap((), Some("Message deleted successfully")))
    }
}
