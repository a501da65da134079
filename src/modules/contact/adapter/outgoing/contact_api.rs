use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::{
    ContactForm, ContactMessage, MessageListParams, MessageStatus, StatusUpdate,
};
use crate::modules::contact::application::ports::outgoing::{ContactQuery, ContactRepository};
use crate::shared::api::{ApiResponse, PaginatedResponse};
use crate::shared::error::ServiceError;
use crate::shared::http::{endpoints, query_pairs, ApiClient};

pub struct ContactApiService {
    client: ApiClient,
}

impl ContactApiService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

fn status_path(id: &str) -> String {
    format!("{}/status", endpoints::item(endpoints::MESSAGES, id))
}

#[async_trait]
impl ContactQuery for ContactApiService {
    async fn get_messages(
        &self,
        params: MessageListParams,
    ) -> Result<PaginatedResponse<ContactMessage>, ServiceError> {
        self.client
            .get(endpoints::MESSAGES, &query_pairs(&params))
            .await
    }

    async fn get_message(&self, id: &str) -> Result<ApiResponse<ContactMessage>, ServiceError> {
        self.client
            .get(&endpoints::item(endpoints::MESSAGES, id), &[])
            .await
    }
}

#[async_trait]
impl ContactRepository for ContactApiService {
    async fn send_message(
        &self,
        form: ContactForm,
    ) -> Result<ApiResponse<ContactMessage>, ServiceError> {
        self.client.post(endpoints::CONTACT, &form).await
    }

    async fn update_message_status(
        &self,
        id: &str,
        status: MessageStatus,
    ) -> Result<ApiResponse<ContactMessage>, ServiceError> {
        self.client
            .patch(&status_path(id), Some(&StatusUpdate { status }))
            .await
    }

    async fn delete_message(&self, id: &str) -> Result<ApiResponse<()>, ServiceError> {
        self.client
            .delete(&endpoints::item(endpoints::MESSAGES, id))
            .await
    }
}
