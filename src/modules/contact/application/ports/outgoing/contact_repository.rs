use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::{
    ContactForm, ContactMessage, MessageStatus,
};
use crate::shared::api::ApiResponse;
use crate::shared::error::ServiceError;

#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Sends the form as given; any validation happens upstream.
    async fn send_message(
        &self,
        form: ContactForm,
    ) -> Result<ApiResponse<ContactMessage>, ServiceError>;

    async fn update_message_status(
        &self,
        id: &str,
        status: MessageStatus,
    ) -> Result<ApiResponse<ContactMessage>, ServiceError>;

    async fn delete_message(&self, id: &str) -> Result<ApiResponse<()>, ServiceError>;
}
