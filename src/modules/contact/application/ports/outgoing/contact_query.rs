use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::{ContactMessage, MessageListParams};
use crate::shared::api::{ApiResponse, PaginatedResponse};
use crate::shared::error::ServiceError;

/// Admin view of the inbox.
#[async_trait]
pub trait ContactQuery: Send + Sync {
    async fn get_messages(
        &self,
        params: MessageListParams,
    ) -> Result<PaginatedResponse<ContactMessage>, ServiceError>;

    async fn get_message(&self, id: &str) -> Result<ApiResponse<ContactMessage>, ServiceError>;
}
