use std::sync::Arc;

use crate::modules::app::application::store::AppStore;
use crate::modules::contact::application::domain::entities::{
    ContactForm, ContactMessage, MessageListParams, MessageStatus,
};
use crate::modules::contact::application::ports::outgoing::{ContactQuery, ContactRepository};
use crate::shared::api::{ApiResponse, PaginatedResponse};
use crate::shared::error::ServiceError;
use crate::shared::query::{QueryCache, QueryState};

pub mod keys {
    use crate::modules::contact::application::domain::entities::MessageListParams;
    use crate::shared::query::QueryKey;

    pub fn all() -> QueryKey {
        QueryKey::new(&["messages"])
    }

    pub fn list(params: &MessageListParams) -> QueryKey {
        all().with_params(params)
    }

    pub fn detail(id: &str) -> QueryKey {
        all().with_segment(id)
    }
}

const SEND_FAILED: &str = "Failed to send message";

pub struct ContactHooks {
    query: Arc<dyn ContactQuery + Send + Sync>,
    repository: Arc<dyn ContactRepository + Send + Sync>,
    app_store: Arc<AppStore>,
    pages: QueryCache<PaginatedResponse<ContactMessage>>,
    details: QueryCache<ContactMessage>,
}

impl ContactHooks {
    pub fn new(
        query: Arc<dyn ContactQuery + Send + Sync>,
        repository: Arc<dyn ContactRepository + Send + Sync>,
        app_store: Arc<AppStore>,
    ) -> Self {
        Self {
            query,
            repository,
            app_store,
            pages: QueryCache::new("messages"),
            details: QueryCache::new("message"),
        }
    }

    /// On failure the upstream message (or a generic one) lands in the app store.
    pub async fn use_send_message(
        &self,
        form: ContactForm,
    ) -> Result<ApiResponse<ContactMessage>, ServiceError> {
        match self.repository.send_message(form).await {
            Ok(resp) => {
                self.invalidate_all();
                Ok(resp)
            }
            Err(err) => {
                let message = err.upstream_message().unwrap_or(SEND_FAILED);
                self.app_store.set_error(Some(message.to_string()));
                Err(err)
            }
        }
    }

    pub async fn use_messages_page(
        &self,
        params: MessageListParams,
    ) -> QueryState<PaginatedResponse<ContactMessage>> {
        let query = Arc::clone(&self.query);
        let key = keys::list(&params);
        let result = self
            .pages
            .fetch(key, move || async move { query.get_messages(params).await })
            .await;
        QueryState::settled(result)
    }

    pub async fn use_messages(&self, params: MessageListParams) -> QueryState<Vec<ContactMessage>> {
        self.use_messages_page(params).await.map(|page| page.data)
    }

    pub async fn use_message(&self, id: &str) -> QueryState<ContactMessage> {
        let query = Arc::clone(&self.query);
        let owned = id.to_string();
        let result = self
            .details
            .fetch(keys::detail(id), move || async move {
                query.get_message(&owned).await.map(|r| r.data)
            })
            .await;
        QueryState::settled(result)
    }

    pub async fn update_message_status(
        &self,
        id: &str,
        status: MessageStatus,
    ) -> Result<ApiResponse<ContactMessage>, ServiceError> {
        let resp = self.repository.update_message_status(id, status).await?;
        self.invalidate_all();
        Ok(resp)
    }

    pub async fn delete_message(&self, id: &str) -> Result<ApiResponse<()>, ServiceError> {
        let resp = self.repository.delete_message(id).await?;
        self.invalidate_all();
        Ok(resp)
    }

    fn invalidate_all(&self) {
        let prefix = keys::all();
        self.pages.invalidate(&prefix);
        self.details.invalidate(&prefix);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PortfolioFixtures;
    use crate::modules::contact::adapter::outgoing::ContactMockService;
    use crate::shared::latency::Latency;
    use crate::shared::storage::MemoryLocalStorage;
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        pub ContactRepositoryMock {}
        #[async_trait]
        impl ContactRepository for ContactRepositoryMock {
            async fn send_message(&self, form: ContactForm) -> Result<ApiResponse<ContactMessage>, ServiceError>;
            async fn update_message_status(&self, id: &str, status: MessageStatus) -> Result<ApiResponse<ContactMessage>, ServiceError>;
            async fn delete_message(&self, id: &str) -> Result<ApiResponse<()>, ServiceError>;
        }
    }

    fn mock_service() -> Arc<ContactMockService> {
        Arc::new(ContactMockService::new(
            Arc::new(PortfolioFixtures::load().unwrap()),
            Latency::none(),
        ))
    }

    fn app_store() -> Arc<AppStore> {
        Arc::new(AppStore::new(Arc::new(MemoryLocalStorage::new())))
    }

    fn form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.test".to_string(),
            subject: None,
            message: "Hi".to_string(),
        }
    }

    #[tokio::test]
    async fn upstream_message_is_surfaced() {
        let mut repository = MockContactRepositoryMock::new();
        repository.expect_send_message().returning(|_| {
            Err(ServiceError::Http {
                status: 429,
                message: "Too many messages".to_string(),
            })
        });
        let store = app_store();
        let hooks = ContactHooks::new(mock_service(), Arc::new(repository), store.clone());

        assert!(hooks.use_send_message(form()).await.is_err());

        assert_eq!(store.state().error.as_deref(), Some("Too many messages"));
    }

    #[tokio::test]
    async fn network_failure_uses_fallback_message() {
        let mut repository = MockContactRepositoryMock::new();
        repository
            .expect_send_message()
            .returning(|_| Err(ServiceError::Network("connection refused".to_string())));
        let store = app_store();
        let hooks = ContactHooks::new(mock_service(), Arc::new(repository), store.clone());

        assert!(hooks.use_send_message(form()).await.is_err());

        assert_eq!(store.state().error.as_deref(), Some(SEND_FAILED));
    }

    #[tokio::test]
    async fn successful_send_leaves_error_slot_alone() {
        let service = mock_service();
        let store = app_store();
        let hooks = ContactHooks::new(service.clone(), service, store.clone());

        let resp = hooks.use_send_message(form()).await.unwrap();

        assert!(resp.success);
        assert!(store.state().error.is_none());
    }

    #[tokio::test]
    async fn message_lists_are_cached_per_params() {
        let service = mock_service();
        let hooks = ContactHooks::new(service.clone(), service, app_store());

        let unread = hooks
            .use_messages(MessageListParams {
                status: Some(MessageStatus::Unread),
                ..Default::default()
            })
            .await;
        let all = hooks.use_messages(MessageListParams::default()).await;

        assert_eq!(unread.data.map(|m| m.len()), Some(1));
        assert_eq!(all.data.map(|m| m.len()), Some(2));
    }
}
