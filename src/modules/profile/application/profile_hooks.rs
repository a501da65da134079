use std::future::Future;
use std::sync::Arc;

use crate::modules::app::application::store::AppStore;
use crate::modules::profile::application::domain::entities::{
    Skill, SkillDraft, SocialLink, SocialLinkDraft, TechStack, TechStackDraft, UpdateUserForm,
    User,
};
use crate::modules::profile::application::ports::outgoing::{ProfileQuery, ProfileRepository};
use crate::shared::api::ApiResponse;
use crate::shared::error::ServiceError;
use crate::shared::patch::EntityPatch;
use crate::shared::query::{QueryCache, QueryKey, QueryState};
use crate::shared::store::ReorderItem;

pub mod keys {
    use crate::shared::query::QueryKey;

    pub fn user() -> QueryKey {
        QueryKey::new(&["user"])
    }

    pub fn social_links() -> QueryKey {
        QueryKey::new(&["user", "social-links"])
    }

    pub fn tech_stack() -> QueryKey {
        QueryKey::new(&["user", "tech-stack"])
    }

    pub fn skills() -> QueryKey {
        QueryKey::new(&["user", "skills"])
    }
}

const UPDATE_USER_FAILED: &str = "Failed to update profile";

/// Cached profile reads and the profile mutations.
pub struct ProfileHooks {
    query: Arc<dyn ProfileQuery + Send + Sync>,
    repository: Arc<dyn ProfileRepository + Send + Sync>,
    app_store: Arc<AppStore>,
    user: QueryCache<User>,
    social_links: QueryCache<Vec<SocialLink>>,
    tech_stack: QueryCache<Vec<TechStack>>,
    skills: QueryCache<Vec<Skill>>,
}

impl ProfileHooks {
    pub fn new(
        query: Arc<dyn ProfileQuery + Send + Sync>,
        repository: Arc<dyn ProfileRepository + Send + Sync>,
        app_store: Arc<AppStore>,
    ) -> Self {
        Self {
            query,
            repository,
            app_store,
            user: QueryCache::new("user"),
            social_links: QueryCache::new("social-links"),
            tech_stack: QueryCache::new("tech-stack"),
            skills: QueryCache::new("skills"),
        }
    }

    //
    // ──────────────────────────────────────────────────────────
    // Queries
    // ──────────────────────────────────────────────────────────
    //

    pub async fn use_user(&self) -> QueryState<User> {
        let query = Arc::clone(&self.query);
        let result = self
            .user
            .fetch(keys::user(), move || async move {
                query.get_user().await.map(|r| r.data)
            })
            .await;
        QueryState::settled(result)
    }

    pub async fn use_social_links(&self) -> QueryState<Vec<SocialLink>> {
        let query = Arc::clone(&self.query);
        let result = self
            .social_links
            .fetch(keys::social_links(), move || async move {
                query.get_social_links().await.map(|r| r.data)
            })
            .await;
        QueryState::settled(result)
    }

    pub async fn use_tech_stack(&self) -> QueryState<Vec<TechStack>> {
        let query = Arc::clone(&self.query);
        let result = self
            .tech_stack
            .fetch(keys::tech_stack(), move || async move {
                query.get_tech_stack().await.map(|r| r.data)
            })
            .await;
        QueryState::settled(result)
    }

    pub async fn use_skills(&self) -> QueryState<Vec<Skill>> {
        let query = Arc::clone(&self.query);
        let result = self
            .skills
            .fetch(keys::skills(), move || async move {
                query.get_skills().await.map(|r| r.data)
            })
            .await;
        QueryState::settled(result)
    }

    //
    // ──────────────────────────────────────────────────────────
    // Mutations
    // ──────────────────────────────────────────────────────────
    //

    /// On failure the upstream message (or a generic one) lands in the app store.
    pub async fn use_update_user(
        &self,
        form: UpdateUserForm,
    ) -> Result<ApiResponse<User>, ServiceError> {
        match self.repository.update_user(form).await {
            Ok(resp) => {
                self.invalidate(&keys::user());
                Ok(resp)
            }
            Err(err) => {
                let message = err.upstream_message().unwrap_or(UPDATE_USER_FAILED);
                self.app_store.set_error(Some(message.to_string()));
                Err(err)
            }
        }
    }

    pub async fn create_social_link(
        &self,
        draft: SocialLinkDraft,
    ) -> Result<ApiResponse<SocialLink>, ServiceError> {
        self.mutate(keys::social_links(), self.repository.create_social_link(draft))
            .await
    }

    pub async fn update_social_link(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<ApiResponse<SocialLink>, ServiceError> {
        self.mutate(
            keys::social_links(),
            self.repository.update_social_link(id, patch),
        )
        .await
    }

    pub async fn delete_social_link(&self, id: &str) -> Result<ApiResponse<()>, ServiceError> {
        self.mutate(keys::social_links(), self.repository.delete_social_link(id))
            .await
    }

    pub async fn reorder_social_links(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<SocialLink>>, ServiceError> {
        self.mutate(
            keys::social_links(),
            self.repository.reorder_social_links(items),
        )
        .await
    }

    pub async fn create_tech_stack(
        &self,
        draft: TechStackDraft,
    ) -> Result<ApiResponse<TechStack>, ServiceError> {
        self.mutate(keys::tech_stack(), self.repository.create_tech_stack(draft))
            .await
    }

    pub async fn update_tech_stack(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<ApiResponse<TechStack>, ServiceError> {
        self.mutate(
            keys::tech_stack(),
            self.repository.update_tech_stack(id, patch),
        )
        .await
    }

    pub async fn delete_tech_stack(&self, id: &str) -> Result<ApiResponse<()>, ServiceError> {
        self.mutate(keys::tech_stack(), self.repository.delete_tech_stack(id))
            .await
    }

    pub async fn reorder_tech_stack(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<TechStack>>, ServiceError> {
        self.mutate(keys::tech_stack(), self.repository.reorder_tech_stack(items))
            .await
    }

    pub async fn create_skill(&self, draft: SkillDraft) -> Result<ApiResponse<Skill>, ServiceError> {
        self.mutate(keys::skills(), self.repository.create_skill(draft))
            .await
    }

    pub async fn update_skill(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<ApiResponse<Skill>, ServiceError> {
        self.mutate(keys::skills(), self.repository.update_skill(id, patch))
            .await
    }

    pub async fn delete_skill(&self, id: &str) -> Result<ApiResponse<()>, ServiceError> {
        self.mutate(keys::skills(), self.repository.delete_skill(id))
            .await
    }

    pub async fn reorder_skills(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<Skill>>, ServiceError> {
        self.mutate(keys::skills(), self.repository.reorder_skills(items))
            .await
    }

    async fn mutate<T>(
        &self,
        key: QueryKey,
        request: impl Future<Output = Result<ApiResponse<T>, ServiceError>>,
    ) -> Result<ApiResponse<T>, ServiceError> {
        let resp = request.await?;
        self.invalidate(&key);
        Ok(resp)
    }

    /// Drops every cached profile query under `prefix`.
    pub fn invalidate(&self, prefix: &QueryKey) {
        self.user.invalidate(prefix);
        self.social_links.invalidate(prefix);
        self.tech_stack.invalidate(prefix);
        self.skills.invalidate(prefix);
    }
}
