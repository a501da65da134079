use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::{
    Skill, SkillDraft, SocialLink, SocialLinkDraft, TechStack, TechStackDraft, UpdateUserForm,
    User,
};
use crate::modules::profile::application::ports::outgoing::{ProfileQuery, ProfileRepository};
use crate::shared::api::ApiResponse;
use crate::shared::error::ServiceError;
use crate::shared::http::{endpoints, ApiClient, ItemsBody};
use crate::shared::patch::EntityPatch;
use crate::shared::store::ReorderItem;

/// Profile service backed by the remote REST API.
pub struct ProfileApiService {
    client: ApiClient,
}

impl ProfileApiService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileQuery for ProfileApiService {
    async fn get_user(&self) -> Result<ApiResponse<User>, ServiceError> {
        self.client.get(endpoints::USER, &[]).await
    }

    async fn get_social_links(&self) -> Result<ApiResponse<Vec<SocialLink>>, ServiceError> {
        self.client.get(endpoints::SOCIAL_LINKS, &[]).await
    }

    async fn get_tech_stack(&self) -> Result<ApiResponse<Vec<TechStack>>, ServiceError> {
        self.client.get(endpoints::TECH_STACK, &[]).await
    }

    async fn get_skills(&self) -> Result<ApiResponse<Vec<Skill>>, ServiceError> {
        self.client.get(endpoints::SKILLS, &[]).await
    }
}

#[async_trait]
impl ProfileRepository for ProfileApiService {
    async fn update_user(&self, form: UpdateUserForm) -> Result<ApiResponse<User>, ServiceError> {
        self.client.put(endpoints::USER, &form).await
    }

    async fn create_social_link(
        &self,
        draft: SocialLinkDraft,
    ) -> Result<ApiResponse<SocialLink>, ServiceError> {
        self.client.post(endpoints::SOCIAL_LINKS, &draft).await
    }

    async fn update_social_link(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<ApiResponse<SocialLink>, ServiceError> {
        self.client
            .put(&endpoints::item(endpoints::SOCIAL_LINKS, id), &patch)
            .await
    }

    async fn delete_social_link(&self, id: &str) -> Result<ApiResponse<()>, ServiceError> {
        self.client
            .delete(&endpoints::item(endpoints::SOCIAL_LINKS, id))
            .await
    }

    async fn reorder_social_links(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<SocialLink>>, ServiceError> {
        self.client
            .patch(
                &endpoints::reorder(endpoints::SOCIAL_LINKS),
                Some(&ItemsBody { items: &items }),
            )
            .await
    }

    async fn create_tech_stack(
        &self,
        draft: TechStackDraft,
    ) -> Result<ApiResponse<TechStack>, ServiceError> {
        self.client.post(endpoints::TECH_STACK, &draft).await
    }

    async fn update_tech_stack(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<ApiResponse<TechStack>, ServiceError> {
        self.client
            .put(&endpoints::item(endpoints::TECH_STACK, id), &patch)
            .await
    }

    async fn delete_tech_stack(&self, id: &str) -> Result<ApiResponse<()>, ServiceError> {
        self.client
            .delete(&endpoints::item(endpoints::TECH_STACK, id))
            .await
    }

    async fn reorder_tech_stack(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<TechStack>>, ServiceError> {
        self.client
            .patch(
                &endpoints::reorder(endpoints::TECH_STACK),
                Some(&ItemsBody { items: &items }),
            )
            .await
    }

    async fn create_skill(&self, draft: SkillDraft) -> Result<ApiResponse<Skill>, ServiceError> {
        self.client.post(endpoints::SKILLS, &draft).await
    }

    async fn update_skill(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<ApiResponse<Skill>, ServiceError> {
        self.client
            .put(&endpoints::item(endpoints::SKILLS, id), &patch)
            .await
    }

    async fn delete_skill(&self, id: &str) -> Result<ApiResponse<()>, ServiceError> {
        self.client
            .delete(&endpoints::item(endpoints::SKILLS, id))
            .await
    }

    async fn reorder_skills(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<Skill>>, ServiceError> {
        self.client
            .patch(
                &endpoints::reorder(endpoints::SKILLS),
                Some(&ItemsBody { items: &items }),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::upstream::{api_client, spawn_upstream};
    use actix_web::{web, HttpResponse};
    use serde_json::{json, Value};

    async fn user() -> HttpResponse {
        HttpResponse::Ok().json(json!({
            "success": true,
            "data": {
                "id": "user-9",
                "name": "Remote User",
                "email": "remote@example.test",
                "title": "Engineer",
                "location": "Remote",
                "bio": "From the API",
                "isActive": true,
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-01T00:00:00Z"
            }
        }))
    }

    async fn reorder(body: web::Json<Value>) -> HttpResponse {
        // Echo the request body back so the test can inspect it.
        HttpResponse::Ok().json(json!({ "success": true, "data": [], "message": body.0.to_string() }))
    }

    #[actix_web::test]
    async fn reads_user_from_api() {
        let base = spawn_upstream(|cfg| {
            cfg.route("/api/user", web::get().to(user));
        });
        let svc = ProfileApiService::new(api_client(&base));

        let resp = svc.get_user().await.unwrap();

        assert_eq!(resp.data.id, "user-9");
        assert!(resp.data.avatar.is_none());
    }

    #[actix_web::test]
    async fn reorder_sends_items_envelope() {
        let base = spawn_upstream(|cfg| {
            cfg.route("/api/user/skills/reorder", web::patch().to(reorder));
        });
        let svc = ProfileApiService::new(api_client(&base));

        let resp = svc
            .reorder_skills(vec![ReorderItem {
                id: "skill-1".to_string(),
                order: 2,
            }])
            .await
            .unwrap();

        let sent: Value = serde_json::from_str(resp.message.as_deref().unwrap()).unwrap();
        assert_eq!(sent, json!({ "items": [{ "id": "skill-1", "order": 2 }] }));
    }
}
