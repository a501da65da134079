use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::{
    Experience, ExperienceDraft, ExperienceListParams,
};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceQuery, ExperienceRepository,
};
use crate::shared::api::{ApiResponse, PaginatedResponse};
use crate::shared::error::ServiceError;
use crate::shared::http::{endpoints, query_pairs, ApiClient, ItemsBody};
use crate::shared::patch::EntityPatch;
use crate::shared::store::ReorderItem;

pub struct ExperienceApiService {
    client: ApiClient,
}

impl ExperienceApiService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ExperienceQuery for ExperienceApiService {
    async fn get_experiences(
        &self,
        params: ExperienceListParams,
    ) -> Result<PaginatedResponse<Experience>, ServiceError> {
        self.client
            .get(endpoints::EXPERIENCES, &query_pairs(&params))
            .await
    }

    async fn get_experience(&self, id: &str) -> Result<ApiResponse<Experience>, ServiceError> {
        self.client
            .get(&endpoints::item(endpoints::EXPERIENCES, id), &[])
            .await
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceApiService {
    async fn create_experience(
        &self,
        draft: ExperienceDraft,
    ) -> Result<ApiResponse<Experience>, ServiceError> {
        self.client.post(endpoints::EXPERIENCES, &draft).await
    }

    async fn update_experience(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<ApiResponse<Experience>, ServiceError> {
        self.client
            .put(&endpoints::item(endpoints::EXPERIENCES, id), &patch)
            .await
    }

    async fn delete_experience(&self, id: &str) -> Result<ApiResponse<()>, ServiceError> {
        self.client
            .delete(&endpoints::item(endpoints::EXPERIENCES, id))
            .await
    }

    async fn toggle_visibility(&self, id: &str) -> Result<ApiResponse<Experience>, ServiceError> {
        self.client
            .patch::<(), _>(
                &endpoints::toggle_visibility(endpoints::EXPERIENCES, id),
                None,
            )
            .await
    }

    async fn reorder_experiences(
        &self,
        items: Vec<ReorderItem>,
    ) -> Result<ApiResponse<Vec<Experience>>, ServiceError> {
        self.client
            .patch(
                &endpoints::reorder(endpoints::EXPERIENCES),
                Some(&ItemsBody { items: &items }),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::upstream::{api_client, spawn_upstream};
    use actix_web::{web, HttpRequest, HttpResponse};
    use serde_json::json;

    async fn toggled(req: HttpRequest) -> HttpResponse {
        HttpResponse::BadRequest().json(json!({ "success": false, "message": req.path() }))
    }

    #[actix_web::test]
    async fn toggle_hits_visibility_subpath() {
        let base = spawn_upstream(|cfg| {
            cfg.route(
                "/api/experiences/{id}/toggle-visibility",
                web::patch().to(toggled),
            );
        });
        let svc = ExperienceApiService::new(api_client(&base));

        let err = svc.toggle_visibility("exp-1").await.unwrap_err();

        assert_eq!(
            err,
            ServiceError::Http {
                status: 400,
                message: "/api/experiences/exp-1/toggle-visibility".to_string()
            }
        );
    }
}
