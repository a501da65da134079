use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::domain::entities::Project;
use crate::shared::api::visible_item_response;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project found", body = inline(SuccessResponse<Project>)),
        (status = 404, description = "No visible project with this id", body = ErrorResponse),
        (status = 502, description = "Upstream API failed", body = ErrorResponse)
    )
)]
#[get("/api/projects/{id}")]
pub async fn get_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    visible_item_response(data.projects.use_project(&id).await, "Project", &id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn known_id() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(get_project_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/projects/project-2").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["id"], "project-2");
    }

    #[actix_web::test]
    async fn unknown_id_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(get_project_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/projects/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "NOT_FOUND");
        assert_eq!(body["message"], "Project not found");
    }

    #[actix_web::test]
    async fn hidden_project_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(get_project_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/projects/project-5").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
