use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, PageResponse, SuccessResponse};
use crate::modules::education::application::domain::entities::{Education, EducationListParams};
use crate::shared::api::{page_response, visible_item_response};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/education",
    tag = "education",
    params(EducationListParams),
    responses(
        (status = 200, description = "One page of education entries", body = inline(PageResponse<Education>)),
        (status = 502, description = "Upstream API failed", body = ErrorResponse)
    )
)]
#[get("/api/education")]
pub async fn get_education_handler(
    query: web::Query<EducationListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let params = EducationListParams {
        visible: Some(true),
        ..query.into_inner()
    };
    page_response(data.education.use_education_page(params).await)
}

#[utoipa::path(
    get,
    path = "/api/education/{id}",
    tag = "education",
    params(("id" = String, Path, description = "Education id")),
    responses(
        (status = 200, description = "Education entry with certificates", body = inline(SuccessResponse<Education>)),
        (status = 404, description = "No education entry with this id", body = ErrorResponse)
    )
)]
#[get("/api/education/{id}")]
pub async fn get_education_by_id_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    visible_item_response(data.education.use_education_by_id(&id).await, "Education", &id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn list_then_detail() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(get_education_handler)
                .service(get_education_by_id_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/education?visible=false").to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(list["pagination"]["total"], 2);
        assert!(list["data"].as_array().unwrap().iter().all(|e| e["isVisible"] == true));

        let req = test::TestRequest::get().uri("/api/education/edu-1").to_request();
        let detail: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(detail["data"]["certificates"][0]["credentialId"], "ECA-1234");
    }

    #[actix_web::test]
    async fn unknown_id_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(get_education_by_id_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/education/edu-x").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Education not found");
    }
}
