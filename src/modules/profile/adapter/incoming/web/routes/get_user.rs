use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::profile::application::domain::entities::User;
use crate::shared::api::query_response;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/user",
    tag = "profile",
    responses(
        (status = 200, description = "Portfolio owner", body = inline(SuccessResponse<User>)),
        (status = 502, description = "Upstream API failed", body = ErrorResponse)
    )
)]
#[get("/api/user")]
pub async fn get_user_handler(data: web::Data<AppState>) -> impl Responder {
    query_response(data.profile.use_user().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::OfflineUpstream;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn returns_the_profile() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(get_user_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/user").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], "user-1");
        assert!(body["data"]["createdAt"].is_string());
    }

    #[actix_web::test]
    async fn upstream_failure_is_bad_gateway() {
        let state = TestAppStateBuilder::default()
            .with_profile_query(OfflineUpstream)
            .build();
        let app = test::init_service(App::new().app_data(state).service(get_user_handler)).await;

        let req = test::TestRequest::get().uri("/api/user").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "UPSTREAM_ERROR");
    }
}
