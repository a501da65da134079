use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::navigation::application::domain::entities::PortfolioSettings;
use crate::shared::api::query_response;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/settings",
    tag = "navigation",
    responses(
        (status = 200, description = "Site-wide settings", body = inline(SuccessResponse<PortfolioSettings>)),
        (status = 502, description = "Upstream API failed", body = ErrorResponse)
    )
)]
#[get("/api/settings")]
pub async fn get_settings_handler(data: web::Data<AppState>) -> impl Responder {
    query_response(data.navigation.use_settings().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::OfflineUpstream;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn returns_settings() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(get_settings_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/settings").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["theme"], "dark");
        assert_eq!(body["data"]["socialLinksPosition"], "sidebar");
    }

    #[actix_web::test]
    async fn upstream_failure_is_bad_gateway() {
        let state = TestAppStateBuilder::default()
            .with_navigation_query(OfflineUpstream)
            .build();
        let app = test::init_service(App::new().app_data(state).service(get_settings_handler)).await;

        let req = test::TestRequest::get().uri("/api/settings").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }
}
