use actix_web::{get, put, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::app::application::store::Preferences;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/preferences",
    tag = "preferences",
    responses(
        (status = 200, description = "Persisted theme and section", body = inline(SuccessResponse<Preferences>))
    )
)]
#[get("/api/preferences")]
pub async fn get_preferences_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.app_store.preferences())
}

/// Replaces both preferences and writes them to local storage.
#[utoipa::path(
    put,
    path = "/api/preferences",
    tag = "preferences",
    request_body = Preferences,
    responses(
        (status = 200, description = "Preferences saved", body = inline(SuccessResponse<Preferences>)),
        (status = 400, description = "Unknown theme", body = ErrorResponse)
    )
)]
#[put("/api/preferences")]
pub async fn update_preferences_handler(
    body: web::Json<Preferences>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Preferences {
        theme,
        current_section,
    } = body.into_inner();

    data.app_store.set_theme(theme);
    data.app_store.set_current_section(current_section);

    ApiResponse::success(data.app_store.preferences())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::app::application::store::APP_STORE_KEY;
    use crate::shared::storage::{LocalStorage, MemoryLocalStorage};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    #[actix_web::test]
    async fn defaults_without_saved_state() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(get_preferences_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/preferences").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"], json!({ "theme": "dark", "currentSection": "about" }));
    }

    #[actix_web::test]
    async fn update_is_persisted() {
        let storage = Arc::new(MemoryLocalStorage::new());
        let state = TestAppStateBuilder::default()
            .with_storage(storage.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_preferences_handler)
                .service(update_preferences_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/preferences")
            .set_json(json!({ "theme": "light", "currentSection": "projects" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let saved: Value =
            serde_json::from_str(&storage.get_item(APP_STORE_KEY).unwrap()).unwrap();
        assert_eq!(saved["state"]["theme"], "light");
        assert_eq!(saved["state"]["currentSection"], "projects");

        let req = test::TestRequest::get().uri("/api/preferences").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["theme"], "light");
    }

    #[actix_web::test]
    async fn unknown_theme_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(update_preferences_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/preferences")
            .set_json(json!({ "theme": "sepia", "currentSection": "about" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
