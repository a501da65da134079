use actix_web::{post, web, HttpResponse};
use tracing::info;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::application::domain::entities::{ContactForm, ContactMessage};
use crate::shared::api::{service_error_response, ApiResponse};
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactForm,
    responses(
        (status = 201, description = "Message accepted", body = inline(SuccessResponse<ContactMessage>)),
        (status = 400, description = "Body is not a contact form", body = ErrorResponse),
        (status = 502, description = "Upstream API failed", body = ErrorResponse)
    )
)]
#[post("/api/contact")]
pub async fn send_message_handler(
    form: web::Json<ContactForm>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.contact.use_send_message(form.into_inner()).await {
        Ok(resp) => {
            info!(id = %resp.data.id, "contact message sent");
            ApiResponse::created(resp.data, resp.message.as_deref())
        }
        Err(err) => service_error_response(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::OfflineUpstream;
    use crate::modules::contact::application::domain::entities::MessageStatus;
    use crate::modules::contact::application::ports::outgoing::ContactRepository;
    use crate::shared::error::ServiceError;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use mockall::mock;
    use serde_json::{json, Value};

    mock! {
        pub ContactRepositoryMock {}
        #[async_trait]
        impl ContactRepository for ContactRepositoryMock {
            async fn send_message(&self, form: ContactForm) -> Result<ApiResponse<ContactMessage>, ServiceError>;
            async fn update_message_status(&self, id: &str, status: MessageStatus) -> Result<ApiResponse<ContactMessage>, ServiceError>;
            async fn delete_message(&self, id: &str) -> Result<ApiResponse<()>, ServiceError>;
        }
    }

    fn valid_form() -> Value {
        json!({
            "name": "Alex Doe",
            "email": "alex@example.test",
            "subject": "Hello",
            "message": "Nice portfolio!"
        })
    }

    #[actix_web::test]
    async fn accepted_message_is_unread() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(send_message_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(valid_form())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Message sent successfully");
        assert_eq!(body["data"]["status"], "unread");
        assert!(body["data"]["id"].as_str().unwrap().starts_with("msg-"));
    }

    #[actix_web::test]
    async fn forms_are_forwarded_without_local_checks() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(send_message_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({ "name": "A", "email": "not-an-email", "message": "hi" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["email"], "not-an-email");
    }

    #[actix_web::test]
    async fn upstream_rejection_lands_in_app_error() {
        let mut repository = MockContactRepositoryMock::new();
        repository.expect_send_message().times(1).returning(|_| {
            Err(ServiceError::Http {
                status: 422,
                message: "Email is invalid".to_string(),
            })
        });
        let state = TestAppStateBuilder::default()
            .with_contact_repository(repository)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(send_message_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(valid_form())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            state.app_store.state().error.as_deref(),
            Some("Email is invalid")
        );
    }

    #[actix_web::test]
    async fn failed_send_records_app_error() {
        let state = TestAppStateBuilder::default()
            .with_contact_repository(OfflineUpstream)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(send_message_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(valid_form())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            state.app_store.state().error.as_deref(),
            Some("Failed to send message")
        );
    }
}
