use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::api::email_relay::OutboundEmail;
use crate::error::AppError;
use crate::handlers::contact_dtos::{ContactRequest, ContactResponse};
use crate::utils::validation::validate_contact;
use crate::AppState;

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactResponse>, AppError> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::warn!("Rejected contact payload: {}", rejection.body_text());
        AppError::InvalidPayload
    })?;

    if let Err(reason) = validate_contact(&req) {
        tracing::debug!("Contact form failed validation: {}", reason);
        return Err(AppError::Validation(reason));
    }

    let email = OutboundEmail::from_contact(&req, &state.config);
    match state.mailer.send(email).await {
        Ok(()) => {
            tracing::info!("Relayed contact message from {}", req.email.trim());
            Ok(Json(ContactResponse::ok()))
        }
        Err(e) => {
            tracing::error!("Error sending email: {}", e);
            Err(AppError::Mail(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::email_relay::{MailError, Mailer, MockMailer};
    use crate::config::app_config::Config;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_state(mailer: MockMailer) -> Arc<AppState> {
        let config = Config::from_lookup(|key| match key {
            "RESEND_API_KEY" => Some("re_test".to_string()),
            "EMAIL_USER" => Some("owner@example.com".to_string()),
            _ => None,
        })
        .unwrap();
        let mailer: Arc<dyn Mailer> = Arc::new(mailer);
        Arc::new(AppState { config, mailer })
    }

    async fn post_contact(state: Arc<AppState>, body: &str) -> (StatusCode, ContactResponse) {
        let response = crate::app(state)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/contact")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn relays_valid_message() {
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .withf(|email| {
                email.to == "owner@example.com"
                    && email.subject == "New Portfolio Contact"
                    && email.text == "Name: Ada\nEmail: ada@example.com\nMessage: I'd like to hire you."
            })
            .times(1)
            .returning(|_| Ok(()));

        let (status, body) = post_contact(
            test_state(mailer),
            r#"{"name":"Ada","email":"ada@example.com","message":"I'd like to hire you."}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, ContactResponse::ok());
    }

    #[tokio::test]
    async fn non_string_fields_are_invalid_form_data() {
        let mut mailer = MockMailer::new();
        mailer.expect_send().never();

        let (status, body) = post_contact(
            test_state(mailer),
            r#"{"name":42,"email":"ada@example.com","message":"I'd like to hire you."}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, ContactResponse::failure("Invalid form data"));
    }

    #[tokio::test]
    async fn missing_field_is_invalid_form_data() {
        let mut mailer = MockMailer::new();
        mailer.expect_send().never();

        let (status, body) =
            post_contact(test_state(mailer), r#"{"name":"Ada","email":"ada@example.com"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error.as_deref(), Some("Invalid form data"));
    }

    #[tokio::test]
    async fn invalid_email_never_reaches_mailer() {
        let mut mailer = MockMailer::new();
        mailer.expect_send().never();

        let (status, body) = post_contact(
            test_state(mailer),
            r#"{"name":"Ada","email":"not-an-email","message":"I'd like to hire you."}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, ContactResponse::failure("Please enter a valid email address"));
    }

    #[tokio::test]
    async fn mailer_failure_surfaces_provider_message() {
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .times(1)
            .returning(|_| Err(MailError::Provider("The domain is not verified".to_string())));

        let (status, body) = post_contact(
            test_state(mailer),
            r#"{"name":"Ada","email":"ada@example.com","message":"I'd like to hire you."}"#,
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, ContactResponse::failure("The domain is not verified"));
    }

    #[tokio::test]
    async fn health_check_responds_ok() {
        let response = crate::app(test_state(MockMailer::new()))
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"OK");
    }
}
