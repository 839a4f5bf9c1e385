use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::handlers::contact_dtos::ContactResponse;

pub const SEND_FAILED_MESSAGE: &str = "Failed to send email";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid form data")]
    InvalidPayload,
    #[error("{0}")]
    Validation(&'static str),
    #[error("{0}")]
    Mail(String),
    #[error("Not found")]
    NotFound,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidPayload | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Mail(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn user_message(&self) -> String {
        match self {
            // Provider errors can come back empty; never hand the client a blank message.
            AppError::Mail(reason) if reason.trim().is_empty() => SEND_FAILED_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(ContactResponse::failure(self.user_message()))).into_response()
    }
}
