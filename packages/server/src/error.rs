use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use namecraft_generator::SubmitError;

const INVALID_REQUEST_MESSAGE: &str = "请求内容无效，请检查取名需求后重试";

/// Main application error type that all handlers should return
#[derive(Debug, Error)]
pub enum AppError {
    /// Form input needs correcting; carries the prompt shown to the user
    #[error("Validation error: {0}")]
    Validation(String),

    /// Body could not be parsed into a naming request
    #[error("Invalid request body: {0}")]
    InvalidRequest(String),

    #[error("Generation already in progress")]
    GenerationInProgress,

    #[error("Nothing to regenerate")]
    NothingToRegenerate,
}

/// Structured error response format for API consistency
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: ErrorDetail,
    request_id: String,
}

/// Error detail structure with machine-readable codes
#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

impl AppError {
    /// Convert AppError to appropriate HTTP status code and error code
    fn to_status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
            AppError::GenerationInProgress => (StatusCode::CONFLICT, "GENERATION_IN_PROGRESS"),
            AppError::NothingToRegenerate => (StatusCode::BAD_REQUEST, "NOTHING_TO_REGENERATE"),
        }
    }

    /// Get user-friendly error message
    fn to_user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::InvalidRequest(_) => INVALID_REQUEST_MESSAGE.to_string(),
            AppError::GenerationInProgress => SubmitError::InProgress.user_message(),
            AppError::NothingToRegenerate => SubmitError::NothingToRegenerate.user_message(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl From<SubmitError> for AppError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Validation(_) => AppError::Validation(err.user_message()),
            SubmitError::InProgress => AppError::GenerationInProgress,
            SubmitError::NothingToRegenerate => AppError::NothingToRegenerate,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.to_status_and_code();
        let request_id = Uuid::new_v4().to_string();

        warn!(request_id = %request_id, code = code, "Request rejected: {}", self);

        let body = ErrorResponse {
            success: false,
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_user_message(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}
