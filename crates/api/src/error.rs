//! HTTP error mapping
//!
//! Every failure leaves the API as a JSON body:
//!
//! ```json
//! { "code": "validation_failed", "message": "...", "errors": [ ... ] }
//! ```
//!
//! `errors` is present only for validation failures. Causes of 5xx responses
//! are logged and replaced by a generic message.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use dealdesk_core::{FieldError, ValidationError};
use dealdesk_domain::DealDeskError;
use serde::Serialize;
use tracing::error;

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

/// Errors a route handler can return
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 404
    #[error("Not found: {0}")]
    NotFound(String),

    /// 400 with per-field errors
    #[error("{0}")]
    Validation(ValidationError),

    /// 400: malformed body or rejected input
    #[error("Invalid request: {0}")]
    Invalid(String),

    /// 500
    #[error("Database error: {0}")]
    Database(String),

    /// 500
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Stable machine-readable code, also used as the log label
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::Validation(_) => "validation_failed",
            Self::Invalid(_) => "invalid_request",
            Self::Database(_) => "database_error",
            Self::Internal(_) => "internal_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::Invalid(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let body = match self {
            Self::NotFound(message) | Self::Invalid(message) => {
                ErrorBody { code, message, errors: None }
            }
            Self::Validation(validation) => ErrorBody {
                code,
                message: "Validation failed".to_string(),
                errors: Some(validation.errors),
            },
            Self::Database(message) => {
                error!(target: "database", error = %message, "Database error occurred");
                ErrorBody { code, message: "Database error".to_string(), errors: None }
            }
            Self::Internal(message) => {
                error!(target: "internal", error = %message, "Internal error occurred");
                ErrorBody { code, message: "Internal server error".to_string(), errors: None }
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<DealDeskError> for ApiError {
    fn from(err: DealDeskError) -> Self {
        match err {
            DealDeskError::NotFound(message) => Self::NotFound(message),
            DealDeskError::InvalidInput(message) => Self::Invalid(message),
            DealDeskError::Database(message) => Self::Database(message),
            DealDeskError::Config(message) | DealDeskError::Internal(message) => {
                Self::Internal(message)
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Invalid(rejection.body_text())
    }
}
