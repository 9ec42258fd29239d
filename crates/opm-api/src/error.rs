//! # Application Error
//!
//! Maps the registry error taxonomy to structured HTTP responses with
//! proper status codes and error bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use opm_core::{RegistryError, ValidationError};

/// Application-level error type that maps to HTTP responses.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Request validation failed. Carries every violated constraint.
    #[error("validation error: {0}")]
    Validation(ValidationError),

    /// Authentication required or insufficient.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The backing store is unavailable; the caller may retry.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Validation(v) => Self::Validation(v),
            RegistryError::NotFound { .. } => Self::NotFound(err.to_string()),
            RegistryError::Unauthorized(msg) => Self::Unauthorized(msg),
            RegistryError::StoreUnavailable(msg) => Self::StoreUnavailable(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let mut error = serde_json::json!({
            "code": status.as_u16(),
            "message": self.to_string(),
        });
        if let AppError::Validation(v) = &self {
            error["violations"] = serde_json::json!(v.violations);
        }
        let body = serde_json::json!({ "error": error });
        (status, axum::Json(body)).into_response()
    }
}
