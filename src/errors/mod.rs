//! Error handling module for the contact list backend.
//!
//! Provides centralized error types with mapping to HTTP status codes and the
//! `{"error": message}` response body.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Client input failed a precondition
    Validation(String),
    /// Request could not be understood
    BadRequest(String),
    /// Database error
    Database(String),
    /// Internal server error
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Database(msg) => msg.clone(),
            AppError::Internal(msg) => msg.clone(),
        }
    }

    /// Whether the caller can fix the request and resubmit it.
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(format!("Database error: {}", err))
    }
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Handler-level error: the logged reason plus the message shown to the caller.
#[derive(Debug)]
pub struct ApiError {
    pub error: AppError,
    pub message: String,
}

impl ApiError {
    pub fn new(error: AppError, message: impl Into<String>) -> Self {
        Self {
            error,
            message: message.into(),
        }
    }

    /// Client errors carry their own message; everything else is masked.
    pub fn or_generic(error: AppError, generic: &str) -> Self {
        let message = if error.is_client_error() {
            error.message()
        } else {
            generic.to_string()
        };
        Self { error, message }
    }

    pub fn status_code(&self) -> StatusCode {
        self.error.status_code()
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        let message = error.message();
        Self { error, message }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let reason = rejection.body_text();
        ApiError::new(AppError::BadRequest(reason), "Invalid JSON body.")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("ERROR: {}", self.error);
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.message,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Database("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_storage_errors_are_masked() {
        let err = ApiError::or_generic(
            AppError::Database("disk I/O error".into()),
            "Failed to get contacts.",
        );
        assert_eq!(err.message, "Failed to get contacts.");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = ApiError::or_generic(
            AppError::Validation("Must provide a name.".into()),
            "Failed to create new contact.",
        );
        assert_eq!(err.message, "Must provide a name.");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
