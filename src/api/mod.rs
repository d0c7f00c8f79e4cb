//! REST API module.
//!
//! Contains the contact routes and the JSON plumbing shared by the handlers.

mod contacts;

pub use contacts::*;

use axum::extract::FromRequest;
use uuid::Uuid;

use crate::errors::{ApiError, AppError};

/// JSON body extractor whose rejections use the `{"error": ...}` body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Response type of every handler.
pub type ApiResult<T> = Result<T, ApiError>;

/// Check that a path segment is a well-formed contact id.
pub fn parse_id(id: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(id).map_err(|e| {
        ApiError::new(
            AppError::BadRequest(format!("Invalid contact id {:?}: {}", id, e)),
            "Invalid contact id",
        )
    })
}
