//! Contact API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{parse_id, ApiJson, ApiResult};
use crate::errors::ApiError;
use crate::models::{Contact, ContactInput};
use crate::AppState;

/// GET /api/contacts - List all contacts.
pub async fn list_contacts(State(state): State<AppState>) -> ApiResult<Json<Vec<Contact>>> {
    let contacts = state
        .repo
        .list_contacts()
        .await
        .map_err(|e| ApiError::or_generic(e, "Failed to get contacts."))?;

    Ok(Json(contacts))
}

/// POST /api/contacts - Create a new contact.
pub async fn create_contact(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ContactInput>,
) -> ApiResult<(StatusCode, Json<Contact>)> {
    input.validate()?;

    let contact = state
        .repo
        .create_contact(input)
        .await
        .map_err(|e| ApiError::or_generic(e, "Failed to create new contact."))?;

    tracing::info!(id = %contact.id, "Created contact");
    Ok((StatusCode::CREATED, Json(contact)))
}

/// GET /api/contacts/:id - Get a single contact, `null` when absent.
pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Option<Contact>>> {
    let key = parse_id(&id)?.to_string();

    let contact = state
        .repo
        .get_contact(&key)
        .await
        .map_err(|e| ApiError::or_generic(e, "Failed to get contact"))?;

    Ok(Json(contact))
}

/// PUT /api/contacts/:id - Replace a contact.
///
/// Responds with the submitted body and the path id whether or not a
/// contact with that id exists.
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<ContactInput>,
) -> ApiResult<Json<Contact>> {
    let key = parse_id(&id)?.to_string();
    input.validate()?;

    state
        .repo
        .replace_contact(&key, &input)
        .await
        .map_err(|e| ApiError::or_generic(e, "Failed to update contact"))?;

    Ok(Json(input.into_contact(id)))
}

/// DELETE /api/contacts/:id - Delete a contact and echo its id.
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<String>> {
    let key = parse_id(&id)?.to_string();

    state
        .repo
        .delete_contact(&key)
        .await
        .map_err(|e| ApiError::or_generic(e, "Failed to delete contact"))?;

    Ok(Json(id))
}
