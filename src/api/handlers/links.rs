//! Handlers for the JSON link endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::links::{LinkItem, LinkListResponse};
use crate::application::services::SubmitOutcome;
use crate::domain::entities::LinkSubmission;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every stored link.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// # Response
///
/// ```json
/// {
///   "items": [
///     {
///       "id": 1,
///       "title": "Example Title",
///       "url": "http://example.com",
///       "description": "Example description.",
///       "created_at": "2024-01-15T10:30:00Z",
///       "updated_at": "2024-01-15T10:30:00Z"
///     }
///   ]
/// }
/// ```
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<LinkListResponse>, AppError> {
    let links = state.link_service.list().await?;

    Ok(Json(LinkListResponse {
        items: links.into_iter().map(LinkItem::from).collect(),
    }))
}

/// Validates and stores a link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Example Title",
///   "url": "http://example.com",
///   "description": "Example description."
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with the rejected fields in `error.details`:
///
/// ```json
/// {
///   "error": {
///     "code": "validation_error",
///     "message": "The given data was invalid.",
///     "details": { "url": ["The url field must be a valid URL."] }
///   }
/// }
/// ```
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<LinkSubmission>,
) -> Result<(StatusCode, Json<LinkItem>), AppError> {
    match state.link_service.submit(payload).await? {
        SubmitOutcome::Success { link, .. } => Ok((StatusCode::CREATED, Json(link.into()))),
        SubmitOutcome::Failure { errors } => Err(AppError::validation(&errors)),
    }
}
