//! API route configuration.

use crate::api::handlers::{create_link_handler, list_links_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON API routes.
///
/// # Endpoints
///
/// - `GET  /links` - List every stored link
/// - `POST /links` - Validate and store a link
pub fn routes() -> Router<AppState> {
    Router::new().route("/links", get(list_links_handler).post(create_link_handler))
}
