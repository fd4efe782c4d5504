//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::{links_handler, submit_form_handler, submit_handler};
use axum::{Router, routing::get};

/// Browser-facing routes.
///
/// # Endpoints
///
/// - `GET  /`       - Listing page with every stored link
/// - `GET  /submit` - Empty submission form
/// - `POST /submit` - Store a link, or re-render the form with errors
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(links_handler))
        .route("/submit", get(submit_form_handler).post(submit_handler))
}
