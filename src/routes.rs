//! Top-level router configuration combining web and API routes.
//!
//! # Route Structure
//!
//! - `GET  /`           - Listing page
//! - `GET  /submit`     - Submission form
//! - `POST /submit`     - Form submission (302 to `/` or 422 with errors)
//! - `GET  /health`     - Health check
//! - `/api/*`           - JSON API
//!
//! Unknown paths answer with a JSON `not_found` error.

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::error::AppError;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::http::Uri;
use axum::routing::get;
use serde_json::json;

/// Constructs the application router with all routes and middleware.
///
/// Trailing-slash normalization is applied by [`crate::server::run`] around
/// the returned router, so tests can drive it directly.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("Page not found", json!({ "path": uri.path() }))
}
