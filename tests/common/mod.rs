#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use link_board::domain::entities::Link;
use link_board::domain::repositories::LinkRepository;
use link_board::infrastructure::persistence::{InMemoryLinkRepository, PgLinkRepository};
use link_board::routes::app_router;
use link_board::state::AppState;

pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let state = AppState::new(repo.clone());

    (state, repo)
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(PgLinkRepository::new(Arc::new(pool))))
}

/// Full application router over an empty in-memory store.
pub fn create_test_server() -> (TestServer, Arc<InMemoryLinkRepository>) {
    let (state, repo) = create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();

    (server, repo)
}

pub async fn stored_links(repo: &InMemoryLinkRepository) -> Vec<Link> {
    repo.list_all().await.unwrap()
}

pub async fn insert_link(pool: &PgPool, title: &str, url: &str, description: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO links (title, url, description) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(title)
    .bind(url)
    .bind(description)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// `http://example.com/aaaa…` padded to exactly `len` characters.
pub fn url_of_length(len: usize) -> String {
    let prefix = "http://example.com/";
    format!("{prefix}{}", "a".repeat(len - prefix.len()))
}
