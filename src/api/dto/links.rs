//! DTOs for the link endpoints.
//!
//! The request body of `POST /api/links` is
//! [`crate::domain::entities::LinkSubmission`] itself.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// JSON representation of a stored link.
#[derive(Debug, Serialize)]
pub struct LinkItem {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Link> for LinkItem {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            title: link.title,
            url: link.url,
            description: link.description,
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}

/// Response containing every stored link.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub items: Vec<LinkItem>,
}
