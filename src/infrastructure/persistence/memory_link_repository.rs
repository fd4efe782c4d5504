//! Process-local link repository.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// A link store kept in memory.
///
/// Used when no database is configured, and by tests that exercise the HTTP
/// layer without PostgreSQL. Inserts are serialised by the write lock and
/// ids are assigned sequentially starting at 1. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: RwLock<Vec<Link>>,
}

impl InMemoryLinkRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory link store");
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.write().await;

        let now = Utc::now();
        let link = Link::new(
            links.len() as i64 + 1,
            new_link.title,
            new_link.url,
            new_link.description,
            now,
            now,
        );
        links.push(link.clone());

        Ok(link)
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        Ok(self.links.read().await.clone())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.links.read().await.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_link(title: &str) -> NewLink {
        NewLink {
            title: title.to_string(),
            url: "https://example.com".to_string(),
            description: "description".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = InMemoryLinkRepository::new();

        let first = repo.insert(new_link("first")).await.unwrap();
        let second = repo.insert(new_link("second")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.created_at, first.updated_at);
    }

    #[tokio::test]
    async fn test_list_all_keeps_insertion_order() {
        let repo = InMemoryLinkRepository::new();
        assert!(repo.list_all().await.unwrap().is_empty());

        for title in ["a", "b", "c"] {
            repo.insert(new_link(title)).await.unwrap();
        }

        let titles: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.title)
            .collect();
        assert_eq!(titles, ["a", "b", "c"]);
        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_are_all_kept() {
        let repo = Arc::new(InMemoryLinkRepository::new());

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.insert(new_link(&format!("link {i}"))).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let mut ids: Vec<i64> = repo.list_all().await.unwrap().iter().map(|l| l.id).collect();
        ids.sort();
        assert_eq!(ids, (1..=20).collect::<Vec<_>>());
    }
}
