//! Listing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::domain::entities::Link;
use crate::error::AppError;
use crate::state::AppState;

/// A stored link prepared for display.
///
/// `href` is only set for `http` and `https` links; any other scheme is
/// shown as text so a stored `javascript://` URL never becomes clickable.
pub struct LinkView {
    pub title: String,
    pub url: String,
    pub href: Option<String>,
    pub host: String,
    pub description: String,
    pub created_at: String,
}

impl From<Link> for LinkView {
    fn from(link: Link) -> Self {
        Self {
            host: link.host().unwrap_or_default(),
            href: safe_href(&link.url),
            created_at: link.created_at.format("%Y-%m-%d %H:%M").to_string(),
            title: link.title,
            url: link.url,
            description: link.description,
        }
    }
}

fn safe_href(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    matches!(parsed.scheme(), "http" | "https").then(|| url.to_string())
}

/// Template for the listing page.
///
/// Renders `templates/links.html` with every stored link.
#[derive(Template, WebTemplate)]
#[template(path = "links.html")]
pub struct LinksTemplate {
    pub links: Vec<LinkView>,
}

/// Renders the listing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn links_handler(State(state): State<AppState>) -> Result<LinksTemplate, AppError> {
    let links = state.link_service.list().await?;

    Ok(LinksTemplate {
        links: links.into_iter().map(LinkView::from).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn view(url: &str) -> LinkView {
        let now = Utc::now();
        LinkView::from(Link::new(
            1,
            "Title".to_string(),
            url.to_string(),
            "Description".to_string(),
            now,
            now,
        ))
    }

    #[test]
    fn test_web_links_get_href() {
        assert_eq!(view("http://example.com").href.as_deref(), Some("http://example.com"));
        assert_eq!(
            view("HTTPS://example.com/a?b=c").href.as_deref(),
            Some("HTTPS://example.com/a?b=c")
        );
    }

    #[test]
    fn test_other_schemes_have_no_href() {
        assert_eq!(view("javascript://example.com/%0Aalert(1)").href, None);
        assert_eq!(view("ftp://example.com/file").href, None);
        assert_eq!(view("data://example.com/x").href, None);
    }

    #[test]
    fn test_listing_renders_unsafe_url_as_text() {
        let template = LinksTemplate {
            links: vec![view("javascript://example.com/%0Aalert(1)")],
        };

        let html = template.render().unwrap();
        assert!(!html.contains("href=\"javascript"));
        assert!(html.contains("Title"));
    }
}
