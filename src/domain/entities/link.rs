//! Link entity and the submission it is created from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use validator::Validate;

use crate::domain::validation::{required_text, required_url};

/// A submitted link as stored.
///
/// Links are immutable once created: there is no update or delete path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        title: String,
        url: String,
        description: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            url,
            description,
            created_at,
            updated_at,
        }
    }

    /// Host part of the URL, shown next to the title on the listing page.
    pub fn host(&self) -> Option<String> {
        url::Url::parse(&self.url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
    }
}

/// Validated input for creating a new link.
///
/// Obtained from [`LinkSubmission::into_new_link`] after validation passes,
/// or from [`crate::domain::sample::generate_sample_link`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub title: String,
    pub url: String,
    pub description: String,
}

/// Raw fields posted by a client.
///
/// Missing and `null` fields deserialize as empty strings so that they are
/// reported as `required` instead of failing extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct LinkSubmission {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "required_text"), length(max = 255, code = "max"))]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "required_url"), length(max = 255, code = "max"))]
    pub url: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "required_text"), length(max = 255, code = "max"))]
    pub description: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl LinkSubmission {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: description.into(),
        }
    }

    /// Strips surrounding whitespace from every field.
    pub fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            url: self.url.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }

    /// Converts an already validated submission into an insert payload.
    pub fn into_new_link(self) -> NewLink {
        NewLink {
            title: self.title,
            url: self.url,
            description: self.description,
        }
    }
}
