//! Link submission and listing service.

use std::sync::Arc;

use validator::Validate;

use crate::domain::entities::{Link, LinkSubmission};
use crate::domain::repositories::LinkRepository;
use crate::domain::validation::FieldErrors;
use crate::error::AppError;

/// Where the browser is sent after a successful submission.
pub const LISTING_PATH: &str = "/";

/// Result of a submission that reached the store or was rejected by validation.
///
/// Storage failures are not an outcome: they surface as [`AppError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The link was stored; the client should be sent to `redirect_to`.
    Success { link: Link, redirect_to: String },
    /// Nothing was stored; `errors` explains every rejected field.
    Failure { errors: FieldErrors },
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Success { .. })
    }
}

/// Service validating and storing submitted links.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Validates a submission and stores it when every field passes.
    ///
    /// Fields are trimmed first. All fields are checked, so a single
    /// [`SubmitOutcome::Failure`] reports every problem at once. A valid
    /// submission results in exactly one insert; a rejected one in none.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store fails.
    pub async fn submit(&self, submission: LinkSubmission) -> Result<SubmitOutcome, AppError> {
        let submission = submission.trimmed();

        if let Err(e) = submission.validate() {
            let errors = FieldErrors::from(&e);
            tracing::debug!(
                fields = ?errors.fields().collect::<Vec<_>>(),
                "Link submission rejected"
            );
            return Ok(SubmitOutcome::Failure { errors });
        }

        let link = self
            .link_repository
            .insert(submission.into_new_link())
            .await?;
        tracing::info!(link_id = link.id, "Link stored");

        Ok(SubmitOutcome::Success {
            link,
            redirect_to: LISTING_PATH.to_string(),
        })
    }

    /// Returns every stored link in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store fails.
    pub async fn list(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_all().await
    }

    /// Counts stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store fails.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }
}
