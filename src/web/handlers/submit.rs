//! Submission form handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::application::services::SubmitOutcome;
use crate::domain::entities::LinkSubmission;
use crate::domain::validation::FieldErrors;
use crate::error::AppError;
use crate::state::AppState;

/// A form input with its current value and inline messages.
#[derive(Debug, Default)]
pub struct FormField {
    pub value: String,
    pub errors: Vec<String>,
}

impl FormField {
    fn new(name: &str, value: String, errors: &FieldErrors) -> Self {
        Self {
            value,
            errors: errors.get(name).to_vec(),
        }
    }
}

/// Template for the submission form.
///
/// Renders `templates/submit.html`. After a rejected submission the posted
/// values are kept and each field lists its messages.
#[derive(Template, WebTemplate, Default)]
#[template(path = "submit.html")]
pub struct SubmitTemplate {
    pub title: FormField,
    pub url: FormField,
    pub description: FormField,
    pub has_errors: bool,
}

impl SubmitTemplate {
    /// Repopulates the form from a rejected submission.
    pub fn rejected(submission: LinkSubmission, errors: &FieldErrors) -> Self {
        Self {
            title: FormField::new("title", submission.title, errors),
            url: FormField::new("url", submission.url, errors),
            description: FormField::new("description", submission.description, errors),
            has_errors: !errors.is_empty(),
        }
    }
}

/// Renders the empty submission form.
///
/// # Endpoint
///
/// `GET /submit`
pub async fn submit_form_handler() -> SubmitTemplate {
    SubmitTemplate::default()
}

/// Validates and stores a submitted link.
///
/// # Endpoint
///
/// `POST /submit` (`application/x-www-form-urlencoded`)
///
/// # Responses
///
/// - **302 Found** with `Location: /` once the link is stored
/// - **422 Unprocessable Entity** with the form re-rendered, posted values
///   kept and messages attached to each rejected field
pub async fn submit_handler(
    State(state): State<AppState>,
    Form(submission): Form<LinkSubmission>,
) -> Result<Response, AppError> {
    let posted = submission.clone();

    match state.link_service.submit(submission).await? {
        SubmitOutcome::Success { redirect_to, .. } => {
            Ok((StatusCode::FOUND, [(header::LOCATION, redirect_to)]).into_response())
        }
        SubmitOutcome::Failure { errors } => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            SubmitTemplate::rejected(posted, &errors),
        )
            .into_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::Rule;

    #[test]
    fn test_empty_form_renders() {
        let html = SubmitTemplate::default().render().unwrap();

        assert!(html.contains(r#"action="/submit""#));
        assert!(html.contains(r#"name="title""#));
        assert!(html.contains(r#"name="url""#));
        assert!(html.contains(r#"name="description""#));
        assert!(!html.contains(r#"class="error""#));
    }

    #[test]
    fn test_rejected_form_keeps_values_and_messages() {
        let mut errors = FieldErrors::new();
        errors.add("url", Rule::Url.message("url"));

        let template = SubmitTemplate::rejected(
            LinkSubmission::new("Kept title", "foo.com", "Kept description"),
            &errors,
        );
        assert!(template.has_errors);
        assert!(template.title.errors.is_empty());

        let html = template.render().unwrap();
        assert!(html.contains("Kept title"));
        assert!(html.contains("foo.com"));
        assert!(html.contains("Kept description"));
        assert!(html.contains("The url field must be a valid URL."));
    }

    #[test]
    fn test_rejected_form_escapes_values() {
        let template = SubmitTemplate::rejected(
            LinkSubmission::new("<script>alert(1)</script>", "", ""),
            &FieldErrors::new(),
        );

        let html = template.render().unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
    }
}
