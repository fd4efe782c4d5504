//! Field-level validation rules and the error bag they produce.
//!
//! Rules are attached to [`crate::domain::entities::LinkSubmission`] with the
//! `validator` derive. Each rule reports a short code (`required`, `max`, `url`,
//! `control`); [`FieldErrors`] turns those codes into the human-readable messages
//! shown next to form fields and returned by the JSON API.

use std::collections::BTreeMap;

use serde::Serialize;
use validator::{ValidationError, ValidationErrors};

use crate::utils::absolute_url::check_absolute_url;

/// Maximum length, in characters, of every submitted text field.
pub const MAX_FIELD_LENGTH: usize = 255;

/// A rule a submitted field can break.
///
/// Variants are declared in reporting order: messages for one field are
/// always listed required → max → url → control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    Required,
    Max,
    Url,
    Control,
}

impl Rule {
    /// Maps a `validator` error code back to a rule.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "required" => Some(Self::Required),
            "max" | "length" => Some(Self::Max),
            "url" => Some(Self::Url),
            "control" => Some(Self::Control),
            _ => None,
        }
    }

    /// Renders the message shown for `field`.
    pub fn message(self, field: &str) -> String {
        match self {
            Self::Required => format!("The {field} field is required."),
            Self::Max => format!(
                "The {field} field must not be greater than {MAX_FIELD_LENGTH} characters."
            ),
            Self::Url => format!("The {field} field must be a valid URL."),
            Self::Control => format!("The {field} field must not contain control characters."),
        }
    }
}

/// Rejects values that are empty or contain only whitespace.
pub fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Rejects control characters other than tab, carriage return and line feed.
///
/// PostgreSQL refuses NUL in text columns, so such input must never reach
/// the store.
pub fn plain_text(value: &str) -> Result<(), ValidationError> {
    let forbidden = value
        .chars()
        .any(|c| c.is_control() && !matches!(c, '\t' | '\n' | '\r'));
    if forbidden {
        return Err(ValidationError::new("control"));
    }
    Ok(())
}

/// Requires non-empty plain text.
pub fn required_text(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    plain_text(value)
}

/// Requires a non-empty absolute URL.
///
/// An empty value reports `required` only, so the form does not also claim
/// that nothing is an invalid URL.
pub fn required_url(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    plain_text(value)?;

    check_absolute_url(value).map_err(|e| {
        let mut error = ValidationError::new("url");
        error.add_param("reason".into(), &e.to_string());
        error
    })
}

/// Messages describing why a submission was rejected, keyed by field name.
///
/// Serializes as a plain JSON object: `{"url": ["The url field must be a valid URL."]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message for `field`.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one message.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// All messages for `field`, empty when the field is valid.
    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The first message for `field`, as shown inline on the form.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.get(field).first().map(String::as_str)
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Names of the invalid fields, in alphabetical order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut field_errors = FieldErrors::new();

        for (field, errors) in errors.field_errors() {
            let field: &str = &field;

            let mut rules: Vec<Rule> = errors
                .iter()
                .filter_map(|e| Rule::from_code(&e.code))
                .collect();
            rules.sort();
            rules.dedup();

            // An empty field only reports that it is required.
            if rules.first() == Some(&Rule::Required) {
                rules.truncate(1);
            }

            for rule in rules {
                field_errors.add(field, rule.message(field));
            }
        }

        field_errors
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        FieldErrors::from(&errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_messages() {
        assert_eq!(
            Rule::Required.message("title"),
            "The title field is required."
        );
        assert_eq!(
            Rule::Max.message("description"),
            "The description field must not be greater than 255 characters."
        );
        assert_eq!(Rule::Url.message("url"), "The url field must be a valid URL.");
        assert_eq!(
            Rule::Control.message("title"),
            "The title field must not contain control characters."
        );
    }

    #[test]
    fn test_rule_from_code() {
        assert_eq!(Rule::from_code("required"), Some(Rule::Required));
        assert_eq!(Rule::from_code("max"), Some(Rule::Max));
        assert_eq!(Rule::from_code("length"), Some(Rule::Max));
        assert_eq!(Rule::from_code("url"), Some(Rule::Url));
        assert_eq!(Rule::from_code("regex"), None);
    }

    #[test]
    fn test_required_rejects_blank() {
        assert!(required("").is_err());
        assert!(required("   ").is_err());
        assert!(required("x").is_ok());
    }

    #[test]
    fn test_plain_text_rejects_nul_and_control() {
        assert_eq!(required_text("a\u{0}b").unwrap_err().code, "control");
        assert_eq!(required_text("bell\u{7}").unwrap_err().code, "control");
        assert_eq!(required_url("http://example.com/\u{0}").unwrap_err().code, "control");
        assert!(required_text("line one\r\nline two\tend").is_ok());
        assert_eq!(required_text("").unwrap_err().code, "required");
    }

    #[test]
    fn test_required_url_codes() {
        assert_eq!(required_url("").unwrap_err().code, "required");
        assert_eq!(required_url("foo.com").unwrap_err().code, "url");
        assert!(required_url("http://example.com").is_ok());
    }

    #[test]
    fn test_field_errors_accessors() {
        let mut errors = FieldErrors::new();
        assert!(errors.is_empty());
        assert!(errors.get("title").is_empty());
        assert_eq!(errors.first("title"), None);

        errors.add("url", "first");
        errors.add("url", "second");
        errors.add("title", "only");

        assert_eq!(errors.len(), 2);
        assert!(errors.has("url"));
        assert!(!errors.has("description"));
        assert_eq!(errors.get("url"), ["first", "second"]);
        assert_eq!(errors.first("url"), Some("first"));
        assert_eq!(errors.fields().collect::<Vec<_>>(), ["title", "url"]);
    }

    #[test]
    fn test_field_errors_serialize_as_object() {
        let mut errors = FieldErrors::new();
        errors.add("url", Rule::Url.message("url"));

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "url": ["The url field must be a valid URL."] })
        );
    }

    #[test]
    fn test_from_validation_errors_orders_and_collapses() {
        let mut raw = ValidationErrors::new();
        raw.add("url", ValidationError::new("url"));
        raw.add("url", ValidationError::new("max"));
        raw.add("title", ValidationError::new("max"));
        raw.add("title", ValidationError::new("required"));

        let errors = FieldErrors::from(&raw);

        assert_eq!(
            errors.get("url"),
            [
                "The url field must not be greater than 255 characters.",
                "The url field must be a valid URL."
            ]
        );
        assert_eq!(errors.get("title"), ["The title field is required."]);
    }
}
