//! Absolute URL checks for submitted links.
//!
//! A submitted URL is stored exactly as typed, so this module only decides
//! whether the input is acceptable and never rewrites it.

use url::Url;

/// Reasons a string is not an absolute URL.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL must contain a scheme followed by '://'")]
    MissingScheme,

    #[error("URL must contain a host")]
    MissingHost,

    #[error("URL must not contain whitespace")]
    Whitespace,
}

/// Checks that `input` is an absolute URL of the form `scheme://host[...]`.
///
/// # Rules
///
/// 1. No whitespace anywhere in the input
/// 2. Parses with the WHATWG URL parser without a base URL
/// 3. The scheme is immediately followed by `://`
/// 4. The host is present and non-empty
///
/// Scheme-relative (`//example.com`), path-only (`/page`) and bare host
/// (`example.com`) inputs are rejected.
///
/// # Errors
///
/// Returns the first [`UrlError`] rule the input breaks.
///
/// # Examples
///
/// ```ignore
/// assert!(check_absolute_url("http://example.com").is_ok());
/// assert!(check_absolute_url("https://example.com/a?b=c#d").is_ok());
///
/// assert!(check_absolute_url("foo.com").is_err());
/// assert!(check_absolute_url("//invalid-url.com").is_err());
/// assert!(check_absolute_url("mailto:test@example.com").is_err());
/// ```
pub fn check_absolute_url(input: &str) -> Result<(), UrlError> {
    if input.chars().any(char::is_whitespace) {
        return Err(UrlError::Whitespace);
    }

    let url = Url::parse(input).map_err(|e| UrlError::InvalidFormat(e.to_string()))?;

    let separator = input.find("://").ok_or(UrlError::MissingScheme)?;
    if !input[..separator].eq_ignore_ascii_case(url.scheme()) {
        return Err(UrlError::MissingScheme);
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlError::MissingHost),
    }
}
