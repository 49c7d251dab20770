//! Coercion of user-typed text into a fetchable URL.

use ::url::Url;

use crate::error::{AppError, ErrorKind};

/// Message shown when the coerced input still is not an absolute URL.
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL.";

/// Return `raw` unchanged when it already starts with `http://`, `https://`
/// or `//` (case-insensitive); otherwise prepend `https://`.
pub fn ensure_http_url(raw: &str) -> String {
    if has_scheme_prefix(raw) {
        raw.to_string()
    } else {
        format!("https://{raw}")
    }
}

/// Parse `candidate` as an absolute URL.
///
/// Protocol-relative input has no base to resolve against and is rejected.
pub fn parse_absolute(candidate: &str) -> Result<Url, AppError> {
    Url::parse(candidate)
        .map_err(|e| AppError::with_source(ErrorKind::Validation, INVALID_URL_MESSAGE, e))
}

fn has_scheme_prefix(raw: &str) -> bool {
    let lower = raw.get(..8).unwrap_or(raw).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("//")
}
