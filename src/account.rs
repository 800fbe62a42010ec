//! Account URL validation.
//!
//! Rejections happen locally and never reach the network; the messages are
//! shown to the user as-is.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("URL cannot be empty")]
    Empty,
    #[error("Must be a valid Instagram URL")]
    NotInstagram,
}

/// Trim and validate a candidate account URL, returning the cleaned form.
pub fn validate_account_url(raw: &str) -> Result<String, ValidationError> {
    let url = raw.trim();
    if url.is_empty() {
        return Err(ValidationError::Empty);
    }
    if !url.contains("instagram.com") {
        return Err(ValidationError::NotInstagram);
    }
    Ok(url.to_string())
}
