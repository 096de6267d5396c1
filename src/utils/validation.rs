//! Input validation utilities
//!
//! Checks that run locally before any network activity.

use crate::error::ValidationError;

/// A search query must be non-empty; whitespace counts as content
pub fn validate_query(query: &str) -> Result<(), ValidationError> {
    if query.is_empty() {
        return Err(ValidationError::MissingQuery);
    }
    Ok(())
}

/// Validate that a base URL is properly formatted
pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::InvalidUrl {
            url: url.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ValidationError::InvalidUrl {
            url: url.to_string(),
            reason: "URL must start with http:// or https://".to_string(),
        });
    }

    Ok(())
}
