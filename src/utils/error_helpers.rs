//! Helper functions for standardizing error conversions across the codebase

use crate::error::{ApiError, DisplayError};

/// Convert a reqwest send failure: requests that never left the client are
/// passed through, everything else means no response arrived.
pub fn convert_send_error(error: reqwest::Error, endpoint: &str) -> ApiError {
    if error.is_builder() {
        ApiError::Request(error)
    } else {
        ApiError::NoResponse {
            endpoint: endpoint.to_string(),
            source: error,
        }
    }
}

/// Convert JSON deserialization errors to ApiError with endpoint context
pub fn convert_json_error(error: serde_json::Error, endpoint: &str) -> ApiError {
    ApiError::InvalidBody {
        endpoint: endpoint.to_string(),
        message: format!("JSON parse error: {}", error),
    }
}

/// Convert JSON serialization errors for terminal output
pub fn convert_serialize_error(error: serde_json::Error) -> DisplayError {
    DisplayError::Serialization(error.to_string())
}
