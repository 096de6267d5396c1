use crate::error::ApiError;
use async_trait::async_trait;
use serde_json::Value;

/// Transport seam used by the search service.
///
/// Implemented by the HTTP client; tests substitute an in-memory double.
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// GET `endpoint` with the given query parameters and return the raw body
    async fn get_json(&self, endpoint: &str, params: &[(&str, String)])
    -> Result<Value, ApiError>;
}
