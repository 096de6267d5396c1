use crate::core::services::traits::ProductApi;
use crate::error::ApiError;
use crate::utils::error_helpers::{convert_json_error, convert_send_error};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, header};
use serde_json::Value;

pub const DEFAULT_BASE_URL: &str = "https://www.klarna.com/us/shopping";
pub const PRODUCTS_ENDPOINT: &str = "/public/openai/v0/products";
const USER_AGENT: &str = concat!("klarnaai-cli/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct KlarnaClient {
    client: Client,
    pub base_url: String,
}

impl KlarnaClient {
    // No request timeout: the transport default applies
    pub fn new(base_url: String) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(ApiError::Request)?;

        Ok(KlarnaClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn build_request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/json")
    }

    /// Issue one request and return the parsed JSON body unmodified.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        params: Option<&[(&str, String)]>,
    ) -> Result<Value, ApiError> {
        let mut request = self.build_request(method, endpoint);
        if let Some(params) = params {
            request = request.query(params);
        }

        let response = request
            .send()
            .await
            .map_err(|e| convert_send_error(e, endpoint))?;

        Self::handle_response(response, endpoint).await
    }

    pub async fn handle_response(response: Response, endpoint: &str) -> Result<Value, ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| convert_send_error(e, endpoint))?;

        if status.is_success() {
            if body.trim().is_empty() {
                return Ok(Value::Null);
            }
            serde_json::from_str(&body).map_err(|e| convert_json_error(e, endpoint))
        } else {
            Err(classify_status(status.as_u16(), &body, endpoint))
        }
    }
}

#[async_trait]
impl ProductApi for KlarnaClient {
    async fn get_json(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<Value, ApiError> {
        self.request(Method::GET, endpoint, Some(params)).await
    }
}

/// Map a non-success status and its body to an `ApiError`.
///
/// 400, 404, 429 and 503 map to fixed variants regardless of the body;
/// anything else carries the body's `message` field, or the serialized
/// body when that field is absent.
pub fn classify_status(status: u16, body: &str, endpoint: &str) -> ApiError {
    let endpoint = endpoint.to_string();
    match status {
        400 => ApiError::BadRequest { endpoint },
        404 => ApiError::NotFound { endpoint },
        429 => ApiError::RateLimited { endpoint },
        503 => ApiError::ServiceUnavailable { endpoint },
        _ => ApiError::Http {
            status,
            endpoint,
            message: extract_error_message(body),
        },
    }
}

fn extract_error_message(body: &str) -> String {
    let value = serde_json::from_str::<Value>(body).unwrap_or_else(|_| Value::String(body.into()));

    match value.get("message") {
        Some(Value::String(message)) if !message.is_empty() => message.clone(),
        Some(Value::Null) | Some(Value::Bool(false)) | Some(Value::String(_)) | None => {
            value.to_string()
        }
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => value.to_string(),
        Some(other) => other.to_string(),
    }
}
