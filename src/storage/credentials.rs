//! API key lookup
//!
//! The key comes from the config file, falling back to the KLARNAAI_API_KEY
//! environment variable. It is reported by `config show` only.

use std::env;

pub const API_KEY_ENV: &str = "KLARNAAI_API_KEY";

/// Where the effective API key was found
#[derive(Debug, Clone, PartialEq)]
pub enum ApiKeySource {
    ConfigFile,
    Environment,
}

impl ApiKeySource {
    pub fn label(&self) -> &'static str {
        match self {
            ApiKeySource::ConfigFile => "config file",
            ApiKeySource::Environment => API_KEY_ENV,
        }
    }
}

/// Get the API key from the environment variable, if set and non-empty
pub fn get_env_api_key() -> Option<String> {
    env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty())
}

/// Pick the effective key: a stored key wins over the environment
pub fn resolve_api_key(
    stored: Option<&str>,
    env_value: Option<String>,
) -> Option<(String, ApiKeySource)> {
    match stored.filter(|k| !k.is_empty()) {
        Some(key) => Some((key.to_string(), ApiKeySource::ConfigFile)),
        None => env_value
            .filter(|k| !k.is_empty())
            .map(|key| (key, ApiKeySource::Environment)),
    }
}

/// Fixed-width mask; the length of the real key is not revealed
pub fn mask_api_key(_key: &str) -> String {
    "*".repeat(8)
}
