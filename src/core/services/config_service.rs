//! Configuration service for reading and updating the stored API key

use crate::AppError;
use crate::storage::config::Config;
use crate::storage::credentials::{ApiKeySource, mask_api_key, resolve_api_key};
use std::path::PathBuf;

/// Displayable API key state; never carries the key itself
#[derive(Debug, Clone, PartialEq)]
pub enum ApiKeyStatus {
    Set { masked: String, source: ApiKeySource },
    NotSet,
}

/// Configuration service bound to one config file location
pub struct ConfigService {
    config: Config,
    path: Option<PathBuf>,
}

impl ConfigService {
    /// `path` of `None` means the default config location
    pub fn new(config: Config, path: Option<PathBuf>) -> Self {
        Self { config, path }
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.config.set_api_key(api_key);
    }

    /// Masked key status; the stored key wins over `env_value`
    pub fn api_key_status(&self, env_value: Option<String>) -> ApiKeyStatus {
        match resolve_api_key(self.config.api_key.as_deref(), env_value) {
            Some((key, source)) => ApiKeyStatus::Set {
                masked: mask_api_key(&key),
                source,
            },
            None => ApiKeyStatus::NotSet,
        }
    }

    /// Save configuration to file
    pub fn save_config(&self) -> Result<(), AppError> {
        self.config.save(self.path.clone()).map_err(|e| e.into())
    }
}
