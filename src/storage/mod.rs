//! Storage layer for klarnaai-cli
//!
//! Handles the local configuration file (TOML) and API key lookup.

use crate::error::StorageError;

pub mod config;
pub mod credentials;

type Result<T> = std::result::Result<T, StorageError>;
