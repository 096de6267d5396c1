pub mod config_service;
pub mod search_service;
pub mod traits;
pub mod types;
