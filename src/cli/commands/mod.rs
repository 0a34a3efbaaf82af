use crate::config::AppConfig;
use crate::errors::{AppResult, TopicManagerError};

pub mod admit;
pub mod docs;
pub mod inspect;

/// Configuration shared by every command; a broken config.toml is an error
pub(crate) fn load_config() -> AppResult<AppConfig> {
    AppConfig::load()
        .map_err(|e| TopicManagerError::Config(format!("Failed to load configuration: {}", e)))
}
