use crate::types::tsp::{TspField, TSP_PROTOCOL_ADDRESS};
use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub topic: TopicConfig,
    pub documentation: DocumentationConfig,
}

/// Admission rules for the TSP topic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicConfig {
    /// Namespace address an advertisement must carry
    pub protocol_address: String,
    /// Decoded field index holding the namespace address
    pub namespace_field: usize,
}

impl Default for TopicConfig {
    fn default() -> Self {
        Self {
            protocol_address: TSP_PROTOCOL_ADDRESS.to_string(),
            namespace_field: TspField::ProtocolAddress.index(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentationConfig {
    /// Documentation file, relative to the working directory
    pub path: PathBuf,
}

impl Default for DocumentationConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("README.md"),
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let topic = TopicConfig::default();
        let documentation = DocumentationConfig::default();

        let config = Config::builder()
            .set_default("topic.protocol_address", topic.protocol_address)?
            .set_default("topic.namespace_field", topic.namespace_field as i64)?
            .set_default(
                "documentation.path",
                documentation.path.to_string_lossy().into_owned(),
            )?
            // Load from config.toml if it exists
            .add_source(File::with_name("config").required(false))
            // TSP_TOPIC__PROTOCOL_ADDRESS, TSP_DOCUMENTATION__PATH, ...
            .add_source(
                config::Environment::with_prefix("TSP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        if let Ok(doc_path) = env::var("TSP_DOCUMENTATION_PATH") {
            app_config.documentation.path = PathBuf::from(doc_path);
        }

        if app_config.topic.protocol_address.is_empty() {
            return Err(ConfigError::Message(
                "topic.protocol_address must not be empty".to_string(),
            ));
        }

        Ok(app_config)
    }
}
