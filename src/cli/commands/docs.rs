use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::topic::{TopicManager, TspTopicManager};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Print the topic documentation
#[derive(Args)]
pub struct DocsCommand {
    /// Documentation file (overrides config.toml)
    #[arg(long)]
    pub path: Option<PathBuf>,
}

impl DocsCommand {
    pub fn run(&self) -> AppResult<()> {
        let config = super::load_config()?;
        print!("{}", self.render(&config)?);
        Ok(())
    }

    pub fn render(&self, config: &AppConfig) -> AppResult<String> {
        let mut config = config.clone();
        if let Some(path) = &self.path {
            config.documentation.path = path.clone();
        }

        let manager = TspTopicManager::from_config(&config);
        info!(
            "Reading documentation from {}",
            manager.documentation_path().display()
        );

        manager.get_documentation()
    }
}
