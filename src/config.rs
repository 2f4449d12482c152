use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::models::{BotId, MAX_BOT_ID};

pub const DEFAULT_TEMPLATE_FILE: &str = "config-template.json";
pub const DEFAULT_BOT_COUNT: u32 = 12;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Holds the template and receives the generated files
    pub config_dir: PathBuf,
    pub template_file: String,
    /// Bots are numbered 1..=bot_count
    pub bot_count: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_dir: default_config_dir(),
            template_file: DEFAULT_TEMPLATE_FILE.to_string(),
            bot_count: DEFAULT_BOT_COUNT,
        }
    }
}

/// `configs/` next to the crate manifest
fn default_config_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("configs")
}

impl Config {
    /// Load configuration from environment variables, falling back to the reference setup
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            config_dir: env::var("BOT_CONFIG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_config_dir()),
            template_file: env::var("BOT_TEMPLATE_FILE")
                .unwrap_or_else(|_| DEFAULT_TEMPLATE_FILE.to_string()),
            bot_count: env::var("BOT_COUNT")
                .unwrap_or_else(|_| DEFAULT_BOT_COUNT.to_string())
                .parse()
                .context("Invalid BOT_COUNT")?,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.bot_count == 0 || self.bot_count > MAX_BOT_ID {
            anyhow::bail!("BOT_COUNT must be between 1 and {}", MAX_BOT_ID);
        }

        if self.template_file.trim().is_empty() {
            anyhow::bail!("BOT_TEMPLATE_FILE must not be empty");
        }

        Ok(())
    }

    pub fn template_path(&self) -> PathBuf {
        self.config_dir.join(&self.template_file)
    }

    pub fn output_path(&self, bot: BotId) -> PathBuf {
        self.config_dir.join(bot.config_file_name())
    }

    /// All bot ids in 1..=bot_count
    pub fn bot_ids(&self) -> crate::error::Result<Vec<BotId>> {
        (1..=self.bot_count).map(BotId::new).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_setup() {
        let config = Config::default();
        config.validate().unwrap();

        assert_eq!(config.bot_count, 12);
        assert!(config.template_path().ends_with("configs/config-template.json"));
        assert!(config
            .output_path(BotId::new(4).unwrap())
            .ends_with("configs/config-bot-04.json"));
    }

    #[test]
    fn test_bot_ids_closed_range() {
        let ids: Vec<u32> = Config::default()
            .bot_ids()
            .unwrap()
            .into_iter()
            .map(BotId::get)
            .collect();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());

        let mut config = Config::default();
        config.bot_count = 100;
        assert!(config.bot_ids().is_err());
    }

    #[test]
    fn test_validate_bounds() {
        let mut config = Config::default();
        config.bot_count = 0;
        assert!(config.validate().is_err());
        config.bot_count = 100;
        assert!(config.validate().is_err());
        config.bot_count = 99;
        assert!(config.validate().is_ok());

        config.template_file = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
