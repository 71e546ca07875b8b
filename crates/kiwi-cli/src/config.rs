//! Configuration management for Kiwi CLI
//!
//! Stores the server URL and default personality in ~/.config/kiwi/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR: &str = "kiwi";
const CONFIG_FILE: &str = "config.toml";

/// CLI Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_personality: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_personality: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Personality to use: explicit flag, then configured default, then the catalog default
    pub fn personality(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.default_personality.clone())
            .unwrap_or_else(|| kiwi::Personality::default().id().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_file() {
        let config = Config::parse("default_personality = \"Kiwi Chill\"\n").unwrap();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.default_personality.as_deref(), Some("Kiwi Chill"));
    }

    #[test]
    fn test_serialized_config_parses_back() {
        let config = Config {
            base_url: "https://api.kiwiai.online".to_string(),
            default_personality: None,
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::parse(&text).unwrap(), config);
    }

    #[test]
    fn test_personality_precedence() {
        let mut config = Config::default();
        assert_eq!(config.personality(None), "Kiwi");

        config.default_personality = Some("Kiwi Diva".to_string());
        assert_eq!(config.personality(None), "Kiwi Diva");
        assert_eq!(config.personality(Some("Kiwi Kawaii".to_string())), "Kiwi Kawaii");
    }
}
