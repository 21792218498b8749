use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{SPLIT_RATIO_MAX, SPLIT_RATIO_MIN};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Local user identity stamped on submitted drafts
    #[serde(default)]
    pub identity: IdentityConfig,
    #[serde(default)]
    pub ui: UiConfig,
    /// Where the initial messages come from
    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityConfig {
    #[serde(default = "default_identity_name")]
    pub name: String,
    #[serde(default = "default_identity_email")]
    pub email: String,
    /// Recipient recorded on drafts saved without one
    #[serde(default = "default_draft_address")]
    pub draft_address: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            name: default_identity_name(),
            email: default_identity_email(),
            draft_address: default_draft_address(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub keybinding_mode: KeybindingMode,
    /// Split pane ratio for list vs. detail (30-70)
    #[serde(default = "default_split_ratio")]
    pub split_ratio: u16,
    /// Show the folder sidebar when the terminal is wide enough
    #[serde(default = "default_true")]
    pub sidebar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            keybinding_mode: KeybindingMode::default(),
            split_ratio: default_split_ratio(),
            sidebar: true,
        }
    }
}

impl UiConfig {
    pub fn clamped_split_ratio(&self) -> u16 {
        self.split_ratio.clamp(SPLIT_RATIO_MIN, SPLIT_RATIO_MAX)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KeybindingMode {
    #[default]
    Vim,
    Arrows,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// TOML file of `[[message]]` tables replacing the bundled sample set
    #[serde(default)]
    pub messages: Option<PathBuf>,
}

fn default_identity_name() -> String {
    "You".to_string()
}

fn default_identity_email() -> String {
    "you@mailbox.app".to_string()
}

fn default_draft_address() -> String {
    "draft@mailbox.app".to_string()
}

fn default_split_ratio() -> u16 {
    45
}

fn default_true() -> bool {
    true
}

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("mailbox");
        Ok(dir)
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load the config file, or defaults when none exists yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            tracing::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn ensure_dirs() -> Result<()> {
        fs::create_dir_all(Self::config_dir()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [identity]
            name = "Sam"
            email = "sam@example.com"

            [ui]
            keybinding_mode = "arrows"
            split_ratio = 60
            sidebar = false

            [data]
            messages = "/tmp/messages.toml"
        "#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.identity.name, "Sam");
        assert_eq!(config.identity.email, "sam@example.com");
        // Unspecified fields keep their defaults
        assert_eq!(config.identity.draft_address, "draft@mailbox.app");
        assert_eq!(config.ui.keybinding_mode, KeybindingMode::Arrows);
        assert_eq!(config.ui.split_ratio, 60);
        assert!(!config.ui.sidebar);
        assert_eq!(
            config.data.messages,
            Some(PathBuf::from("/tmp/messages.toml"))
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.identity, IdentityConfig::default());
        assert_eq!(config.ui.keybinding_mode, KeybindingMode::Vim);
        assert_eq!(config.ui.split_ratio, 45);
        assert!(config.ui.sidebar);
        assert!(config.data.messages.is_none());
    }

    #[test]
    fn test_split_ratio_clamped() {
        let config = Config::parse("[ui]\nsplit_ratio = 95").unwrap();
        assert_eq!(config.ui.clamped_split_ratio(), SPLIT_RATIO_MAX);
    }

    #[test]
    fn test_unknown_keybinding_mode_rejected() {
        assert!(Config::parse("[ui]\nkeybinding_mode = \"emacs\"").is_err());
    }
}
