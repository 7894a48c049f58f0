use crate::utils::{config_dir, expand_tilde};
use crate::wallpaper::SortMode;
use anyhow::{Context, Result};
use crossterm::event::KeyCode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// JSON or TOML catalog to load instead of the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub default_sort: SortMode,
    /// Tags shown per wallpaper row before "+N"
    #[serde(default = "default_card_tag_limit")]
    pub card_tag_limit: usize,
}

fn default_card_tag_limit() -> usize {
    2
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_sort: SortMode::default(),
            card_tag_limit: default_card_tag_limit(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    pub next: String,
    pub prev: String,
    pub open: String,
    pub quit: String,
    pub random: String,
    pub sort: String,
    pub tag_filter: String,
    pub theme: String,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            next: "j".to_string(),
            prev: "k".to_string(),
            open: "Enter".to_string(),
            quit: "q".to_string(),
            random: "r".to_string(),
            sort: "s".to_string(),
            tag_filter: "t".to_string(),
            theme: "T".to_string(),
        }
    }
}

impl KeybindingsConfig {
    /// Parse a keybinding string into a KeyCode
    pub fn parse_key(s: &str) -> Option<KeyCode> {
        let s = s.trim();

        if s.chars().count() == 1 {
            return s.chars().next().map(KeyCode::Char);
        }

        match s.to_lowercase().as_str() {
            "enter" | "return" => Some(KeyCode::Enter),
            "esc" | "escape" => Some(KeyCode::Esc),
            "tab" => Some(KeyCode::Tab),
            "backtab" | "shift+tab" => Some(KeyCode::BackTab),
            "space" => Some(KeyCode::Char(' ')),
            "backspace" => Some(KeyCode::Backspace),
            "home" => Some(KeyCode::Home),
            "end" => Some(KeyCode::End),
            "pageup" | "pgup" => Some(KeyCode::PageUp),
            "pagedown" | "pgdn" => Some(KeyCode::PageDown),
            "up" => Some(KeyCode::Up),
            "down" => Some(KeyCode::Down),
            "left" => Some(KeyCode::Left),
            "right" => Some(KeyCode::Right),
            other => other
                .strip_prefix('f')
                .and_then(|n| n.parse::<u8>().ok())
                .filter(|n| (1..=12).contains(n))
                .map(KeyCode::F),
        }
    }

    /// Check if a KeyCode matches a keybinding
    pub fn matches(&self, key: KeyCode, binding: &str) -> bool {
        Self::parse_key(binding) == Some(key)
    }
}

impl Config {
    /// Return the path to the configuration file.
    pub fn config_path() -> PathBuf {
        config_dir().join("config.toml")
    }

    /// Load config from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from file, creating default if missing or corrupt.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let data = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config at {}", path.display()))?;
            match toml::from_str::<Config>(&data) {
                Ok(config) => Ok(config),
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "failed to parse config, using defaults"
                    );
                    let config = Config::default();
                    config.save_to(path)?;
                    Ok(config)
                }
            }
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save config to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(self)?;
        fs::write(path, data)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        Ok(())
    }

    /// Catalog file from the config, with `~` expanded.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog
            .path
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(expand_tilde)
    }
}
