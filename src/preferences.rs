//! Persisted user preferences
//!
//! The light/dark theme is the only preference. It lives behind the
//! [`PreferenceStore`] trait so the browser and the CLI get a store injected
//! instead of reaching for a global.

use crate::utils::data_dir;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme '{}' (expected light or dark)", other)),
        }
    }
}

pub type ThemeListener = Box<dyn Fn(ThemeMode) + Send>;

/// Get/set/subscribe access to the persisted theme.
pub trait PreferenceStore {
    fn theme(&self) -> ThemeMode;

    /// Store the theme and notify every subscriber.
    fn set_theme(&mut self, mode: ThemeMode) -> Result<()>;

    fn subscribe(&mut self, listener: ThemeListener);

    fn toggle_theme(&mut self) -> Result<ThemeMode> {
        let next = self.theme().toggle();
        self.set_theme(next)?;
        Ok(next)
    }
}

/// In-process store, nothing survives the session.
#[derive(Default)]
pub struct MemoryPreferences {
    theme: ThemeMode,
    listeners: Vec<ThemeListener>,
}

impl MemoryPreferences {
    pub fn new(theme: ThemeMode) -> Self {
        Self {
            theme,
            listeners: Vec::new(),
        }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn theme(&self) -> ThemeMode {
        self.theme
    }

    fn set_theme(&mut self, mode: ThemeMode) -> Result<()> {
        self.theme = mode;
        for listener in &self.listeners {
            listener(mode);
        }
        Ok(())
    }

    fn subscribe(&mut self, listener: ThemeListener) {
        self.listeners.push(listener);
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferencesFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<ThemeMode>,
}

/// Store backed by `preferences.toml` in the data directory.
pub struct FilePreferences {
    path: PathBuf,
    theme: ThemeMode,
    listeners: Vec<ThemeListener>,
}

impl FilePreferences {
    pub fn default_path() -> PathBuf {
        data_dir().join("preferences.toml")
    }

    /// Open the default preference file.
    pub fn load() -> Result<Self> {
        Self::open(Self::default_path())
    }

    /// Read the stored theme, falling back to the terminal's background when
    /// nothing valid is stored.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let stored = if path.exists() {
            let data = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read preferences at {}", path.display()))?;
            match toml::from_str::<PreferencesFile>(&data) {
                Ok(file) => file.theme,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "ignoring corrupt preferences");
                    None
                }
            }
        } else {
            None
        };

        let theme = stored.unwrap_or_else(detect_system_theme);
        debug!(path = %path.display(), %theme, stored = stored.is_some(), "loaded preferences");

        Ok(Self {
            path,
            theme,
            listeners: Vec::new(),
        })
    }

    /// Write `mode` to disk. The in-memory theme is untouched.
    fn save(&self, mode: ThemeMode) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let file = PreferencesFile {
            theme: Some(mode),
        };
        let data = toml::to_string_pretty(&file)?;
        fs::write(&self.path, data)
            .with_context(|| format!("Failed to write preferences to {}", self.path.display()))?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferences {
    fn theme(&self) -> ThemeMode {
        self.theme
    }

    fn set_theme(&mut self, mode: ThemeMode) -> Result<()> {
        self.save(mode)?;
        self.theme = mode;
        for listener in &self.listeners {
            listener(mode);
        }
        Ok(())
    }

    fn subscribe(&mut self, listener: ThemeListener) {
        self.listeners.push(listener);
    }
}

/// `COLORFGBG` is "fg;bg" (sometimes "fg;default;bg"); 7 and 15 are light backgrounds.
pub fn is_light_background(colorfgbg: &str) -> bool {
    colorfgbg
        .rsplit(';')
        .next()
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .is_some_and(|bg| bg == 7 || bg == 15)
}

/// Theme to use before the user picks one.
pub fn detect_system_theme() -> ThemeMode {
    match std::env::var("COLORFGBG") {
        Ok(value) if is_light_background(&value) => ThemeMode::Light,
        _ => ThemeMode::Dark,
    }
}
