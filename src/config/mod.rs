// src/config/mod.rs
//! User configuration loaded from `<config_dir>/imgpick/config.toml`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::browse::{EngineSettings, ReadMode};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Where browsing starts and stops.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Upper navigation boundary
    pub root: String,
    /// Starting directory; the root when unset
    pub initial_directory: Option<String>,
    /// Title shown at the root
    pub root_label: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            initial_directory: None,
            root_label: "Storage".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show the thumbnail of the highlighted image
    pub show_preview: bool,
    /// Read directories on a worker thread so a slow disk never freezes input
    pub background_reads: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_preview: true,
            background_reads: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter, overridden by RUST_LOG
    pub level: String,
    /// Log file; `<cache_dir>/imgpick/imgpick.log` when unset
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

/// Platform storage root: `/sdcard` on Android, the home directory
/// elsewhere, `/` as a last resort.
pub fn default_root() -> String {
    if cfg!(target_os = "android") {
        return "/sdcard".to_string();
    }
    dirs::home_dir()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "/".to_string())
}

/// Default config file location.
pub fn config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("imgpick").join("config.toml"))
}

impl Config {
    /// Load from the default location.
    pub fn load() -> Self {
        match config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                warn!("could not determine config directory, using defaults");
                Config::default()
            }
        }
    }

    /// Load from `path`. A missing file means defaults; a broken one is
    /// reported and replaced by defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Config::default();
        }
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|e| {
                warn!("could not parse {}: {}", path.display(), e);
                Config::default()
            }),
            Err(e) => {
                warn!("could not read {}: {}", path.display(), e);
                Config::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml_edit::de::Error> {
        toml_edit::de::from_str(content)
    }

    /// Starting directory, falling back to the root.
    pub fn initial_directory(&self) -> &str {
        self.general
            .initial_directory
            .as_deref()
            .unwrap_or(self.general.root.as_str())
    }

    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            read_mode: if self.display.background_reads {
                ReadMode::Background
            } else {
                ReadMode::Inline
            },
            root_label: self.general.root_label.clone(),
        }
    }

    pub fn log_file(&self) -> Option<PathBuf> {
        self.logging
            .file
            .clone()
            .or_else(|| dirs::cache_dir().map(|d| d.join("imgpick").join("imgpick.log")))
    }
}
