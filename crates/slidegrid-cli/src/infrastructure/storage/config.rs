//! TOML-based configuration for the inspector.
//!
//! Reads `AppConfig` from the platform-appropriate config file:
//! - Windows:  `%APPDATA%\Slidegrid\config.toml`
//! - Linux:    `$XDG_CONFIG_HOME/slidegrid/config.toml` or `~/.config/slidegrid/config.toml`
//! - macOS:    `~/Library/Application Support/Slidegrid/config.toml`
//!
//! Example:
//!
//! ```toml
//! [general]
//! log_level = "debug"
//!
//! [output]
//! format = "json"
//! precision = 3
//!
//! [[presets]]
//! title = "Split screen"
//! layout = "2S|50:50/1R|100/2R|50:50"
//! group = "Custom"
//! ```
//!
//! Every field has a default, so an empty or partial file is valid and the
//! inspector works before any config file exists.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use slidegrid_core::{builtin_presets, LayoutItem};
use thiserror::Error;

use crate::application::inspect::OutputFormat;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Refused to overwrite an existing config file.
    #[error("config file already exists at {0}")]
    AlreadyExists(PathBuf),

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level inspector configuration stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub output: OutputConfig,
    /// User presets appended after the built-in catalogue.
    #[serde(default)]
    pub presets: Vec<PresetEntry>,
}

/// General behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Report output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Default report format when `--format` is not given.
    #[serde(default)]
    pub format: OutputFormat,
    /// Decimals printed by the table format.
    #[serde(default = "default_precision")]
    pub precision: usize,
}

/// A user-defined layout preset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PresetEntry {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    /// Layout description string.
    pub layout: String,
    #[serde(default = "default_group")]
    pub group: String,
}

impl PresetEntry {
    /// Converts the entry into a catalogue item with no default images.
    pub fn to_layout_item(&self) -> LayoutItem {
        LayoutItem::new(&self.title, &self.subtitle, &self.layout, &self.group)
    }
}

impl AppConfig {
    /// Returns the built-in presets followed by the configured ones.
    pub fn catalogue(&self) -> Vec<LayoutItem> {
        let mut items = builtin_presets();
        items.extend(self.presets.iter().map(PresetEntry::to_layout_item));
        items
    }
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_log_level() -> String {
    "info".to_string()
}
fn default_precision() -> usize {
    4
}
fn default_group() -> String {
    "Custom".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            precision: default_precision(),
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Resolves the full path to the platform config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    platform_config_dir()
        .map(|dir| dir.join("config.toml"))
        .ok_or(ConfigError::NoPlatformConfigDir)
}

/// Loads the configuration.
///
/// With an explicit `path` the file must exist.  Without one, the platform
/// config file is used and a missing file yields `AppConfig::default()`.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors and
/// [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    if let Some(path) = path {
        return read_config(path);
    }
    match read_config(&config_file_path()?) {
        Err(ConfigError::Io { ref source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            Ok(AppConfig::default())
        }
        other => other,
    }
}

/// Reads and parses the config file at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read and
/// [`ConfigError::Parse`] if the TOML is malformed.
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

/// Writes `config` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`ConfigError::AlreadyExists`] if the file exists and `overwrite`
/// is `false`, [`ConfigError::Io`] for file-system failures, or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(config: &AppConfig, path: &Path, overwrite: bool) -> Result<(), ConfigError> {
    if !overwrite && path.exists() {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolves the platform config directory including the `slidegrid` subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("Slidegrid"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("slidegrid"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("Slidegrid")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
