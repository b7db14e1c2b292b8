//! Settings file for the `bookmark-tidy` binary
//!
//! One TOML file holds the organizer, feed and logging sections. It is read
//! from `--config` when given, else from the user's config directory when
//! present; otherwise every value is a default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tidy_core::{ConfigError, OrganizerConfig};
use tidy_feed::{FeedConfig, FeedError};
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{0}")]
    Organizer(#[from] ConfigError),

    #[error("{0}")]
    Feed(#[from] FeedError),

    #[error("Invalid log filter {filter:?}: {message}")]
    LogFilter { filter: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `EnvFilter` directives used when `RUST_LOG` is unset
    pub filter: String,
    /// Where logs go while the terminal organizer owns the screen
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Directory exports are written into
    pub export_dir: PathBuf,
    pub organizer: OrganizerConfig,
    pub feed: FeedConfig,
    pub log: LogSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("."),
            organizer: OrganizerConfig::default(),
            feed: FeedConfig::default(),
            log: LogSettings::default(),
        }
    }
}

impl AppSettings {
    /// Default settings file location, e.g.
    /// `~/.config/bookmark-tidy/config.toml` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bookmark-tidy").join("config.toml"))
    }

    /// Load settings. An explicit path must exist; the default location is
    /// optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(toml_str)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.organizer.validate()?;
        self.feed.validate()?;
        EnvFilter::try_new(&self.log.filter).map_err(|e| SettingsError::LogFilter {
            filter: self.log.filter.clone(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}
