//! Configuration for the bookmark organizer
//!
//! Controls how bookmarks are imported, what happens when a move targets a
//! folder that no longer exists, and what the export contains.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;
use crate::netscape::{ExportOptions, ImportOptions};

/// What to do with a bookmark whose move destination folder does not exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedDestination {
    /// Remove the bookmark from its source and do not re-add it anywhere.
    #[default]
    Drop,
    /// Put the bookmark back where it was.
    Restore,
}

/// Organizer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizerConfig {
    /// Title given to links with no text
    pub fallback_title: String,
    /// Base used to resolve relative hrefs on import
    pub base_url: Option<String>,
    /// Move policy for missing destination folders
    pub unresolved_destination: UnresolvedDestination,
    /// Write unfiled bookmarks into the export as top-level entries
    pub include_unorganized: bool,
}

impl Default for OrganizerConfig {
    fn default() -> Self {
        Self {
            fallback_title: "untitled".to_string(),
            base_url: None,
            unresolved_destination: UnresolvedDestination::Drop,
            include_unorganized: false,
        }
    }
}

impl OrganizerConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fallback_title.trim().is_empty() {
            return Err(ConfigError::invalid(
                "fallback_title",
                "must not be empty",
            ));
        }

        if let Some(base) = &self.base_url {
            Url::parse(base).map_err(|e| ConfigError::invalid("base_url", e.to_string()))?;
        }

        Ok(())
    }

    /// Import options derived from this configuration.
    ///
    /// An unparseable `base_url` is ignored here; `validate` reports it.
    pub fn import_options(&self) -> ImportOptions {
        ImportOptions {
            fallback_title: self.fallback_title.clone(),
            base_url: self.base_url.as_deref().and_then(|b| Url::parse(b).ok()),
        }
    }

    /// Export options derived from this configuration.
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            include_unorganized: self.include_unorganized,
        }
    }
}
