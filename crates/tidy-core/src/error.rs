//! Error types for tidy-core

use thiserror::Error;

/// Result type alias for tidy-core operations
pub type Result<T> = std::result::Result<T, TidyError>;

/// Main error type for tidy-core
///
/// Store operations never fail: a missing bookmark or folder is a no-op.
/// Errors only come from the edges (reading files, loading configuration).
#[derive(Error, Debug)]
pub enum TidyError {
    /// Configuration-related errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// IO error while reading a bookmarks file or writing an export
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration text could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value is present but unusable
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl ConfigError {
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
