//! Feed reader configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::FeedError;

pub const DEFAULT_FEED_URL: &str = "https://uegee.com/rss.xml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Feed to fetch
    pub url: String,
    /// User-Agent header value
    pub user_agent: String,
    /// Request timeout; unset means no timeout
    pub timeout_secs: Option<u64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            user_agent: concat!("bookmark-tidy/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: None,
        }
    }
}

impl FeedConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), FeedError> {
        let url = Url::parse(&self.url)
            .map_err(|e| FeedError::Config(format!("url {:?}: {}", self.url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FeedError::Config(format!(
                "url scheme must be http or https, got {}",
                url.scheme()
            )));
        }
        if self.timeout_secs == Some(0) {
            return Err(FeedError::Config("timeout_secs must be positive".to_string()));
        }
        if self.user_agent.trim().is_empty() {
            return Err(FeedError::Config("user_agent must not be empty".to_string()));
        }
        Ok(())
    }
}
