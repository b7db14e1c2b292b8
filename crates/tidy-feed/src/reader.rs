//! Fetch-parse pipeline.

use crate::config::FeedConfig;
use crate::error::FeedError;
use crate::http::HttpClient;
use crate::parser::parse_feed;
use crate::post::Post;

/// Loads posts from one feed. Holds no state between loads.
pub struct FeedReader {
    client: HttpClient,
    config: FeedConfig,
}

impl FeedReader {
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        config.validate()?;
        let client = HttpClient::new(&config.user_agent, config.timeout())?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Fetch and parse the configured feed.
    pub async fn load(&self) -> Result<Vec<Post>, FeedError> {
        self.load_from(&self.config.url).await
    }

    /// Fetch and parse a feed. One attempt: a network error, a non-2xx
    /// status, malformed XML or an empty item list all fail the load.
    pub async fn load_from(&self, url: &str) -> Result<Vec<Post>, FeedError> {
        tracing::debug!(url, "fetching feed");
        let response = self.client.get(url).await?;

        if !response.is_success() {
            tracing::warn!(url, status = response.status, "feed request failed");
            return Err(FeedError::Status(response.status));
        }

        let posts = parse_feed(&response.body)?;
        if posts.is_empty() {
            return Err(FeedError::NoItems);
        }

        tracing::info!(url, posts = posts.len(), "loaded feed");
        Ok(posts)
    }
}
