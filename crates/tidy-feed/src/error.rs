//! Error types for tidy-feed

use thiserror::Error;

use crate::http::HttpError;

/// Any failure that prevents posts from being shown. There is no partial
/// result: one error means no posts.
#[derive(Error, Debug)]
pub enum FeedError {
    /// Network failure or unusable URL
    #[error("{0}")]
    Http(#[from] HttpError),

    /// The server answered with a non-2xx status
    #[error("HTTP error, status {0}")]
    Status(u16),

    /// The body is not well-formed XML
    #[error("Feed parse failed: {0}")]
    Parse(String),

    /// Well-formed, but without a single item
    #[error("No posts found")]
    NoItems,

    /// Feed configuration is unusable
    #[error("Invalid feed config: {0}")]
    Config(String),
}
