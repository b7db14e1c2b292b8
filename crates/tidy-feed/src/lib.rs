//! tidy-feed: fetch an RSS feed and turn its items into display data.
//!
//! The pipeline is a single GET, a well-formedness-checked XML parse, and
//! rendering with text fallbacks. There is no retry and no caching.

pub mod config;
pub mod error;
pub mod http;
pub mod parser;
pub mod post;
pub mod reader;
pub mod render;

pub use config::{FeedConfig, DEFAULT_FEED_URL};
pub use error::FeedError;
pub use parser::parse_feed;
pub use post::Post;
pub use reader::FeedReader;
pub use render::{error_message, escape_html, format_date, render_posts_html, render_posts_text};
