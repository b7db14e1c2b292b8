//! HTTP client abstraction for feed fetching

pub mod client;

pub use client::HttpClient;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Could not build HTTP client: {message}")]
    Client { message: String },
    #[error("Request failed: {message}")]
    RequestFailed { message: String },
    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },
    #[error("Could not read response body: {message}")]
    Body { message: String },
}

#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
