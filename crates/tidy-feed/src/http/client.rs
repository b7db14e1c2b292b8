//! HTTP client using reqwest

use std::time::Duration;

use reqwest::Client;

use super::{HttpError, HttpResponse};

/// Sent with every request; some feed hosts and proxies only answer
/// script-originated requests.
const REQUESTED_WITH: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Build a client. `timeout` of `None` waits indefinitely.
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| HttpError::Client {
            message: e.to_string(),
        })?;

        Ok(Self {
            client,
            user_agent: user_agent.to_string(),
        })
    }

    /// Single GET, no retry. Non-2xx statuses are returned, not turned into
    /// errors.
    pub async fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        let url = reqwest::Url::parse(url).map_err(|_| HttpError::InvalidUrl {
            url: url.to_string(),
        })?;

        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header(REQUESTED_WITH.0, REQUESTED_WITH.1)
            .send()
            .await
            .map_err(|e| HttpError::RequestFailed {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();

        let body = response.text().await.map_err(|e| HttpError::Body {
            message: e.to_string(),
        })?;

        Ok(HttpResponse { status, body })
    }
}
