//! Shared HTTP client for the web tools.
//!
//! [`WebClient`] wraps one `reqwest::Client` configured from
//! [`HttpSettings`] (user agent) and applies the per-request timeout on every
//! GET. Failures are classified into [`WebError`], whose `Display` output is
//! exactly the `error` string the tool records carry.

use reqwest::{StatusCode, Url};
use scout_application::config::HttpSettings;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

/// Why an outbound request did not produce a usable payload
#[derive(Debug, Error)]
pub enum WebError {
    /// Any status other than 200 OK
    #[error("HTTP {0}")]
    Status(u16),

    /// Connection, TLS, timeout or body transfer failure. Carries no URL,
    /// since search URLs may hold credentials in their query string.
    #[error("Request failed: {0}")]
    Request(reqwest::Error),

    /// The body was not the JSON shape the tool expects
    #[error("Invalid response: {0}")]
    Decode(String),

    /// A URL could not be built or is not http(s)
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The API answered 200 but reported an error in its payload
    #[error("{0}")]
    Api(String),
}

impl From<reqwest::Error> for WebError {
    fn from(err: reqwest::Error) -> Self {
        WebError::Request(err.without_url())
    }
}

/// HTTP client shared by all web tools
#[derive(Debug, Clone)]
pub struct WebClient {
    client: reqwest::Client,
    http: HttpSettings,
}

impl WebClient {
    /// Build a client sending `http.user_agent` with every request
    pub fn new(http: HttpSettings) -> Result<Self, WebError> {
        let client = reqwest::Client::builder()
            .user_agent(http.user_agent.as_str())
            .build()?;
        Ok(Self { client, http })
    }

    pub fn settings(&self) -> &HttpSettings {
        &self.http
    }

    /// GET with the search-API timeout
    pub fn get(&self, url: Url) -> reqwest::RequestBuilder {
        self.get_with_timeout(url, self.http.timeout)
    }

    /// GET with an explicit timeout
    pub fn get_with_timeout(&self, url: Url, timeout: Duration) -> reqwest::RequestBuilder {
        self.client.get(url).timeout(timeout)
    }

    /// Send a request and decode a 200 OK JSON body.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, WebError> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(
            host = response.url().host_str().unwrap_or_default(),
            path = response.url().path(),
            status = status.as_u16(),
            "Received response"
        );

        if status != StatusCode::OK {
            return Err(WebError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| WebError::Decode(e.to_string()))
    }
}

/// Append path segments to a base URL, percent-encoding each segment.
///
/// `endpoint("https://www.reddit.com", &["r", "rust", "search.json"])`
/// yields `https://www.reddit.com/r/rust/search.json`; a segment containing
/// `/` stays one segment.
pub fn endpoint(base: &str, segments: &[&str]) -> Result<Url, WebError> {
    let mut url = Url::parse(base).map_err(|e| WebError::InvalidUrl(format!("{}: {}", base, e)))?;
    url.path_segments_mut()
        .map_err(|_| WebError::InvalidUrl(format!("{}: cannot be a base", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
