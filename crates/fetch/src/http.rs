//! HTTP fragment transport backed by [`reqwest`].

use std::time::Duration;

use async_trait::async_trait;

use crate::fetcher::{FetchError, FragmentFetcher};

/// HTTP request timeout for a single fragment fetch.
///
/// The resolution model has no overall timeout, so this per-request bound is
/// what keeps a dead fragment server from hanging a branch forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches fragments over HTTP.
///
/// Root-relative sources (`/header.html`) are joined to the configured base
/// URL; absolute `http(s)://` sources are fetched as-is.
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFetcher {
    /// Create a fetcher with the default request timeout.
    ///
    /// * `base_url` - e.g. `https://shop.example.com` (trailing slashes are
    ///   trimmed).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    /// Create a fetcher with an explicit per-request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self::with_client(client, base_url)
    }

    /// Create a fetcher reusing an existing [`reqwest::Client`] (useful for
    /// connection pooling across fetchers).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }

    /// The full request URL for a marker source.
    fn request_url(&self, source: &str) -> String {
        if source.starts_with("http://") || source.starts_with("https://") {
            source.to_string()
        } else if source.starts_with('/') {
            format!("{}{}", self.base_url, source)
        } else {
            format!("{}/{}", self.base_url, source)
        }
    }
}

#[async_trait]
impl FragmentFetcher for HttpFetcher {
    async fn fetch(&self, source: &str) -> Result<String, FetchError> {
        let url = self.request_url(source);
        tracing::debug!(%url, "Fetching fragment");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
