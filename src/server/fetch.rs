//! HTTP client for fetching pages submitted by URL.

use std::time::Duration;

use reqwest::Client;

use crate::config::ServerConfig;
use crate::server::error::ApiError;

/// Fetches remote pages on behalf of URL submissions.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(config: &ServerConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(
                config.fetch_connect_timeout_seconds,
            )))
            .timeout(Duration::from_secs(u64::from(config.fetch_timeout_seconds)))
            .build()
            .expect("Failed to build fetch client");

        Self { client }
    }

    /// Fetch a page body as text.
    ///
    /// Transport failures, timeouts, and error statuses all collapse into
    /// [`ApiError::FetchFailed`] on the wire; the underlying cause is
    /// logged here.
    pub async fn fetch(&self, url: &str) -> Result<String, ApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|err| {
                tracing::warn!(url = %url, error = %err, "page fetch failed");
                ApiError::FetchFailed
            })?;

        response.text().await.map_err(|err| {
            tracing::warn!(url = %url, error = %err, "page body read failed");
            ApiError::FetchFailed
        })
    }
}
