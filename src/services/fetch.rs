// src/services/fetch.rs

//! Page fetching seam.
//!
//! The crawler and the detail fetcher consume pages through [`PageFetcher`]
//! so pagination and decoding logic can run against canned pages in tests.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use crate::models::HarvestConfig;

/// Source of page bodies keyed by URL.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the body of the page at `url`.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// HTTP-backed page fetcher with a fixed pre-request pacing delay.
///
/// The delay is the sole form of rate-limiting; there is no retry or
/// backoff. One request is in flight at a time.
pub struct HttpFetcher {
    client: Client,
    delay: Duration,
}

impl HttpFetcher {
    /// Build a fetcher from harvest settings.
    pub fn new(config: &HarvestConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            delay: Duration::from_millis(config.request_delay_ms),
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        if self.delay.as_millis() > 0 {
            tokio::time::sleep(self.delay).await;
        }

        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}
