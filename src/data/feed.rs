use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::domain::{CollectorStatus, Sample};
use crate::utils::time_utils::local_now_as_timestamp_ms;

/// Abstract interface for fetching the collector's two JSON resources.
#[async_trait]
pub trait OccupancyFeed: Send + Sync {
    /// Time-ordered array of samples.
    async fn fetch_samples(&self) -> Result<Vec<Sample>>;
    /// Last-run status record. Failure here is independent of the samples.
    async fn fetch_status(&self) -> Result<CollectorStatus>;
}

pub struct HttpFeed {
    client: reqwest::Client,
    samples_url: String,
    status_url: String,
}

impl HttpFeed {
    pub fn new(samples_url: String, status_url: String, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("building http client")?;
        Ok(Self {
            client,
            samples_url,
            status_url,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        // The host serves the feed with long cache lifetimes; a throwaway
        // query parameter busts intermediate caches on every refresh.
        let resp = self
            .client
            .get(url)
            .query(&[("t", local_now_as_timestamp_ms().to_string())])
            .send()
            .await
            .with_context(|| format!("requesting {url}"))?
            .error_for_status()
            .with_context(|| format!("bad status from {url}"))?;

        resp.json::<T>()
            .await
            .with_context(|| format!("decoding json from {url}"))
    }
}

#[async_trait]
impl OccupancyFeed for HttpFeed {
    async fn fetch_samples(&self) -> Result<Vec<Sample>> {
        self.get_json(&self.samples_url).await
    }

    async fn fetch_status(&self) -> Result<CollectorStatus> {
        self.get_json(&self.status_url).await
    }
}
