//! HTTP client for the chart endpoint.

use async_trait::async_trait;
use bytes::Bytes;
use nsedash_types::{DashError, Period, StockData};
use reqwest::{Client, Url};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use crate::{QuoteSource, parse::api_error_description, parse_chart, url::chart_url};

/// Configuration for the chart client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Chart endpoint base URL.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: crate::url::BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            // The chart endpoint rejects non-browser agents
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string(),
        }
    }
}

/// Errors that can occur during downloads.
#[derive(Error, Debug)]
pub enum DownloadError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status.
    #[error("Server returned {status}: {}", .detail.as_deref().unwrap_or("no details"))]
    Status {
        /// HTTP status code.
        status: u16,
        /// Provider error description, when the body carried one.
        detail: Option<String>,
    },
}

/// Yahoo Finance chart client.
///
/// Each call performs a single request; failures are returned immediately.
#[derive(Debug, Clone)]
pub struct ChartClient {
    client: Client,
    config: ClientConfig,
}

impl ChartClient {
    /// Creates a new chart client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Downloads a URL, returning the body on a success status.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn download(&self, url: Url) -> Result<Bytes, DownloadError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(DownloadError::Status {
                status: status.as_u16(),
                detail: api_error_description(&body),
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl QuoteSource for ChartClient {
    async fn history(&self, symbol: &str, period: Period) -> Result<StockData, DashError> {
        let url = chart_url(&self.config.base_url, symbol, period)
            .map_err(|e| DashError::unavailable(symbol, e))?;
        info!(symbol, %period, "requesting chart");
        debug!(%url);

        let body = self
            .download(url)
            .await
            .map_err(|e| DashError::unavailable(symbol, e))?;
        let (series, metadata) =
            parse_chart(&body).map_err(|e| DashError::unavailable(symbol, e))?;

        debug!(symbol, rows = series.len(), keys = metadata.len(), "parsed chart");
        Ok(StockData::new(symbol, period, series, metadata))
    }
}
