//! Market data retrieval and caching for the nsedash stock dashboard.
//!
//! This crate provides the data retrieval pipeline:
//!
//! - [`url::chart_url`] - Constructs Yahoo Finance chart URLs
//! - [`ChartClient`] - HTTP client implementing [`QuoteSource`]
//! - [`parse_chart`] - Chart payload parsing into a series and metadata
//! - [`TtlCache`] - Expiring map driven by caller-supplied time
//! - [`DataFetcher`] - Read-through cache over any [`QuoteSource`]
//!
//! # Example
//!
//! ```no_run
//! use nsedash_fetch::{ChartClient, DataFetcher};
//! use nsedash_types::Period;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let mut fetcher = DataFetcher::new(ChartClient::with_defaults()?);
//! let data = fetcher.fetch("RELIANCE.NS", Period::Month6).await?;
//! println!("{} bars", data.series.len());
//! # Ok(())
//! # }
//! ```

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/nsedash/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cache;
mod client;
mod clock;
mod fetcher;
mod parse;
mod source;
pub mod url;

pub use cache::{CacheEntry, DEFAULT_TTL_SECS, TtlCache};
pub use client::{ChartClient, ClientConfig, DownloadError};
pub use clock::{Clock, ManualClock, SystemClock};
pub use fetcher::{DataFetcher, MIN_RECORDS};
pub use parse::{ParseError, api_error_description, parse_chart};
pub use source::QuoteSource;
