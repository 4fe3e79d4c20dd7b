//! Core types for the nsedash stock dashboard.
//!
//! This crate provides the fundamental data structures used throughout nsedash:
//!
//! - [`DailyBar`] - One trading day of OHLCV data
//! - [`TimeSeries`] - Validated, date-ordered sequence of bars
//! - [`MetadataMap`] - Insertion-ordered scalar metadata with keyword lookup
//! - [`Period`] - History window for a request
//! - [`Listing`] - A stock or index known to the dashboard
//! - [`StockData`] - A fetched series together with its metadata

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/nsedash/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bar;
mod error;
mod listing;
mod metadata;
mod period;
mod series;

pub use bar::DailyBar;
pub use error::{DashError, Result, SeriesError};
pub use listing::{Listing, ListingKind};
pub use metadata::{MetadataMap, display_value};
pub use period::{Period, PeriodParseError};
pub use series::TimeSeries;

/// A fetched history for one symbol and period.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StockData {
    /// The requested ticker.
    pub symbol: String,
    /// The requested window.
    pub period: Period,
    /// Daily bars in date order.
    pub series: TimeSeries,
    /// Provider metadata for the symbol.
    pub metadata: MetadataMap,
}

impl StockData {
    /// Creates a new bundle.
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        period: Period,
        series: TimeSeries,
        metadata: MetadataMap,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            period,
            series,
            metadata,
        }
    }
}
