//! Terminal dashboard for NSE stocks and the NIFTY 50 index.
//!
//! This is a facade crate that re-exports functionality from the nsedash
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```no_run
//! use nsedash_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let registry = SymbolRegistry::global();
//!     let listing = registry.require("RELIANCE.NS")?;
//!     let mut fetcher = DataFetcher::new(ChartClient::with_defaults()?);
//!
//!     let data = fetcher.fetch(listing.symbol(), Period::Month6).await?;
//!     let report = DashboardReport::build(&data, &DEFAULT_WINDOWS)?;
//!     println!("{}: {:.2}%", listing, report.metrics.period_return);
//!
//!     Ok(())
//! }
//! ```

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/nsedash/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use nsedash_types::*;

// Re-export symbol registry
pub use nsedash_symbols::SymbolRegistry;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use nsedash_fetch::{
    CacheEntry, ChartClient, ClientConfig, Clock, DEFAULT_TTL_SECS, DataFetcher, DownloadError,
    MIN_RECORDS, ManualClock, ParseError, QuoteSource, SystemClock, TtlCache,
    api_error_description, parse_chart, url,
};

// Re-export metrics
#[cfg(feature = "metrics")]
pub use nsedash_metrics::{
    Comparison, DEFAULT_WINDOWS, DailyChange, DashboardReport, IndexOverview, KeyMetrics,
    MovingAverage, NORMALIZED_BASE, ReportRow, average_column, compare, daily_change,
    intraday_change, moving_averages, normalize, period_return, rolling_average,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use nsedash_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat,
};

/// Prelude module for convenient imports.
///
/// ```
/// use nsedash_lib::prelude::*;
/// ```
pub mod prelude {
    pub use nsedash_types::{
        DailyBar, DashError, Listing, ListingKind, MetadataMap, Period, Result, StockData,
        TimeSeries,
    };

    pub use nsedash_symbols::SymbolRegistry;

    #[cfg(feature = "fetch")]
    pub use nsedash_fetch::{ChartClient, ClientConfig, DataFetcher, QuoteSource};

    #[cfg(feature = "metrics")]
    pub use nsedash_metrics::{
        Comparison, DEFAULT_WINDOWS, DashboardReport, IndexOverview, KeyMetrics, compare,
    };

    #[cfg(feature = "format")]
    pub use nsedash_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};
}
