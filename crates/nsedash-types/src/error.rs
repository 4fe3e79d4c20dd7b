//! Error types for nsedash.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for nsedash operations.
pub type Result<T> = std::result::Result<T, DashError>;

/// Errors that can occur while fetching data and computing metrics.
///
/// Both core variants are terminal for the current pass: no partial results
/// are produced and nothing is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashError {
    /// The remote source returned an empty, malformed or too-short result.
    #[error("Data for {symbol} is unavailable: {reason}")]
    DataUnavailable {
        /// The symbol that could not be loaded.
        symbol: String,
        /// Human-readable cause.
        reason: String,
    },

    /// A delta-based metric was asked for with too few records.
    #[error("Insufficient data: need at least {required} records, got {actual}")]
    InsufficientData {
        /// Minimum number of records required.
        required: usize,
        /// Number of records available.
        actual: usize,
    },

    /// A time series violated its ordering invariants.
    #[error(transparent)]
    Series(#[from] SeriesError),

    /// Symbol not present in the registry.
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),
}

impl DashError {
    /// Builds a [`DashError::DataUnavailable`] for the given symbol.
    pub fn unavailable(symbol: impl Into<String>, reason: impl ToString) -> Self {
        Self::DataUnavailable {
            symbol: symbol.into(),
            reason: reason.to_string(),
        }
    }
}

/// Error for time series that break the ordering invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    /// The series has no records.
    #[error("Time series is empty")]
    Empty,

    /// Dates are not strictly increasing.
    #[error("Dates not strictly increasing: {previous} followed by {next}")]
    NotIncreasing {
        /// The earlier record's date.
        previous: NaiveDate,
        /// The offending record's date.
        next: NaiveDate,
    },
}
