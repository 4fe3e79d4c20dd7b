//! Daily OHLCV record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day of open/high/low/close/volume data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    /// Trading date (exchange local).
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Highest price during the session.
    pub high: f64,
    /// Lowest price during the session.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Shares traded.
    pub volume: u64,
}

impl DailyBar {
    /// Creates a new daily bar.
    #[must_use]
    pub const fn new(
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Returns the session move (close - open).
    #[must_use]
    pub fn session_change(&self) -> f64 {
        self.close - self.open
    }
}
