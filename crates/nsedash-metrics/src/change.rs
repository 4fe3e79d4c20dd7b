//! Day-over-day price change.

use nsedash_types::{DashError, TimeSeries};
use serde::{Deserialize, Serialize};

/// Change between the two most recent closes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyChange {
    /// Second-to-last close.
    pub previous_close: f64,
    /// Last close.
    pub latest_close: f64,
    /// `latest_close - previous_close`.
    pub absolute: f64,
    /// `absolute / previous_close * 100`.
    pub percent: f64,
}

impl DailyChange {
    /// Computes the change from `previous_close` to `latest_close`.
    #[must_use]
    pub fn between(previous_close: f64, latest_close: f64) -> Self {
        Self {
            previous_close,
            latest_close,
            absolute: latest_close - previous_close,
            percent: (latest_close - previous_close) / previous_close * 100.0,
        }
    }

    /// Returns true if the latest close is above the previous one.
    #[must_use]
    pub fn is_up(&self) -> bool {
        self.absolute > 0.0
    }
}

/// Change between the latest two closes of `series`.
///
/// # Errors
///
/// Returns [`DashError::InsufficientData`] if the series has fewer than two
/// records.
pub fn daily_change(series: &TimeSeries) -> Result<DailyChange, DashError> {
    match series.bars() {
        [.., previous, latest] => Ok(DailyChange::between(previous.close, latest.close)),
        bars => Err(DashError::InsufficientData {
            required: 2,
            actual: bars.len(),
        }),
    }
}

/// Latest close minus latest open.
#[must_use]
pub fn intraday_change(series: &TimeSeries) -> f64 {
    series.last().session_change()
}
