//! Validated daily time series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{DailyBar, SeriesError};

/// An ordered, non-empty sequence of daily bars.
///
/// Dates are strictly increasing, so there are no duplicates. The series is
/// immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DailyBar>", into = "Vec<DailyBar>")]
pub struct TimeSeries {
    bars: Vec<DailyBar>,
}

impl TimeSeries {
    /// Creates a series from bars already sorted by date.
    ///
    /// # Errors
    ///
    /// Returns an error if `bars` is empty or the dates are not strictly
    /// increasing.
    pub fn new(bars: Vec<DailyBar>) -> Result<Self, SeriesError> {
        if bars.is_empty() {
            return Err(SeriesError::Empty);
        }
        if let Some(pair) = bars.windows(2).find(|w| w[1].date <= w[0].date) {
            return Err(SeriesError::NotIncreasing {
                previous: pair[0].date,
                next: pair[1].date,
            });
        }
        Ok(Self { bars })
    }

    /// Returns the bars in date order.
    #[must_use]
    pub fn bars(&self) -> &[DailyBar] {
        &self.bars
    }

    /// Returns the number of records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bars.len()
    }

    /// Always false; kept for API symmetry with slices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Returns the first (oldest) bar.
    #[must_use]
    pub fn first(&self) -> &DailyBar {
        &self.bars[0]
    }

    /// Returns the last (most recent) bar.
    #[must_use]
    pub fn last(&self) -> &DailyBar {
        &self.bars[self.bars.len() - 1]
    }

    /// Returns the closing prices in date order.
    #[must_use]
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Returns the trading dates in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.bars.iter().map(|b| b.date)
    }

    /// Looks up the bar for a trading date.
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&DailyBar> {
        self.bars
            .binary_search_by_key(&date, |b| b.date)
            .ok()
            .map(|i| &self.bars[i])
    }

    /// Returns a copy of the series with every price multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        let bars = self
            .bars
            .iter()
            .map(|b| DailyBar {
                open: b.open * factor,
                high: b.high * factor,
                low: b.low * factor,
                close: b.close * factor,
                ..*b
            })
            .collect();
        Self { bars }
    }
}

impl TryFrom<Vec<DailyBar>> for TimeSeries {
    type Error = SeriesError;

    fn try_from(bars: Vec<DailyBar>) -> Result<Self, Self::Error> {
        Self::new(bars)
    }
}

impl From<TimeSeries> for Vec<DailyBar> {
    fn from(series: TimeSeries) -> Self {
        series.bars
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a DailyBar;
    type IntoIter = std::slice::Iter<'a, DailyBar>;

    fn into_iter(self) -> Self::IntoIter {
        self.bars.iter()
    }
}
