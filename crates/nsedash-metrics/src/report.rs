//! Dashboard sections assembled from a fetched history.

use chrono::NaiveDate;
use nsedash_types::{DashError, Period, StockData, TimeSeries};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    DailyChange, MovingAverage, NORMALIZED_BASE, daily_change, intraday_change, moving_averages,
    normalize, period_return,
};

/// The four headline cards for a stock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyMetrics {
    /// Latest close.
    pub current_price: f64,
    /// Latest close minus latest open.
    pub day_change: f64,
    /// Latest session volume.
    pub volume: u64,
    /// Percentage change across the whole period.
    pub period_return: f64,
}

impl KeyMetrics {
    /// Computes the cards from `series`.
    #[must_use]
    pub fn compute(series: &TimeSeries) -> Self {
        let latest = series.last();
        Self {
            current_price: latest.close,
            day_change: intraday_change(series),
            volume: latest.volume,
            period_return: period_return(series),
        }
    }
}

/// Benchmark index cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexOverview {
    /// Close of the prior session.
    pub previous_close: f64,
    /// Close of the latest session.
    pub today_close: f64,
    /// Absolute change between the two.
    pub change: f64,
    /// Percentage change relative to the prior close.
    pub change_percent: f64,
}

impl IndexOverview {
    /// Builds the cards from the last two closes of `series`.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::InsufficientData`] if the series has fewer than two
    /// records.
    pub fn compute(series: &TimeSeries) -> Result<Self, DashError> {
        let DailyChange {
            previous_close,
            latest_close,
            absolute,
            percent,
        } = daily_change(series)?;
        Ok(Self {
            previous_close,
            today_close: latest_close,
            change: absolute,
            change_percent: percent,
        })
    }
}

/// A rebased close line for side-by-side comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Legend label, usually the ticker.
    pub label: String,
    /// `(date, normalized close)` pairs in date order.
    pub points: Vec<(NaiveDate, f64)>,
}

impl Comparison {
    /// Rebases `series` to 100 under `label`.
    #[must_use]
    pub fn from_series(label: impl Into<String>, series: &TimeSeries) -> Self {
        Self {
            label: label.into(),
            points: series.dates().zip(normalize(series)).collect(),
        }
    }

    /// Returns the last normalized value.
    #[must_use]
    pub fn latest(&self) -> Option<f64> {
        self.points.last().map(|&(_, value)| value)
    }

    /// Returns the percentage gained since the first point.
    #[must_use]
    pub fn performance(&self) -> Option<f64> {
        self.latest().map(|value| value - NORMALIZED_BASE)
    }
}

/// Builds one comparison line per `(label, series)` pair, preserving order.
pub fn compare<'a, I>(items: I) -> Vec<Comparison>
where
    I: IntoIterator<Item = (&'a str, &'a TimeSeries)>,
{
    items
        .into_iter()
        .map(|(label, series)| Comparison::from_series(label, series))
        .collect()
}

/// Everything the dashboard shows for one stock and period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Ticker.
    pub symbol: String,
    /// Requested window.
    pub period: Period,
    /// Headline cards.
    pub metrics: KeyMetrics,
    /// Day-over-day close change.
    pub change: DailyChange,
    /// Moving average lines.
    pub moving_averages: Vec<MovingAverage>,
    /// Closes rebased to 100.
    pub normalized: Vec<f64>,
    /// The source bars.
    pub series: TimeSeries,
}

impl DashboardReport {
    /// Computes every section from `data`.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::InsufficientData`] if the series has fewer than two
    /// records.
    pub fn build(data: &StockData, windows: &[usize]) -> Result<Self, DashError> {
        let series = &data.series;
        Ok(Self {
            symbol: data.symbol.clone(),
            period: data.period,
            metrics: KeyMetrics::compute(series),
            change: daily_change(series)?,
            moving_averages: moving_averages(series, windows),
            normalized: normalize(series),
            series: series.clone(),
        })
    }

    /// Returns the moving average windows, in column order.
    #[must_use]
    pub fn windows(&self) -> Vec<usize> {
        self.moving_averages.iter().map(|ma| ma.window).collect()
    }

    /// Zips the per-date values into one row per bar.
    #[must_use]
    pub fn rows(&self) -> Vec<ReportRow> {
        self.series
            .bars()
            .iter()
            .enumerate()
            .map(|(i, bar)| {
                let averages = self
                    .moving_averages
                    .iter()
                    .map(|ma| {
                        let value = ma.values.get(i).copied().flatten();
                        (average_column(ma.window), value.map_or(Value::Null, Value::from))
                    })
                    .collect();
                ReportRow {
                    date: bar.date,
                    open: bar.open,
                    high: bar.high,
                    low: bar.low,
                    close: bar.close,
                    volume: bar.volume,
                    averages,
                    normalized: self.normalized[i],
                }
            })
            .collect()
    }
}

/// Column name for a moving average window, e.g. `ma20`.
#[must_use]
pub fn average_column(window: usize) -> String {
    format!("ma{window}")
}

/// One exported line of a [`DashboardReport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    /// Trading date.
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Session high.
    pub high: f64,
    /// Session low.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Shares traded.
    pub volume: u64,
    /// Moving averages keyed by [`average_column`], `null` until defined.
    #[serde(flatten)]
    pub averages: Map<String, Value>,
    /// Close rebased to 100.
    pub normalized: f64,
}

impl ReportRow {
    /// Returns the average for `window`, if defined on this row.
    #[must_use]
    pub fn average(&self, window: usize) -> Option<f64> {
        self.averages.get(&average_column(window)).and_then(Value::as_f64)
    }
}
