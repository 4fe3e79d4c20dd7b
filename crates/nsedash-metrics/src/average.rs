//! Simple moving averages of close.

use nsedash_types::TimeSeries;
use serde::{Deserialize, Serialize};

/// Windows plotted on the technical analysis chart.
pub const DEFAULT_WINDOWS: [usize; 3] = [20, 50, 200];

/// Simple moving average of close over `window` trailing records.
///
/// Position `i` holds the mean of closes `i + 1 - window ..= i`, and `None`
/// for the first `window - 1` positions. A zero window, or one longer than
/// the series, yields `None` everywhere.
#[must_use]
pub fn rolling_average(series: &TimeSeries, window: usize) -> Vec<Option<f64>> {
    let closes = series.closes();
    let mut averages = vec![None; closes.len()];
    if window == 0 || window > closes.len() {
        return averages;
    }

    for (offset, slice) in closes.windows(window).enumerate() {
        averages[offset + window - 1] = Some(mean(slice));
    }
    averages
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// One moving average line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingAverage {
    /// Window length in trading days.
    pub window: usize,
    /// One value per bar; `None` until the window fills.
    pub values: Vec<Option<f64>>,
}

impl MovingAverage {
    /// Computes the average for `window` over `series`.
    #[must_use]
    pub fn compute(series: &TimeSeries, window: usize) -> Self {
        Self {
            window,
            values: rolling_average(series, window),
        }
    }

    /// Returns the most recent defined value.
    #[must_use]
    pub fn latest(&self) -> Option<f64> {
        self.values.last().copied().flatten()
    }

    /// Returns the display label, e.g. `"20-day MA"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}-day MA", self.window)
    }
}

/// Computes one moving average per window.
#[must_use]
pub fn moving_averages(series: &TimeSeries, windows: &[usize]) -> Vec<MovingAverage> {
    windows
        .iter()
        .map(|&window| MovingAverage::compute(series, window))
        .collect()
}
