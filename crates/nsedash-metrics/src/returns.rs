//! Whole-period return and rebasing.

use nsedash_types::TimeSeries;

/// Base value of a normalized series.
pub const NORMALIZED_BASE: f64 = 100.0;

/// Percentage change from the first close to the last close.
#[must_use]
pub fn period_return(series: &TimeSeries) -> f64 {
    let first = series.first().close;
    (series.last().close - first) / first * 100.0
}

/// Rebases closes so the first record is [`NORMALIZED_BASE`].
///
/// Each value is `close / first_close * 100`, in date order.
#[must_use]
pub fn normalize(series: &TimeSeries) -> Vec<f64> {
    let first = series.first().close;
    series
        .bars()
        .iter()
        .map(|bar| bar.close / first * NORMALIZED_BASE)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{NaiveDate, TimeDelta};
    use nsedash_types::DailyBar;

    fn series(closes: &[f64]) -> TimeSeries {
        let start = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| DailyBar::new(start + TimeDelta::days(i as i64), c, c, c, c, 1_000))
            .collect();
        TimeSeries::new(bars).unwrap()
    }

    #[test]
    fn test_example_series() {
        let s = series(&[100.0, 105.0, 98.0]);

        assert_relative_eq!(period_return(&s), -2.0, epsilon = 1e-12);

        let normalized = normalize(&s);
        assert_eq!(normalized.len(), 3);
        assert_relative_eq!(normalized[0], 100.0);
        assert_relative_eq!(normalized[1], 105.0, epsilon = 1e-9);
        assert_relative_eq!(normalized[2], 98.0, epsilon = 1e-9);
    }

    #[test]
    fn test_normalize_starts_at_base() {
        let s = series(&[3_512.65, 3_498.1, 3_560.0, 3_601.25]);
        assert_eq!(normalize(&s)[0], 100.0);
    }

    #[test]
    fn test_period_return_scale_invariant() {
        let s = series(&[1_420.5, 1_455.0, 1_399.75, 1_502.3]);
        let base = period_return(&s);

        for factor in [0.01, 3.0, 250.0] {
            assert_relative_eq!(period_return(&s.scaled(factor)), base, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_single_record() {
        let s = series(&[42.0]);
        assert_eq!(period_return(&s), 0.0);
        assert_eq!(normalize(&s), vec![100.0]);
    }
}
