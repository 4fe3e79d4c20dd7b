//! Chart payload parsing.

use chrono::{DateTime, NaiveDate};
use nsedash_types::{DailyBar, MetadataMap, SeriesError, TimeSeries};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while parsing a chart payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The body is not valid chart JSON.
    #[error("Invalid chart JSON: {0}")]
    Json(String),

    /// The provider reported an error instead of data.
    #[error("Provider error [{code}]: {description}")]
    Api {
        /// Provider error code.
        code: String,
        /// Provider error description.
        description: String,
    },

    /// The payload contained no usable rows.
    #[error("Chart result is empty")]
    Empty,

    /// A timestamp could not be mapped to a calendar date.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(i64),

    /// Rows were not in chronological order.
    #[error("Rows out of order: {previous} followed by {next}")]
    OutOfOrder {
        /// Date of the earlier row.
        previous: NaiveDate,
        /// Date of the offending row.
        next: NaiveDate,
    },
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartData>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    #[serde(default)]
    meta: Value,
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteColumns>,
}

#[derive(Debug, Default, Deserialize)]
struct QuoteColumns {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

impl QuoteColumns {
    /// Returns row `i` if every field is present.
    fn row(&self, i: usize) -> Option<(f64, f64, f64, f64, f64)> {
        let field = |column: &[Option<f64>]| column.get(i).copied().flatten();
        Some((
            field(&self.open)?,
            field(&self.high)?,
            field(&self.low)?,
            field(&self.close)?,
            field(&self.volume)?,
        ))
    }
}

/// Parses a chart response body into a daily series and its metadata.
///
/// Rows with any missing OHLCV field are skipped. Timestamps are shifted by
/// the exchange `gmtoffset` before taking the calendar date. When two rows
/// share a date the later one wins; any other backwards step is an error.
///
/// # Errors
///
/// Returns an error if the body is not chart JSON, carries a provider error,
/// has no usable rows, or is out of order.
pub fn parse_chart(body: &[u8]) -> Result<(TimeSeries, MetadataMap), ParseError> {
    let response: ChartResponse =
        serde_json::from_slice(body).map_err(|e| ParseError::Json(e.to_string()))?;

    if let Some(error) = response.chart.error {
        return Err(ParseError::Api {
            code: error.code,
            description: error.description,
        });
    }

    let data = response
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or(ParseError::Empty)?;

    let metadata = MetadataMap::from_json(&data.meta);
    let offset = metadata
        .get("gmtoffset")
        .and_then(Value::as_i64)
        .unwrap_or(0);

    let columns = data.indicators.quote.into_iter().next().unwrap_or_default();
    let mut bars: Vec<DailyBar> = Vec::with_capacity(data.timestamp.len());

    for (i, &timestamp) in data.timestamp.iter().enumerate() {
        let Some((open, high, low, close, volume)) = columns.row(i) else {
            continue;
        };
        let date = trading_date(timestamp, offset)?;
        let bar = DailyBar::new(date, open, high, low, close, volume.max(0.0).round() as u64);

        match bars.last_mut() {
            Some(last) if last.date == date => *last = bar,
            Some(last) if last.date > date => {
                return Err(ParseError::OutOfOrder {
                    previous: last.date,
                    next: date,
                });
            }
            _ => bars.push(bar),
        }
    }

    let series = TimeSeries::new(bars).map_err(|e| match e {
        SeriesError::Empty => ParseError::Empty,
        SeriesError::NotIncreasing { previous, next } => ParseError::OutOfOrder { previous, next },
    })?;

    Ok((series, metadata))
}

/// Extracts the provider's error description from a response body, if any.
#[must_use]
pub fn api_error_description(body: &[u8]) -> Option<String> {
    let response: ChartResponse = serde_json::from_slice(body).ok()?;
    response
        .chart
        .error
        .map(|e| format!("{}: {}", e.code, e.description))
}

/// Maps a Unix timestamp to the exchange-local calendar date.
fn trading_date(timestamp: i64, gmt_offset: i64) -> Result<NaiveDate, ParseError> {
    DateTime::from_timestamp(timestamp.saturating_add(gmt_offset), 0)
        .map(|dt| dt.date_naive())
        .ok_or(ParseError::InvalidTimestamp(timestamp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // 2024-06-10 09:15 IST == 03:45 UTC
    const JUNE_10: i64 = 1_717_991_100;
    const DAY: i64 = 86_400;

    fn chart(timestamps: &[i64], closes: &[Option<f64>]) -> Vec<u8> {
        let n = timestamps.len();
        json!({
            "chart": {
                "result": [{
                    "meta": {
                        "currency": "INR",
                        "symbol": "TCS.NS",
                        "exchangeName": "NSI",
                        "gmtoffset": 19800,
                        "regularMarketPrice": 3890.1
                    },
                    "timestamp": timestamps,
                    "indicators": {
                        "quote": [{
                            "open": vec![Some(100.0); n],
                            "high": vec![Some(110.0); n],
                            "low": vec![Some(90.0); n],
                            "close": closes,
                            "volume": vec![Some(1_000.0); n]
                        }]
                    }
                }],
                "error": null
            }
        })
        .to_string()
        .into_bytes()
    }

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    #[test]
    fn test_parse_valid_chart() {
        let body = chart(
            &[JUNE_10, JUNE_10 + DAY, JUNE_10 + 2 * DAY],
            &[Some(100.0), Some(105.0), Some(98.0)],
        );
        let (series, meta) = parse_chart(&body).unwrap();

        assert_eq!(series.closes(), vec![100.0, 105.0, 98.0]);
        assert_eq!(series.first().date, date(6, 10));
        assert_eq!(series.last().date, date(6, 12));
        assert_eq!(series.last().volume, 1_000);
        assert_eq!(meta.get_str("currency"), Some("INR"));
    }

    #[test]
    fn test_gmtoffset_shifts_date() {
        // 20:00 UTC on June 9 is 01:30 IST on June 10.
        let late_utc = JUNE_10 - 7 * 3600 - 45 * 60;
        let body = chart(&[late_utc, JUNE_10 + DAY], &[Some(1.0), Some(2.0)]);
        let (series, _) = parse_chart(&body).unwrap();
        assert_eq!(series.first().date, date(6, 10));
    }

    #[test]
    fn test_null_rows_skipped() {
        let body = chart(
            &[JUNE_10, JUNE_10 + DAY, JUNE_10 + 2 * DAY],
            &[Some(100.0), None, Some(98.0)],
        );
        let (series, _) = parse_chart(&body).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.closes(), vec![100.0, 98.0]);
    }

    #[test]
    fn test_same_day_row_replaced() {
        let body = chart(
            &[JUNE_10, JUNE_10 + DAY, JUNE_10 + DAY + 3600],
            &[Some(100.0), Some(101.0), Some(102.5)],
        );
        let (series, _) = parse_chart(&body).unwrap();
        assert_eq!(series.closes(), vec![100.0, 102.5]);
    }

    #[test]
    fn test_out_of_order_rejected() {
        let body = chart(&[JUNE_10 + DAY, JUNE_10], &[Some(1.0), Some(2.0)]);
        assert_eq!(
            parse_chart(&body).unwrap_err(),
            ParseError::OutOfOrder {
                previous: date(6, 11),
                next: date(6, 10),
            }
        );
    }

    #[test]
    fn test_all_null_is_empty() {
        let body = chart(&[JUNE_10, JUNE_10 + DAY], &[None, None]);
        assert_eq!(parse_chart(&body).unwrap_err(), ParseError::Empty);
    }

    #[test]
    fn test_missing_result_is_empty() {
        let body = br#"{"chart":{"result":[],"error":null}}"#;
        assert_eq!(parse_chart(body).unwrap_err(), ParseError::Empty);
    }

    #[test]
    fn test_result_without_timestamps_is_empty() {
        let body = br#"{"chart":{"result":[{"meta":{"symbol":"X"},"indicators":{"quote":[{}]}}],"error":null}}"#;
        assert_eq!(parse_chart(body).unwrap_err(), ParseError::Empty);
    }

    #[test]
    fn test_provider_error() {
        let body = br#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#;
        assert!(matches!(parse_chart(body), Err(ParseError::Api { .. })));
        assert_eq!(
            api_error_description(body).as_deref(),
            Some("Not Found: No data found, symbol may be delisted")
        );
    }

    #[test]
    fn test_garbage_body() {
        assert!(matches!(parse_chart(b"<html>"), Err(ParseError::Json(_))));
        assert!(api_error_description(b"<html>").is_none());
    }
}
