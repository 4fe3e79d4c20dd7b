//! JSON output format.

use nsedash_metrics::{Comparison, DashboardReport};
use serde::Serialize;
use std::io::Write;

use crate::{FormatError, Formatter};

/// JSON output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// One JSON document.
    #[default]
    Document,
    /// Newline-delimited JSON (NDJSON/JSONL).
    Ndjson,
}

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
    /// Whether to pretty-print (only for document style).
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (document style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Document,
            pretty: false,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to pretty-print output (document style only).
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn write_document<T, W>(&self, value: &T, mut writer: W) -> Result<(), FormatError>
    where
        T: Serialize + ?Sized,
        W: Write,
    {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, value)?;
        } else {
            serde_json::to_writer(&mut writer, value)?;
        }
        writeln!(writer)?;
        Ok(())
    }

    fn write_lines<T, I, W>(items: I, mut writer: W) -> Result<(), FormatError>
    where
        T: Serialize,
        I: IntoIterator<Item = T>,
        W: Write,
    {
        for item in items {
            serde_json::to_writer(&mut writer, &item)?;
            writeln!(writer)?;
        }
        Ok(())
    }
}

/// One NDJSON line of a comparison export.
#[derive(Serialize)]
struct ComparisonPoint<'a> {
    symbol: &'a str,
    date: String,
    normalized: f64,
}

impl Formatter for JsonFormatter {
    fn write_report<W: Write + Send>(
        &self,
        report: &DashboardReport,
        writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Document => self.write_document(report, writer),
            JsonStyle::Ndjson => Self::write_lines(report.rows(), writer),
        }
    }

    fn write_comparisons<W: Write + Send>(
        &self,
        lines: &[Comparison],
        writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Document => self.write_document(lines, writer),
            JsonStyle::Ndjson => {
                let points = lines.iter().flat_map(|line| {
                    line.points.iter().map(|(date, value)| ComparisonPoint {
                        symbol: &line.label,
                        date: date.format("%Y-%m-%d").to_string(),
                        normalized: *value,
                    })
                });
                Self::write_lines(points, writer)
            }
        }
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Document => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta};
    use nsedash_types::{DailyBar, MetadataMap, Period, StockData, TimeSeries};
    use serde_json::Value;
    use std::io::Cursor;

    fn create_test_report() -> DashboardReport {
        let start = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let bars = [2_000.0, 2_050.0, 2_010.0]
            .iter()
            .enumerate()
            .map(|(i, &c)| DailyBar::new(start + TimeDelta::days(i as i64), c, c, c, c, 12_000))
            .collect();
        let data = StockData::new(
            "TCS.NS",
            Period::Month3,
            TimeSeries::new(bars).unwrap(),
            MetadataMap::new(),
        );
        DashboardReport::build(&data, &[2, 20]).unwrap()
    }

    fn render(formatter: &JsonFormatter, report: &DashboardReport) -> String {
        let mut output = Cursor::new(Vec::new());
        formatter.write_report(report, &mut output).unwrap();
        String::from_utf8(output.into_inner()).unwrap()
    }

    #[test]
    fn test_json_document() {
        let result = render(&JsonFormatter::new(), &create_test_report());
        let value: Value = serde_json::from_str(&result).unwrap();

        assert_eq!(value["symbol"], "TCS.NS");
        assert_eq!(value["period"], "3mo");
        assert_eq!(value["metrics"]["current_price"], 2_010.0);
        assert_eq!(value["series"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_json_pretty() {
        let result = render(&JsonFormatter::new().with_pretty(true), &create_test_report());
        assert!(result.contains("\n  \"symbol\": \"TCS.NS\""));
    }

    #[test]
    fn test_ndjson_rows() {
        let result = render(&JsonFormatter::ndjson(), &create_test_report());
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 3);

        let first: Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["date"], "2024-01-15");
        assert!(first["ma2"].is_null());
        assert!(first["ma20"].is_null());

        let second: Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["ma2"], 2_025.0);
    }

    #[test]
    fn test_ndjson_comparisons() {
        let report = create_test_report();
        let lines = [Comparison::from_series("TCS.NS", &report.series)];
        let mut output = Cursor::new(Vec::new());

        JsonFormatter::ndjson()
            .write_comparisons(&lines, &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let first: Value = serde_json::from_str(result.lines().next().unwrap()).unwrap();
        assert_eq!(first["symbol"], "TCS.NS");
        assert_eq!(first["normalized"], 100.0);
        assert_eq!(result.lines().count(), 3);
    }

    #[test]
    fn test_extension_follows_style() {
        assert_eq!(JsonFormatter::new().extension(), "json");
        assert_eq!(JsonFormatter::ndjson().extension(), "ndjson");
    }
}
