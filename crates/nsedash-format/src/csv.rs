//! CSV output format.

use nsedash_metrics::{Comparison, DashboardReport, average_column};
use std::io::Write;

use crate::{FormatError, Formatter};

/// CSV formatter.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self { delimiter: ',' }
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self { delimiter: '\t' }
    }
}

impl Formatter for CsvFormatter {
    fn write_report<W: Write + Send>(
        &self,
        report: &DashboardReport,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;
        let windows = report.windows();

        write!(writer, "date{d}open{d}high{d}low{d}close{d}volume")?;
        for window in &windows {
            write!(writer, "{d}{}", average_column(*window))?;
        }
        writeln!(writer, "{d}normalized")?;

        for row in report.rows() {
            write!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                row.date.format("%Y-%m-%d"),
                row.open,
                row.high,
                row.low,
                row.close,
                row.volume
            )?;
            for window in &windows {
                match row.average(*window) {
                    Some(value) => write!(writer, "{d}{value}")?,
                    None => write!(writer, "{d}")?,
                }
            }
            writeln!(writer, "{d}{}", row.normalized)?;
        }

        Ok(())
    }

    fn write_comparisons<W: Write + Send>(
        &self,
        lines: &[Comparison],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        writeln!(writer, "symbol{d}date{d}normalized")?;

        for line in lines {
            for (date, value) in &line.points {
                writeln!(writer, "{}{d}{}{d}{value}", line.label, date.format("%Y-%m-%d"))?;
            }
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        if self.delimiter == '\t' { "tsv" } else { "csv" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta};
    use nsedash_types::{DailyBar, MetadataMap, Period, StockData, TimeSeries};
    use std::io::Cursor;

    fn create_test_report() -> DashboardReport {
        let start = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let bars = [100.0, 200.0, 400.0]
            .iter()
            .enumerate()
            .map(|(i, &c)| DailyBar::new(start + TimeDelta::days(i as i64), c, c + 1.0, c - 1.0, c, 7_500))
            .collect();
        let data = StockData::new(
            "INFY.NS",
            Period::Month1,
            TimeSeries::new(bars).unwrap(),
            MetadataMap::new(),
        );
        DashboardReport::build(&data, &[2]).unwrap()
    }

    fn render(formatter: &CsvFormatter, report: &DashboardReport) -> String {
        let mut output = Cursor::new(Vec::new());
        formatter.write_report(report, &mut output).unwrap();
        String::from_utf8(output.into_inner()).unwrap()
    }

    #[test]
    fn test_csv_report() {
        let result = render(&CsvFormatter::new(), &create_test_report());
        let lines: Vec<&str> = result.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "date,open,high,low,close,volume,ma2,normalized");
        assert_eq!(lines[1], "2024-01-15,100,101,99,100,7500,,100");
        assert_eq!(lines[2], "2024-01-16,200,201,199,200,7500,150,200");
    }

    #[test]
    fn test_tsv() {
        let formatter = CsvFormatter::tsv();
        let result = render(&formatter, &create_test_report());
        assert!(result.starts_with("date\topen\thigh"));
        assert!(result.contains("2024-01-16\t200\t201\t199\t200\t7500\t150\t200\n"));
        assert_eq!(formatter.extension(), "tsv");
        assert_eq!(CsvFormatter::new().extension(), "csv");
    }

    #[test]
    fn test_csv_comparisons() {
        let report = create_test_report();
        let line = Comparison::from_series("INFY.NS", &report.series);
        let mut output = Cursor::new(Vec::new());

        CsvFormatter::new()
            .write_comparisons(&[line], &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with("symbol,date,normalized\n"));
        assert!(result.contains("INFY.NS,2024-01-15,100\n"));
        assert_eq!(result.lines().count(), 4);
    }
}
