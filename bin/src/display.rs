//! Display utilities and output formatting for the nsedash CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use nsedash_lib::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// `--format` choices, one per library [`OutputFormat`].
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Tsv,
    Json,
    Ndjson,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => Self::Csv,
            Format::Tsv => Self::Tsv,
            Format::Json => Self::Json,
            Format::Ndjson => Self::Ndjson,
        }
    }
}

/// Opens `output` for writing, or stdout when absent.
fn open_output(output: Option<&Path>) -> Result<Box<dyn Write + Send>> {
    Ok(match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(std::io::stdout())),
    })
}

/// Write a report to a file (or stdout) in the specified format.
pub(crate) fn write_report(
    report: &DashboardReport,
    output: Option<&Path>,
    format: Format,
) -> Result<()> {
    let mut writer = open_output(output)?;

    match OutputFormat::from(format) {
        OutputFormat::Csv => CsvFormatter::new().write_report(report, &mut writer)?,
        OutputFormat::Tsv => CsvFormatter::tsv().write_report(report, &mut writer)?,
        OutputFormat::Json => JsonFormatter::new()
            .with_pretty(true)
            .write_report(report, &mut writer)?,
        OutputFormat::Ndjson => JsonFormatter::ndjson().write_report(report, &mut writer)?,
    }

    writer.flush()?;
    Ok(())
}

/// Write comparison lines to a file (or stdout) in the specified format.
pub(crate) fn write_comparisons(
    lines: &[Comparison],
    output: Option<&Path>,
    format: Format,
) -> Result<()> {
    let mut writer = open_output(output)?;

    match OutputFormat::from(format) {
        OutputFormat::Csv => CsvFormatter::new().write_comparisons(lines, &mut writer)?,
        OutputFormat::Tsv => CsvFormatter::tsv().write_comparisons(lines, &mut writer)?,
        OutputFormat::Json => JsonFormatter::new()
            .with_pretty(true)
            .write_comparisons(lines, &mut writer)?,
        OutputFormat::Ndjson => JsonFormatter::ndjson().write_comparisons(lines, &mut writer)?,
    }

    writer.flush()?;
    Ok(())
}

/// Parses a user-selectable history period for `--period`.
pub(crate) fn parse_period(s: &str) -> Result<Period> {
    let period: Period = s.parse()?;
    anyhow::ensure!(
        Period::selectable().contains(&period),
        "period '{s}' is not selectable, expected one of: 1mo, 3mo, 6mo, 1y, 2y, 5y"
    );
    Ok(period)
}

/// Inserts a comma every three digits, e.g. `1234567` -> `1,234,567`.
pub(crate) fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats an amount in rupees with two decimals, e.g. `₹1,234.56`.
pub(crate) fn format_inr(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let whole = whole
        .parse::<u64>()
        .map_or_else(|_| whole.to_string(), group_thousands);
    format!("{sign}₹{whole}.{fraction}")
}

/// Formats a rupee change with an explicit sign, e.g. `+₹12.50`.
pub(crate) fn format_signed_inr(value: f64) -> String {
    if value > 0.0 {
        format!("+{}", format_inr(value))
    } else {
        format_inr(value)
    }
}

/// Formats a percentage with an explicit sign, e.g. `+1.25%`.
pub(crate) fn format_percent(value: f64) -> String {
    format!("{value:+.2}%")
}

/// Formats an index level without currency, e.g. `22,104.05`.
pub(crate) fn format_points(value: f64) -> String {
    format_inr(value).replacen('₹', "", 1)
}
