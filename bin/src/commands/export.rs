//! Export command implementation.
//!
//! Writes a stock's report rows to a file or stdout.

use crate::display::{Format, write_report};
use crate::session::{Session, resolve_listing};
use anyhow::Result;
use nsedash_lib::prelude::*;
use std::path::PathBuf;

/// Export the report for `symbol` in the given format.
pub(crate) async fn export<S: QuoteSource>(
    session: &mut Session<S>,
    symbol: &str,
    period: Period,
    format: Format,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    let listing = resolve_listing(symbol)?;
    let report = session.report(listing.symbol(), period).await?;

    write_report(&report, output.as_deref(), format)?;

    if let Some(path) = output
        && !quiet
    {
        println!(
            "Exported {} rows for {} to: {}",
            report.series.len(),
            listing.symbol(),
            path.display()
        );
    }

    Ok(())
}
