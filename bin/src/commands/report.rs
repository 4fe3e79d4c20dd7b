//! Report command implementation.
//!
//! This module renders the key metrics, moving averages and benchmark
//! comparison for one stock.

use crate::display::{format_inr, format_percent, format_signed_inr, group_thousands};
use crate::session::{Session, resolve_listing};
use anyhow::Result;
use nsedash_lib::prelude::*;

/// Print a normalized comparison table.
pub(crate) fn print_comparisons(title: &str, lines: &[Comparison]) {
    println!("{title} (normalized to 100)");
    println!("{:<15} {:>12} {:>10}", "SYMBOL", "LATEST", "CHANGE");
    println!("{}", "-".repeat(40));
    for line in lines {
        let (Some(latest), Some(change)) = (line.latest(), line.performance()) else {
            continue;
        };
        println!(
            "{:<15} {:>12.2} {:>10}",
            line.label,
            latest,
            format_percent(change)
        );
    }
}

/// Print the report sections for `listing`.
pub(crate) fn print_report(listing: &Listing, report: &DashboardReport, versus: &[Comparison]) {
    let metrics = &report.metrics;
    let latest = report.series.last();

    println!("{listing} - {} as of {}", report.period, latest.date);
    println!("{}", "-".repeat(50));
    println!("Current Price:  {}", format_inr(metrics.current_price));
    println!("Day Change:     {}", format_signed_inr(metrics.day_change));
    println!("Volume:         {}", group_thousands(metrics.volume));
    println!("Period Return:  {}", format_percent(metrics.period_return));
    println!(
        "Last Close Move: {} ({}) from {}",
        format_signed_inr(report.change.absolute),
        format_percent(report.change.percent),
        format_inr(report.change.previous_close)
    );

    if !report.moving_averages.is_empty() {
        println!("\nMoving Averages");
        for ma in &report.moving_averages {
            let value = ma.latest().map_or_else(|| "n/a".to_string(), format_inr);
            println!("  {:<12} {value}", ma.label());
        }
    }

    if !versus.is_empty() {
        println!();
        print_comparisons("Performance vs Benchmark", versus);
    }
}

/// Fetch and show the report for one stock.
pub(crate) async fn show_report<S: QuoteSource>(
    session: &mut Session<S>,
    symbol: &str,
    period: Period,
) -> Result<()> {
    let listing = resolve_listing(symbol)?;
    let data = session.fetch(listing.symbol(), period).await?;
    let report = session.build_report(&data)?;
    let versus = session.versus_benchmark(&data).await?;

    print_report(listing, &report, &versus);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::session::tests::StubSource;

    #[tokio::test]
    async fn test_show_report_fetches_stock_once_without_cache() {
        let config = AppConfig {
            cache_ttl_secs: 0,
            ..AppConfig::default()
        };
        let mut session = Session::with_source(StubSource::default(), config, true);

        show_report(&mut session, "itc", Period::Month6).await.unwrap();

        let calls = session.source().calls.lock().unwrap().clone();
        assert_eq!(
            calls,
            vec![
                ("ITC.NS".to_string(), Period::Month6),
                ("^NSEI".to_string(), Period::Month6),
            ]
        );
    }
}
