//! Overview command implementation.
//!
//! Shows the benchmark index's previous and latest close.

use crate::display::{format_percent, format_points};
use crate::session::Session;
use anyhow::Result;
use nsedash_lib::prelude::*;

/// Print the benchmark cards.
pub(crate) fn print_overview(benchmark: &Listing, overview: &IndexOverview) {
    println!("{} Overview", benchmark.name());
    println!("{}", "-".repeat(40));
    println!("Previous Day Close: {}", format_points(overview.previous_close));
    println!(
        "Today's Close:      {}  ({}{}, {})",
        format_points(overview.today_close),
        if overview.change > 0.0 { "+" } else { "" },
        format_points(overview.change),
        format_percent(overview.change_percent)
    );
}

/// Fetch and show the benchmark overview.
pub(crate) async fn show_overview<S: QuoteSource>(session: &mut Session<S>) -> Result<()> {
    let overview = session.overview().await?;
    print_overview(session.benchmark(), &overview);
    Ok(())
}
