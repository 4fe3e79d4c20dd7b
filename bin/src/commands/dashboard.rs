//! Interactive dashboard implementation.
//!
//! Prompts for a stock and period, renders every section, then offers a
//! metadata question. One session is reused across iterations so cached
//! histories stay warm.

use crate::commands::ask::answer_line;
use crate::commands::overview::print_overview;
use crate::commands::report::{print_comparisons, print_report};
use crate::session::Session;
use anyhow::{Context, Result};
use inquire::error::InquireError;
use inquire::{Confirm, Select, Text};
use nsedash_lib::prelude::*;
use std::sync::Arc;
use tracing::debug;

/// Maps a cancelled prompt to `None` so the loop can exit cleanly.
fn optional<T>(result: Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err).context("Prompt failed"),
    }
}

/// Render every section for one stock and period.
async fn render<S: QuoteSource>(
    session: &mut Session<S>,
    listing: &Listing,
    period: Period,
) -> Result<Arc<StockData>> {
    let overview = session.overview().await?;
    print_overview(session.benchmark(), &overview);
    println!();

    let data = session.fetch(listing.symbol(), period).await?;
    let report = session.build_report(&data)?;
    let versus = session.versus_benchmark(&data).await?;
    print_report(listing, &report, &versus);
    println!();

    let count = session.config().compare_count;
    let top = session.top_comparison(period, count).await?;
    print_comparisons(&format!("Top {count} stocks"), &top);

    Ok(data)
}

/// Run the interactive dashboard until the user quits.
pub(crate) async fn run_dashboard<S: QuoteSource>(session: &mut Session<S>) -> Result<()> {
    let stocks: Vec<Listing> = SymbolRegistry::global().stocks().cloned().collect();
    let periods = Period::selectable().to_vec();

    loop {
        let Some(listing) = optional(Select::new("Select a stock:", stocks.clone()).prompt())?
        else {
            break;
        };
        let Some(period) = optional(
            Select::new("Select time period:", periods.clone())
                .with_starting_cursor(0)
                .prompt(),
        )?
        else {
            break;
        };

        println!();
        match render(session, &listing, period).await {
            Ok(data) => {
                let question = optional(
                    Text::new("Ask a question about this stock (leave blank to skip):").prompt(),
                )?;
                if let Some(question) = question.filter(|q| !q.is_empty()) {
                    println!("{}", answer_line(&data.metadata, &question));
                }
            }
            Err(err) => eprintln!("Error: {err:#}"),
        }

        let evicted = session.evict_expired();
        debug!(evicted, "evicted expired histories");

        match optional(Confirm::new("View another stock?").with_default(true).prompt())? {
            Some(true) => println!(),
            _ => break,
        }
    }

    Ok(())
}
