//! Compare command implementation.

use crate::commands::report::print_comparisons;
use crate::display::{Format, write_comparisons};
use crate::session::Session;
use anyhow::Result;
use nsedash_lib::prelude::*;
use std::path::PathBuf;

/// Compare the first `count` stocks over `period`, optionally exporting the
/// normalized lines.
pub(crate) async fn compare_top<S: QuoteSource>(
    session: &mut Session<S>,
    period: Period,
    count: Option<usize>,
    output: Option<PathBuf>,
    format: Format,
) -> Result<()> {
    let count = count.unwrap_or(session.config().compare_count);
    let lines = session.top_comparison(period, count).await?;

    match output {
        Some(path) => {
            write_comparisons(&lines, Some(&path), format)?;
            println!("Output written to: {}", path.display());
        }
        None => print_comparisons(&format!("Top {count} stocks over {period}"), &lines),
    }

    Ok(())
}
