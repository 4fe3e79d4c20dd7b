//! List command implementation.
//!
//! This module handles listing the dashboard's stocks and benchmark with
//! optional filtering.

use anyhow::Result;
use nsedash_lib::prelude::*;

/// List the benchmark and stocks, optionally filtered by a search pattern.
pub(crate) fn list_symbols(search: Option<&str>) -> Result<()> {
    let registry = SymbolRegistry::global();

    let listings: Vec<_> = match search {
        Some(pattern) => registry.search(pattern),
        None => registry.all().collect(),
    };

    if listings.is_empty() {
        println!("No symbols found.");
        return Ok(());
    }

    println!("{:<15} {:<35} {:<8}", "SYMBOL", "NAME", "KIND");
    println!("{}", "-".repeat(60));

    for listing in &listings {
        println!(
            "{:<15} {:<35} {:<8}",
            listing.symbol(),
            listing.name(),
            listing.kind().as_str()
        );
    }

    println!("\nTotal: {} symbols", listings.len());
    Ok(())
}
