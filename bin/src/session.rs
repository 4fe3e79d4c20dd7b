//! Shared fetch state for one CLI invocation.

use crate::config::AppConfig;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use nsedash_lib::prelude::*;
use nsedash_lib::SystemClock;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Resolves a ticker, accepting the bare NSE code (`tcs`) as well as the
/// provider form (`TCS.NS`).
pub(crate) fn resolve_listing(symbol: &str) -> Result<&'static Listing> {
    let registry = SymbolRegistry::global();
    let symbol = symbol.trim();
    registry
        .get(symbol)
        .or_else(|| registry.get(&format!("{symbol}.NS")))
        .with_context(|| {
            format!("Unknown symbol: {symbol}. Run `nsedash list` to see available symbols")
        })
}

/// Fetcher, benchmark and settings shared by every view.
///
/// The fetcher's cache lives as long as the session, so repeated views in the
/// interactive dashboard reuse fresh histories.
#[derive(Debug)]
pub(crate) struct Session<S = ChartClient> {
    config: AppConfig,
    benchmark: Listing,
    fetcher: DataFetcher<S>,
    quiet: bool,
}

impl Session {
    /// Creates a session backed by the chart endpoint.
    pub(crate) fn connect(config: AppConfig, quiet: bool) -> Result<Self> {
        let client =
            ChartClient::new(config.client_config()).context("Failed to create HTTP client")?;
        Ok(Self::with_source(client, config, quiet))
    }
}

impl<S: QuoteSource> Session<S> {
    /// Creates a session over an arbitrary source.
    pub(crate) fn with_source(source: S, config: AppConfig, quiet: bool) -> Self {
        let fetcher = DataFetcher::with_clock(source, SystemClock, config.cache_ttl());
        let benchmark = SymbolRegistry::global()
            .get(&config.benchmark)
            .cloned()
            .unwrap_or_else(|| {
                Listing::new(&config.benchmark, &config.benchmark, ListingKind::Index)
            });
        Self {
            config,
            benchmark,
            fetcher,
            quiet,
        }
    }

    pub(crate) const fn config(&self) -> &AppConfig {
        &self.config
    }

    pub(crate) const fn benchmark(&self) -> &Listing {
        &self.benchmark
    }

    /// Fetches a history through the cache, with a spinner unless quiet.
    pub(crate) async fn fetch(&mut self, symbol: &str, period: Period) -> Result<Arc<StockData>> {
        let spinner = self.spinner(format!("Fetching {symbol} ({period})"));
        let result = self.fetcher.fetch(symbol, period).await;
        spinner.finish_and_clear();
        Ok(result?)
    }

    /// Builds the full report for one stock.
    pub(crate) async fn report(&mut self, symbol: &str, period: Period) -> Result<DashboardReport> {
        let data = self.fetch(symbol, period).await?;
        self.build_report(&data)
    }

    /// Builds the report from an already fetched history.
    pub(crate) fn build_report(&self, data: &StockData) -> Result<DashboardReport> {
        Ok(DashboardReport::build(data, &self.config.moving_average_windows)?)
    }

    /// Builds the benchmark cards from a two-day history.
    pub(crate) async fn overview(&mut self) -> Result<IndexOverview> {
        let symbol = self.benchmark.symbol().to_string();
        let data = self.fetch(&symbol, Period::Day2).await?;
        Ok(IndexOverview::compute(&data.series)?)
    }

    /// Rebases one stock against the benchmark over the same period.
    pub(crate) async fn versus_benchmark(
        &mut self,
        data: &StockData,
    ) -> Result<Vec<Comparison>> {
        let symbol = self.benchmark.symbol().to_string();
        let index = self.fetch(&symbol, data.period).await?;
        Ok(compare([
            (data.symbol.as_str(), &data.series),
            (index.symbol.as_str(), &index.series),
        ]))
    }

    /// Rebases the first `count` stocks, skipping any whose fetch fails.
    pub(crate) async fn top_comparison(
        &mut self,
        period: Period,
        count: usize,
    ) -> Result<Vec<Comparison>> {
        let mut histories = Vec::with_capacity(count);
        for listing in SymbolRegistry::global().top(count) {
            match self.fetch(listing.symbol(), period).await {
                Ok(data) => histories.push(data),
                Err(err) => {
                    warn!(symbol = listing.symbol(), error = %err, "skipping comparison symbol");
                }
            }
        }
        anyhow::ensure!(!histories.is_empty(), "No comparison data could be fetched");

        Ok(compare(
            histories
                .iter()
                .map(|data| (data.symbol.as_str(), &data.series)),
        ))
    }

    /// Drops cached histories older than the TTL.
    pub(crate) fn evict_expired(&mut self) -> usize {
        self.fetcher.evict_expired()
    }

    #[cfg(test)]
    pub(crate) fn source(&self) -> &S {
        self.fetcher.source()
    }

    fn spinner(&self, message: String) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }
}
