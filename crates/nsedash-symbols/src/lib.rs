//! Symbol registry for the nsedash stock dashboard.
//!
//! This crate provides the fixed universe of selectable NSE stocks and the
//! benchmark index, in dashboard order.
//!
//! # Example
//!
//! ```
//! use nsedash_symbols::SymbolRegistry;
//!
//! let registry = SymbolRegistry::global();
//!
//! // Lookup by symbol
//! if let Some(listing) = registry.get("tcs.ns") {
//!     println!("{}: {}", listing.symbol(), listing.name());
//! }
//! ```

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/nsedash/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::sync::OnceLock;

use nsedash_types::{DashError, Listing};
use serde::Deserialize;

/// The symbol list embedded at compile time.
const SYMBOLS_JSON: &str = include_str!("../data/symbols.json");

/// Global registry instance.
static REGISTRY: OnceLock<SymbolRegistry> = OnceLock::new();

#[derive(Deserialize)]
struct RegistryFile {
    benchmark: Listing,
    stocks: Vec<Listing>,
}

/// Registry of the dashboard's stocks and its benchmark index.
#[derive(Debug)]
pub struct SymbolRegistry {
    benchmark: Listing,
    stocks: Vec<Listing>,
}

impl SymbolRegistry {
    /// Returns the global symbol registry.
    ///
    /// The registry is initialized lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        REGISTRY.get_or_init(Self::load)
    }

    /// Loads listings from the embedded JSON data.
    fn load() -> Self {
        let file: RegistryFile = serde_json::from_str(SYMBOLS_JSON).expect("Invalid symbols.json");
        Self::new(file.benchmark, file.stocks)
    }

    /// Creates a registry from explicit listings.
    #[must_use]
    pub const fn new(benchmark: Listing, stocks: Vec<Listing>) -> Self {
        Self { benchmark, stocks }
    }

    /// Returns the benchmark index.
    #[must_use]
    pub const fn benchmark(&self) -> &Listing {
        &self.benchmark
    }

    /// Looks up a stock or the benchmark by symbol (case-insensitive).
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&Listing> {
        let symbol = symbol.trim();
        self.all()
            .find(|listing| listing.symbol().eq_ignore_ascii_case(symbol))
    }

    /// Looks up a symbol, failing with [`DashError::UnknownSymbol`].
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol is not registered.
    pub fn require(&self, symbol: &str) -> Result<&Listing, DashError> {
        self.get(symbol)
            .ok_or_else(|| DashError::UnknownSymbol(symbol.to_string()))
    }

    /// Returns the stocks in dashboard order.
    pub fn stocks(&self) -> impl Iterator<Item = &Listing> {
        self.stocks.iter()
    }

    /// Returns the benchmark followed by every stock.
    pub fn all(&self) -> impl Iterator<Item = &Listing> {
        std::iter::once(&self.benchmark).chain(self.stocks.iter())
    }

    /// Returns the first `n` stocks in dashboard order.
    #[must_use]
    pub fn top(&self, n: usize) -> &[Listing] {
        &self.stocks[..n.min(self.stocks.len())]
    }

    /// Returns the number of stocks (the benchmark is not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    /// Returns true if there are no stocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }

    /// Searches stocks and the benchmark by symbol or name (case-insensitive).
    pub fn search(&self, pattern: &str) -> Vec<&Listing> {
        let pattern = pattern.to_lowercase();
        self.all()
            .filter(|l| {
                l.symbol().to_lowercase().contains(&pattern)
                    || l.name().to_lowercase().contains(&pattern)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nsedash_types::ListingKind;

    #[test]
    fn test_registry_loads() {
        let registry = SymbolRegistry::global();
        assert_eq!(registry.len(), 15);
        assert_eq!(registry.benchmark().symbol(), "^NSEI");
        assert_eq!(registry.benchmark().kind(), ListingKind::Index);
    }

    #[test]
    fn test_dashboard_order() {
        let registry = SymbolRegistry::global();
        let top: Vec<_> = registry.top(5).iter().map(Listing::symbol).collect();
        assert_eq!(
            top,
            vec!["RELIANCE.NS", "TCS.NS", "HDFCBANK.NS", "INFY.NS", "ICICIBANK.NS"]
        );
        assert_eq!(registry.stocks().last().map(Listing::symbol), Some("MARUTI.NS"));
    }

    #[test]
    fn test_top_clamps() {
        let registry = SymbolRegistry::global();
        assert_eq!(registry.top(100).len(), 15);
        assert!(registry.top(0).is_empty());
    }

    #[test]
    fn test_get_case_insensitive() {
        let registry = SymbolRegistry::global();
        assert!(registry.get("tcs.ns").is_some());
        assert!(registry.get("^nsei").is_some());
        assert!(registry.get("AAPL").is_none());
    }

    #[test]
    fn test_require_unknown() {
        let registry = SymbolRegistry::global();
        assert_eq!(
            registry.require("AAPL").unwrap_err(),
            DashError::UnknownSymbol("AAPL".to_string())
        );
    }

    #[test]
    fn test_search() {
        let registry = SymbolRegistry::global();
        let banks = registry.search("bank");
        assert!(banks.len() >= 4);
        assert!(banks.iter().all(|l| l.kind() == ListingKind::Stock));
        assert_eq!(registry.search("nifty").len(), 1);
    }
}
