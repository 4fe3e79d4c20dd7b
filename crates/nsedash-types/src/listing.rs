//! Exchange listing definitions.

use serde::{Deserialize, Serialize};

/// Kind of listed security.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    /// Individual equity.
    Stock,
    /// Market index used as a benchmark.
    Index,
}

impl ListingKind {
    /// Returns the kind as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stock => "stock",
            Self::Index => "index",
        }
    }
}

impl std::fmt::Display for ListingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A tradable symbol known to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Provider ticker, exchange-suffixed (e.g. "TCS.NS", "^NSEI").
    symbol: String,
    /// Human-readable name.
    name: String,
    /// Stock or index.
    kind: ListingKind,
}

impl Listing {
    /// Creates a new listing.
    #[must_use]
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, kind: ListingKind) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            kind,
        }
    }

    /// Returns the provider ticker.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the human-readable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the listing kind.
    #[must_use]
    pub const fn kind(&self) -> ListingKind {
        self.kind
    }
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_creation() {
        let listing = Listing::new("TCS.NS", "Tata Consultancy Services", ListingKind::Stock);
        assert_eq!(listing.symbol(), "TCS.NS");
        assert_eq!(listing.kind(), ListingKind::Stock);
        assert_eq!(listing.to_string(), "Tata Consultancy Services (TCS.NS)");
    }

}
