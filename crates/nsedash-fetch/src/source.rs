//! Remote history source abstraction.

use async_trait::async_trait;
use nsedash_types::{DashError, Period, StockData};

/// A provider of daily history and metadata.
///
/// Implementations perform exactly one remote call per invocation and map
/// every provider failure to [`DashError::DataUnavailable`].
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetches daily bars and metadata for `symbol` over `period`.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::DataUnavailable`] if the provider fails or its
    /// response cannot be used.
    async fn history(&self, symbol: &str, period: Period) -> Result<StockData, DashError>;
}
