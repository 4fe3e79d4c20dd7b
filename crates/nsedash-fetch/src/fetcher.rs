//! Read-through cached fetching.

use chrono::TimeDelta;
use nsedash_types::{DashError, Period, StockData};
use std::sync::Arc;
use tracing::{debug, info};

use crate::{Clock, QuoteSource, SystemClock, TtlCache, cache::DEFAULT_TTL_SECS};

/// Fewest records a fetch may return; delta metrics need two closes.
pub const MIN_RECORDS: usize = 2;

type CacheKey = (String, Period);

/// Fetches histories through a per-`(symbol, period)` TTL cache.
///
/// A fresh entry is returned without contacting the source. A missing or
/// expired entry triggers exactly one source call; on failure the error is
/// returned and nothing is cached.
#[derive(Debug)]
pub struct DataFetcher<S, C = SystemClock> {
    source: S,
    clock: C,
    cache: TtlCache<CacheKey, Arc<StockData>>,
}

impl<S: QuoteSource> DataFetcher<S> {
    /// Creates a fetcher using wall-clock time and the default one-hour TTL.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_clock(source, SystemClock, TimeDelta::seconds(DEFAULT_TTL_SECS))
    }
}

impl<S: QuoteSource, C: Clock> DataFetcher<S, C> {
    /// Creates a fetcher with an explicit clock and time-to-live.
    #[must_use]
    pub fn with_clock(source: S, clock: C, ttl: TimeDelta) -> Self {
        Self {
            source,
            clock,
            cache: TtlCache::new(ttl),
        }
    }

    /// Returns the underlying source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Returns the cache time-to-live.
    #[must_use]
    pub const fn ttl(&self) -> TimeDelta {
        self.cache.ttl()
    }

    /// Returns daily history and metadata for `symbol` over `period`.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::DataUnavailable`] if the source fails or yields
    /// fewer than [`MIN_RECORDS`] records.
    pub async fn fetch(&mut self, symbol: &str, period: Period) -> Result<Arc<StockData>, DashError> {
        let key = (normalize_symbol(symbol), period);
        let now = self.clock.now();

        if let Some(data) = self.cache.get(&key, now) {
            debug!(symbol = %key.0, %period, "cache hit");
            return Ok(Arc::clone(data));
        }
        debug!(symbol = %key.0, %period, "cache miss");

        let data = self.source.history(&key.0, period).await?;
        if data.series.len() < MIN_RECORDS {
            return Err(DashError::unavailable(
                &key.0,
                format!(
                    "only {} record(s) returned, need at least {MIN_RECORDS}",
                    data.series.len()
                ),
            ));
        }

        info!(symbol = %key.0, %period, rows = data.series.len(), "fetched history");
        let data = Arc::new(data);
        self.cache.insert(key, Arc::clone(&data), now);
        Ok(data)
    }

    /// Drops the cached entry for `symbol` and `period`, forcing a refetch.
    pub fn invalidate(&mut self, symbol: &str, period: Period) -> bool {
        self.cache
            .remove(&(normalize_symbol(symbol), period))
            .is_some()
    }

    /// Drops every expired entry, returning how many were removed.
    pub fn evict_expired(&mut self) -> usize {
        self.cache.evict_expired(self.clock.now())
    }

    /// Drops every cached entry.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Returns the number of cached entries, including expired ones.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

/// Canonical cache and request form of a ticker.
fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ManualClock;
    use async_trait::async_trait;
    use chrono::{NaiveDate, TimeZone, Utc};
    use nsedash_types::{DailyBar, MetadataMap, TimeSeries};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Source returning a fixed number of bars and counting calls.
    #[derive(Debug, Default)]
    struct CountingSource {
        calls: AtomicUsize,
        rows: usize,
        fail: bool,
    }

    impl CountingSource {
        fn with_rows(rows: usize) -> Self {
            Self {
                rows,
                ..Default::default()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl QuoteSource for CountingSource {
        async fn history(&self, symbol: &str, period: Period) -> Result<StockData, DashError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(DashError::unavailable(symbol, "provider down"));
            }
            let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
            let bars: Vec<_> = (0..self.rows)
                .map(|i| {
                    let close = 100.0 + i as f64 + call as f64;
                    DailyBar::new(start + TimeDelta::days(i as i64), close, close, close, close, 10)
                })
                .collect();
            let series = TimeSeries::new(bars).unwrap();
            Ok(StockData::new(symbol, period, series, MetadataMap::new()))
        }
    }

    fn fetcher(source: CountingSource) -> (DataFetcher<CountingSource, ManualClock>, ManualClock) {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap());
        let fetcher = DataFetcher::with_clock(source, clock.clone(), TimeDelta::hours(1));
        (fetcher, clock)
    }

    #[tokio::test]
    async fn test_second_fetch_within_ttl_is_cached() {
        let (mut fetcher, clock) = fetcher(CountingSource::with_rows(3));

        let first = fetcher.fetch("TCS.NS", Period::Month1).await.unwrap();
        clock.advance(TimeDelta::minutes(59));
        let second = fetcher.fetch("TCS.NS", Period::Month1).await.unwrap();

        assert_eq!(fetcher.source().calls(), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_refetch_after_ttl() {
        let (mut fetcher, clock) = fetcher(CountingSource::with_rows(3));

        let first = fetcher.fetch("TCS.NS", Period::Month1).await.unwrap();
        clock.advance(TimeDelta::hours(1));
        let second = fetcher.fetch("TCS.NS", Period::Month1).await.unwrap();

        assert_eq!(fetcher.source().calls(), 2);
        assert_ne!(first.series.closes(), second.series.closes());
        assert_eq!(fetcher.cached_len(), 1);
    }

    #[tokio::test]
    async fn test_periods_are_separate_entries() {
        let (mut fetcher, _clock) = fetcher(CountingSource::with_rows(3));

        fetcher.fetch("INFY.NS", Period::Month1).await.unwrap();
        fetcher.fetch("INFY.NS", Period::Year1).await.unwrap();

        assert_eq!(fetcher.source().calls(), 2);
        assert_eq!(fetcher.cached_len(), 2);
    }

    #[tokio::test]
    async fn test_symbol_case_shares_entry() {
        let (mut fetcher, _clock) = fetcher(CountingSource::with_rows(3));

        let data = fetcher.fetch(" infy.ns", Period::Month1).await.unwrap();
        fetcher.fetch("INFY.NS", Period::Month1).await.unwrap();

        assert_eq!(data.symbol, "INFY.NS");
        assert_eq!(fetcher.source().calls(), 1);
    }

    #[tokio::test]
    async fn test_single_record_is_unavailable() {
        let (mut fetcher, _clock) = fetcher(CountingSource::with_rows(1));

        let err = fetcher.fetch("LT.NS", Period::Month1).await.unwrap_err();

        assert!(matches!(err, DashError::DataUnavailable { ref symbol, .. } if symbol == "LT.NS"));
        assert_eq!(fetcher.cached_len(), 0);
    }

    #[tokio::test]
    async fn test_source_failure_not_cached_or_retried() {
        let source = CountingSource {
            fail: true,
            ..CountingSource::with_rows(3)
        };
        let (mut fetcher, _clock) = fetcher(source);

        assert!(fetcher.fetch("SBIN.NS", Period::Month3).await.is_err());
        assert_eq!(fetcher.source().calls(), 1);
        assert!(fetcher.fetch("SBIN.NS", Period::Month3).await.is_err());
        assert_eq!(fetcher.source().calls(), 2);
        assert_eq!(fetcher.cached_len(), 0);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let (mut fetcher, _clock) = fetcher(CountingSource::with_rows(3));

        fetcher.fetch("ITC.NS", Period::Month6).await.unwrap();
        assert!(fetcher.invalidate("itc.ns", Period::Month6));
        fetcher.fetch("ITC.NS", Period::Month6).await.unwrap();

        assert_eq!(fetcher.source().calls(), 2);
    }

    #[tokio::test]
    async fn test_evict_expired() {
        let (mut fetcher, clock) = fetcher(CountingSource::with_rows(3));

        fetcher.fetch("A.NS", Period::Month1).await.unwrap();
        clock.advance(TimeDelta::minutes(40));
        fetcher.fetch("B.NS", Period::Month1).await.unwrap();
        clock.advance(TimeDelta::minutes(30));

        assert_eq!(fetcher.evict_expired(), 1);
        assert_eq!(fetcher.cached_len(), 1);
        fetcher.clear();
        assert_eq!(fetcher.cached_len(), 0);
    }
}
