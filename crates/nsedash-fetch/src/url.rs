//! Yahoo Finance chart URL construction.

use nsedash_types::Period;
use reqwest::Url;
use thiserror::Error;

/// Base URL for the Yahoo Finance v8 chart endpoint.
pub const BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Bar interval requested from the chart endpoint.
pub const DAILY_INTERVAL: &str = "1d";

/// The configured base URL cannot carry a symbol path segment.
#[derive(Error, Debug)]
#[error("Invalid base URL {base}: {reason}")]
pub struct UrlError {
    /// Base URL as configured.
    pub base: String,
    /// Why it was rejected.
    pub reason: String,
}

/// Builds the chart URL for a symbol's daily history.
///
/// URL format: `{base}/{SYMBOL}?range={period}&interval=1d`
///
/// The symbol is appended as a single path segment, so characters such as
/// `/`, `?` or `#` inside it are percent-encoded.
///
/// # Errors
///
/// Returns an error if `base` is not an absolute hierarchical URL.
///
/// # Example
///
/// ```
/// use nsedash_fetch::url::{BASE_URL, chart_url};
/// use nsedash_types::Period;
///
/// let url = chart_url(BASE_URL, "TCS.NS", Period::Month1).unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://query1.finance.yahoo.com/v8/finance/chart/TCS.NS?range=1mo&interval=1d"
/// );
/// ```
pub fn chart_url(base: &str, symbol: &str, period: Period) -> Result<Url, UrlError> {
    let invalid = |reason: String| UrlError {
        base: base.to_string(),
        reason,
    };

    let mut url = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| invalid("cannot be a base".to_string()))?
        .pop_if_empty()
        .push(symbol.trim());
    url.query_pairs_mut()
        .append_pair("range", period.as_str())
        .append_pair("interval", DAILY_INTERVAL);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn last_segment(url: &Url) -> String {
        url.path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_chart_url_stock() {
        let url = chart_url(BASE_URL, "RELIANCE.NS", Period::Year1).unwrap();
        assert_eq!(
            url.as_str(),
            "https://query1.finance.yahoo.com/v8/finance/chart/RELIANCE.NS?range=1y&interval=1d"
        );
    }

    #[test]
    fn test_chart_url_index() {
        let url = chart_url(BASE_URL, " ^NSEI ", Period::Day2).unwrap();
        assert_eq!(url.path(), "/v8/finance/chart/^NSEI");
        assert_eq!(url.query(), Some("range=2d&interval=1d"));
    }

    #[test]
    fn test_chart_url_trailing_slash() {
        let url = chart_url("http://127.0.0.1:1234/chart/", "LT.NS", Period::Month3).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:1234/chart/LT.NS?range=3mo&interval=1d");
    }

    #[test]
    fn test_symbol_stays_one_segment() {
        let url = chart_url(BASE_URL, "M&M.NS", Period::Month6).unwrap();
        assert_eq!(last_segment(&url), "M&M.NS");
        assert_eq!(url.query(), Some("range=6mo&interval=1d"));

        let url = chart_url(BASE_URL, "A/B?x#y", Period::Month6).unwrap();
        assert_eq!(last_segment(&url), "A%2FB%3Fx%23y");
        assert_eq!(url.query(), Some("range=6mo&interval=1d"));
    }

    #[test]
    fn test_invalid_base() {
        let err = chart_url("not a url", "TCS.NS", Period::Month1).unwrap_err();
        assert_eq!(err.base, "not a url");

        assert!(chart_url("mailto:someone@example.com", "TCS.NS", Period::Month1).is_err());
    }
}
