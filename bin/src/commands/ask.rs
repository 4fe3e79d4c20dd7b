//! Ask command implementation.
//!
//! Answers a free-text question by keyword lookup over the symbol's provider
//! metadata.

use crate::session::{Session, resolve_listing};
use anyhow::Result;
use nsedash_lib::prelude::*;

/// Reply when no metadata key matches the question.
pub(crate) const NO_ANSWER: &str = "Sorry, I couldn't find an answer to your question.";

/// Returns the answer line for `question`, or [`NO_ANSWER`].
pub(crate) fn answer_line(metadata: &MetadataMap, question: &str) -> String {
    metadata
        .answer(question)
        .unwrap_or_else(|| NO_ANSWER.to_string())
}

/// Fetch metadata for `symbol` and answer `question`.
pub(crate) async fn ask<S: QuoteSource>(
    session: &mut Session<S>,
    symbol: &str,
    question: &str,
    period: Period,
) -> Result<()> {
    let listing = resolve_listing(symbol)?;
    let data = session.fetch(listing.symbol(), period).await?;
    println!("{}", answer_line(&data.metadata, question));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> MetadataMap {
        let mut map = MetadataMap::new();
        map.insert("currency", "INR");
        map.insert("exchangeName", "NSI");
        map.insert("regularMarketPrice", 2_931.45);
        map
    }

    #[test]
    fn test_answer_found() {
        assert_eq!(answer_line(&metadata(), "Currency"), "currency: INR");
        assert_eq!(answer_line(&metadata(), "price"), "regularMarketPrice: 2931.45");
    }

    #[test]
    fn test_answer_missing() {
        assert_eq!(answer_line(&metadata(), "dividend"), NO_ANSWER);
        assert_eq!(answer_line(&metadata(), "sector"), NO_ANSWER);
        assert_eq!(answer_line(&metadata(), "   "), NO_ANSWER);
    }
}
