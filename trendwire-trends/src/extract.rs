//! Phrase and ticker frequency extraction

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use trendwire_core::Article;

/// Fixed vocabulary of finance/tech phrases scanned in every article
pub const PHRASES: [&str; 21] = [
    "federal reserve",
    "interest rate",
    "earnings",
    "ai",
    "artificial intelligence",
    "layoffs",
    "acquisition",
    "merger",
    "ipo",
    "buyback",
    "dividend",
    "inflation",
    "recession",
    "bull market",
    "bear market",
    "rally",
    "sell-off",
    "volatility",
    "options",
    "short squeeze",
    "insider",
];

/// Ticker candidates are 1-5 consecutive uppercase letters. Single-letter
/// matches are discarded after the scan; nothing validates candidates
/// against a real symbol registry, so false positives are expected.
static TICKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Z]{1,5}\b").expect("ticker regex"));

/// Frequency tables built from one batch of articles
///
/// Insertion order is preserved so ranking ties resolve to the order
/// subjects were first encountered in.
#[derive(Debug, Default, Clone)]
pub struct TrendTables {
    /// Phrase -> number of articles containing it (binary per article)
    pub keywords: IndexMap<String, u32>,
    /// Ticker candidate -> total occurrences across the batch
    pub tickers: IndexMap<String, u32>,
}

/// Scan a batch of (already deduplicated) articles into frequency tables
pub fn extract_trends(articles: &[Article]) -> TrendTables {
    let mut tables = TrendTables::default();

    for article in articles {
        let text = article.scan_text();

        // The ticker scan must run against the original-case text;
        // lowercasing first would make an uppercase pattern unmatchable.
        for m in TICKER_RE.find_iter(&text) {
            let token = m.as_str();
            if token.len() >= 2 {
                *tables.tickers.entry(token.to_string()).or_insert(0) += 1;
            }
        }

        // Phrase containment is binary per article: a phrase repeated in
        // one article still counts once.
        let lower = text.to_lowercase();
        for phrase in PHRASES {
            if lower.contains(phrase) {
                *tables.keywords.entry(phrase.to_string()).or_insert(0) += 1;
            }
        }
    }

    tables
}
