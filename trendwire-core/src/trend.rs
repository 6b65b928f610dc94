//! Ranked trend and report types

use serde::{Deserialize, Serialize};

use crate::Article;

/// A subject (keyword phrase or ticker candidate) and its mention count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedTrend {
    /// The phrase or ticker
    pub subject: String,
    /// Articles containing it (phrases) or total occurrences (tickers)
    pub mentions: u32,
}

/// Trend summary produced by one category scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTrendReport {
    /// Category name (e.g. "markets")
    pub category: String,
    /// Unique articles the scan was built from
    pub article_count: usize,
    /// Ranked keyword phrases, descending by mentions
    pub topics: Vec<RankedTrend>,
    /// Ranked ticker candidates, descending by mentions
    pub tickers: Vec<RankedTrend>,
    /// Leading articles carried for the report footer
    pub top_articles: Vec<Article>,
}
