//! Trend extraction and ranking
//!
//! The core of Trendwire: given a batch of articles from any upstream
//! source, deduplicate it, scan each article for a fixed vocabulary of
//! finance/tech phrases and ticker-like tokens, and rank the tallies
//! into a top-N trend list. The category scanner drives that pipeline
//! against a search client, pacing queries to respect upstream rate
//! limits.

pub mod category;
pub mod dedup;
pub mod extract;
pub mod pacing;
pub mod rank;
pub mod scanner;

pub use category::Category;
pub use dedup::dedup_by_title;
pub use extract::{extract_trends, TrendTables};
pub use pacing::{Pacer, CATEGORY_INTERVAL_MS, QUERY_INTERVAL_MS};
pub use rank::{rank_trends, DEFAULT_MIN_MENTIONS, MAX_RANKED};
pub use scanner::{NewsSearch, ScannerConfig, TrendScanner};
