//! Wire types for the Brave Search and Polygon.io APIs

use serde::Deserialize;

// ============================================================================
// Brave Search Types
// ============================================================================

/// Brave news search response envelope
#[derive(Debug, Deserialize)]
pub struct BraveNewsResponse {
    /// News results (absent on empty searches)
    #[serde(default)]
    pub results: Vec<BraveResult>,
}

/// Brave web search response envelope
#[derive(Debug, Deserialize)]
pub struct BraveWebResponse {
    /// Web results section (absent when nothing matched)
    pub web: Option<BraveWebResults>,
}

/// The `web` section of a Brave web search response
#[derive(Debug, Deserialize)]
pub struct BraveWebResults {
    #[serde(default)]
    pub results: Vec<BraveResult>,
}

/// A single Brave search result
///
/// The news and web verticals share the fields we read.
#[derive(Debug, Deserialize)]
pub struct BraveResult {
    /// Result title
    pub title: String,
    /// Result snippet
    #[serde(default)]
    pub description: String,
    /// Result URL
    pub url: String,
    /// Age string like "2 hours ago"
    pub age: Option<String>,
    /// Publisher info (news vertical)
    pub source: Option<BraveSource>,
    /// Parsed-URL metadata (web vertical)
    pub meta_url: Option<BraveMetaUrl>,
}

/// Publisher info attached to a news result
#[derive(Debug, Deserialize)]
pub struct BraveSource {
    pub name: Option<String>,
}

/// Parsed-URL metadata attached to a result
#[derive(Debug, Deserialize)]
pub struct BraveMetaUrl {
    pub hostname: Option<String>,
}

// ============================================================================
// Polygon.io Types
// ============================================================================

/// Polygon news response envelope
#[derive(Debug, Deserialize)]
pub struct PolygonNewsResponse {
    #[serde(default)]
    pub results: Vec<PolygonResult>,
}

/// A single Polygon news article
#[derive(Debug, Deserialize)]
pub struct PolygonResult {
    /// Article title
    pub title: String,
    /// Article summary
    pub description: Option<String>,
    /// Canonical article URL
    pub article_url: String,
    /// Publisher info
    pub publisher: Option<PolygonPublisher>,
    /// Tickers Polygon tagged the article with
    #[serde(default)]
    pub tickers: Vec<String>,
    /// Publication time (RFC 3339)
    pub published_utc: Option<String>,
}

/// Publisher info attached to a Polygon article
#[derive(Debug, Deserialize)]
pub struct PolygonPublisher {
    pub name: Option<String>,
}
