//! Canonical article shape shared by every upstream source

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single article-like search result.
///
/// Upstream APIs disagree on field names (`source.name` vs
/// `meta_url.hostname`, `url` vs `article_url`), so every client converts
/// into this shape immediately after a fetch and downstream logic never
/// sees source-specific schema variance. Articles are transient: fetched
/// per invocation, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Article title
    pub title: String,
    /// Brief description/excerpt (may be empty)
    #[serde(default)]
    pub description: String,
    /// Article URL
    pub url: String,
    /// Display name of the publisher
    pub source: String,
    /// Upstream age string (e.g. "2 hours ago"), carried verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    /// Publication time, when the upstream provides a parseable one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    /// Ticker symbols the upstream attached to the article
    #[serde(default)]
    pub tickers: Vec<String>,
}

impl Article {
    /// Title and description concatenated for text scanning
    pub fn scan_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_text_joins_title_and_description() {
        let article = Article {
            title: "Fed holds rates".to_string(),
            description: "No cut this quarter".to_string(),
            url: "https://example.com/fed".to_string(),
            source: "Example".to_string(),
            age: None,
            published_at: None,
            tickers: vec![],
        };
        assert_eq!(article.scan_text(), "Fed holds rates No cut this quarter");
    }
}
