//! Category scan orchestration
//!
//! Issues each query of a category sequentially against a search client,
//! pacing between calls. A failed query contributes an empty result list
//! and the scan continues with whatever was gathered — partial results
//! are better than no report.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use trendwire_core::{Article, CategoryTrendReport};
use trendwire_news::{BraveClient, Freshness, NewsError};

use crate::category::Category;
use crate::dedup::dedup_by_title;
use crate::extract::extract_trends;
use crate::pacing::{Pacer, QUERY_INTERVAL_MS};
use crate::rank::{rank_trends, DEFAULT_MIN_MENTIONS};

/// Search seam the scanner drives.
///
/// Implemented by the Brave client; tests substitute a stub.
#[async_trait]
pub trait NewsSearch: Send + Sync {
    /// Search recent news for a query
    async fn search_news(&self, query: &str, count: usize) -> Result<Vec<Article>, NewsError>;
}

#[async_trait]
impl NewsSearch for BraveClient {
    async fn search_news(&self, query: &str, count: usize) -> Result<Vec<Article>, NewsError> {
        BraveClient::search_news(self, query, count, Freshness::PastDay).await
    }
}

#[async_trait]
impl<S: NewsSearch> NewsSearch for Arc<S> {
    async fn search_news(&self, query: &str, count: usize) -> Result<Vec<Article>, NewsError> {
        (**self).search_news(query, count).await
    }
}

/// Scanner tunables
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    /// Results requested per query
    pub results_per_query: usize,
    /// Minimum mentions for a subject to rank
    pub min_mentions: u32,
    /// Articles carried into the report footer
    pub top_articles: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            results_per_query: 5,
            min_mentions: DEFAULT_MIN_MENTIONS,
            top_articles: 5,
        }
    }
}

/// Drives a full category scan: query -> dedup -> extract -> rank
pub struct TrendScanner<S> {
    search: S,
    pacer: Pacer,
    config: ScannerConfig,
}

impl<S: NewsSearch> TrendScanner<S> {
    /// Create a scanner with default pacing and tunables
    pub fn new(search: S) -> Self {
        Self {
            search,
            pacer: Pacer::new(QUERY_INTERVAL_MS),
            config: ScannerConfig::default(),
        }
    }

    /// Create a scanner with an explicit pacer and tunables
    pub fn with_config(search: S, pacer: Pacer, config: ScannerConfig) -> Self {
        Self {
            search,
            pacer,
            config,
        }
    }

    /// Collect the articles for a category, one sequential query at a time
    pub async fn gather(&self, category: Category) -> Vec<Article> {
        let mut all = Vec::new();

        for query in category.queries() {
            self.pacer.acquire().await;
            match self
                .search
                .search_news(query, self.config.results_per_query)
                .await
            {
                Ok(articles) => all.extend(articles),
                Err(e) => {
                    warn!("Search for '{}' failed, continuing scan: {}", query, e);
                }
            }
        }

        all
    }

    /// Scan a category into a ranked trend report
    pub async fn scan(&self, category: Category) -> CategoryTrendReport {
        let articles = self.gather(category).await;
        let unique = dedup_by_title(articles);
        let tables = extract_trends(&unique);

        let topics = rank_trends(&tables.keywords, self.config.min_mentions);
        let tickers = rank_trends(&tables.tickers, self.config.min_mentions);

        let article_count = unique.len();
        let top_articles: Vec<Article> =
            unique.into_iter().take(self.config.top_articles).collect();

        CategoryTrendReport {
            category: category.name().to_string(),
            article_count,
            topics,
            tickers,
            top_articles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Stub search: canned results per query, errors for queries marked bad
    struct StubSearch {
        responses: HashMap<&'static str, Vec<Article>>,
        failing: Vec<&'static str>,
    }

    impl StubSearch {
        fn new() -> Self {
            Self {
                responses: HashMap::new(),
                failing: Vec::new(),
            }
        }

        fn with_results(mut self, query: &'static str, articles: Vec<Article>) -> Self {
            self.responses.insert(query, articles);
            self
        }

        fn with_failure(mut self, query: &'static str) -> Self {
            self.failing.push(query);
            self
        }
    }

    #[async_trait]
    impl NewsSearch for StubSearch {
        async fn search_news(
            &self,
            query: &str,
            _count: usize,
        ) -> Result<Vec<Article>, NewsError> {
            if self.failing.iter().any(|q| *q == query) {
                return Err(NewsError::ApiError {
                    status: 429,
                    message: "rate limited".to_string(),
                });
            }
            Ok(self.responses.get(query).cloned().unwrap_or_default())
        }
    }

    fn article(title: &str, description: &str) -> Article {
        Article {
            title: title.to_string(),
            description: description.to_string(),
            url: "https://example.com/a".to_string(),
            source: "Example".to_string(),
            age: None,
            published_at: None,
            tickers: vec![],
        }
    }

    fn test_scanner(search: StubSearch) -> TrendScanner<StubSearch> {
        TrendScanner::with_config(search, Pacer::disabled(), ScannerConfig::default())
    }

    #[tokio::test]
    async fn test_failed_query_does_not_abort_scan() {
        // "bitcoin" fails; the remaining crypto queries still contribute.
        let search = StubSearch::new()
            .with_failure("bitcoin")
            .with_results(
                "ethereum",
                vec![article("ETH upgrade lands", "Inflation hedge debate continues")],
            )
            .with_results(
                "crypto regulation",
                vec![article("New crypto rules", "Inflation and recession fears weigh")],
            );

        let scanner = test_scanner(search);
        let report = scanner.scan(Category::Crypto).await;

        assert_eq!(report.article_count, 2);
        assert!(report
            .topics
            .iter()
            .any(|t| t.subject == "inflation" && t.mentions == 2));
    }

    #[tokio::test]
    async fn test_scan_dedupes_across_queries() {
        let shared = article("Fed decision looms", "Rate call due");
        let search = StubSearch::new()
            .with_results("stock market", vec![shared.clone()])
            .with_results("federal reserve", vec![shared]);

        let scanner = test_scanner(search);
        let report = scanner.scan(Category::Markets).await;

        assert_eq!(report.article_count, 1);
    }

    #[tokio::test]
    async fn test_all_queries_failing_yields_empty_report() {
        let search = StubSearch::new()
            .with_failure("bitcoin")
            .with_failure("ethereum")
            .with_failure("crypto regulation")
            .with_failure("blockchain");

        let scanner = test_scanner(search);
        let report = scanner.scan(Category::Crypto).await;

        assert_eq!(report.article_count, 0);
        assert!(report.topics.is_empty());
        assert!(report.tickers.is_empty());
        assert!(report.top_articles.is_empty());
    }

    #[tokio::test]
    async fn test_top_articles_capped() {
        let articles: Vec<Article> = (0..8)
            .map(|i| article(&format!("Story {}", i), "Earnings season rolls on"))
            .collect();
        let search = StubSearch::new().with_results("bitcoin", articles);

        let scanner = test_scanner(search);
        let report = scanner.scan(Category::Crypto).await;

        assert_eq!(report.article_count, 8);
        assert_eq!(report.top_articles.len(), 5);
    }
}
