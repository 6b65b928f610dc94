//! News crawling and trend-finding operations

use tracing::warn;

use trendwire_core::{Article, CategoryTrendReport};
use trendwire_news::{Freshness, NewsError};
use trendwire_trends::{dedup_by_title, Category};

use crate::context::SkillContext;

/// Maximum articles in a breaking-news batch
const BREAKING_CAP: usize = 15;

/// Get trending news for one category
pub async fn trending_news(ctx: &SkillContext, category: Category) -> CategoryTrendReport {
    ctx.scanner.scan(category).await
}

/// Scan every category for a comprehensive trend report
pub async fn full_trend_report(ctx: &SkillContext) -> Vec<CategoryTrendReport> {
    let mut report = Vec::with_capacity(Category::ALL.len());

    for category in Category::ALL {
        ctx.category_pacer.acquire().await;
        report.push(ctx.scanner.scan(category).await);
    }

    report
}

/// Get breaking news that might affect markets.
///
/// Polygon articles come first (they carry ticker annotations and real
/// timestamps); Brave fills in broader coverage. Either source failing
/// contributes an empty list rather than aborting the other.
pub async fn breaking_market_news(ctx: &SkillContext) -> Vec<Article> {
    let polygon_articles = match &ctx.polygon {
        Some(polygon) => match polygon.market_news(None, 20).await {
            Ok(articles) => articles,
            Err(e) => {
                warn!("Polygon news fetch failed: {}", e);
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    let brave_articles = match ctx
        .brave
        .search_news("stock market breaking news", 10, Freshness::PastDay)
        .await
    {
        Ok(articles) => articles,
        Err(e) => {
            warn!("Brave breaking news fetch failed: {}", e);
            Vec::new()
        }
    };

    merge_breaking(polygon_articles, brave_articles)
}

/// Merge the two breaking-news sources, dedupe by title, cap the batch
fn merge_breaking(polygon: Vec<Article>, brave: Vec<Article>) -> Vec<Article> {
    let mut all = polygon;
    all.extend(brave);

    let mut unique = dedup_by_title(all);
    unique.truncate(BREAKING_CAP);
    unique
}

/// Search for news about a specific topic
pub async fn search_topic_news(
    ctx: &SkillContext,
    topic: &str,
    limit: usize,
) -> Result<Vec<Article>, NewsError> {
    ctx.brave.search_news(topic, limit, Freshness::PastDay).await
}

/// Format a category trend report for Discord
pub fn format_trend_report(report: &CategoryTrendReport) -> String {
    let mut message = String::from("📊 **Market Trends Report**\n\n");

    if !report.topics.is_empty() {
        message.push_str("🔥 **Trending Topics:**\n");
        for topic in report.topics.iter().take(5) {
            message.push_str(&format!("• {} ({} mentions)\n", topic.subject, topic.mentions));
        }
        message.push('\n');
    }

    if !report.tickers.is_empty() {
        message.push_str("📈 **Hot Tickers:**\n");
        for ticker in report.tickers.iter().take(5) {
            message.push_str(&format!("• ${} ({} mentions)\n", ticker.subject, ticker.mentions));
        }
        message.push('\n');
    }

    if !report.top_articles.is_empty() {
        message.push_str("📰 **Top Stories:**\n");
        for article in report.top_articles.iter().take(3) {
            message.push_str(&format!(
                "• [{}]({}) - {}\n",
                article.title, article.url, article.source
            ));
        }
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use trendwire_core::RankedTrend;

    fn article(title: &str) -> Article {
        Article {
            title: title.to_string(),
            description: String::new(),
            url: format!("https://example.com/{}", title.len()),
            source: "Example".to_string(),
            age: None,
            published_at: None,
            tickers: vec![],
        }
    }

    #[test]
    fn test_merge_breaking_dedupes_and_caps() {
        let polygon: Vec<Article> = (0..10).map(|i| article(&format!("P{}", i))).collect();
        let mut brave: Vec<Article> = (0..10).map(|i| article(&format!("B{}", i))).collect();
        // One Brave story duplicates a Polygon headline.
        brave.push(article("P3"));

        let merged = merge_breaking(polygon, brave);

        assert_eq!(merged.len(), BREAKING_CAP);
        assert_eq!(merged.iter().filter(|a| a.title == "P3").count(), 1);
        // Polygon articles lead the batch.
        assert_eq!(merged[0].title, "P0");
    }

    #[test]
    fn test_merge_breaking_with_empty_polygon() {
        let merged = merge_breaking(Vec::new(), vec![article("B0"), article("B1")]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_format_trend_report_omits_empty_sections() {
        let report = CategoryTrendReport {
            category: "markets".to_string(),
            article_count: 0,
            topics: vec![],
            tickers: vec![],
            top_articles: vec![],
        };
        let message = format_trend_report(&report);
        assert!(!message.contains("Trending Topics"));
        assert!(!message.contains("Hot Tickers"));
        assert!(!message.contains("Top Stories"));
    }

    #[test]
    fn test_format_trend_report_sections() {
        let report = CategoryTrendReport {
            category: "markets".to_string(),
            article_count: 12,
            topics: vec![RankedTrend {
                subject: "inflation".to_string(),
                mentions: 4,
            }],
            tickers: vec![RankedTrend {
                subject: "NVDA".to_string(),
                mentions: 3,
            }],
            top_articles: vec![article("Fed decision looms")],
        };
        let message = format_trend_report(&report);
        assert!(message.contains("• inflation (4 mentions)"));
        assert!(message.contains("• $NVDA (3 mentions)"));
        assert!(message.contains("[Fed decision looms]"));
    }
}
