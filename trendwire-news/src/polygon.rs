//! Polygon.io financial news client
//!
//! Polygon articles arrive pre-tagged with ticker symbols and a real
//! publication timestamp, which the breaking-news alert filter relies on.

use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::{info, instrument};

use trendwire_core::Article;

use crate::error::NewsError;
use crate::types::{PolygonNewsResponse, PolygonResult};

/// Polygon.io API client
pub struct PolygonClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl PolygonClient {
    /// Create a new Polygon client.
    ///
    /// An empty API key is rejected at construction; callers treat an
    /// unconfigured Polygon as "no financial news source" rather than
    /// erroring per fetch.
    pub fn new(api_key: String) -> Result<Self, NewsError> {
        if api_key.is_empty() {
            return Err(NewsError::InvalidConfig(
                "Polygon API key is empty".to_string(),
            ));
        }
        Ok(Self {
            client: Client::new(),
            api_key,
            base_url: "https://api.polygon.io".to_string(),
        })
    }

    /// Fetch recent market news, optionally scoped to one ticker
    #[instrument(skip(self))]
    pub async fn market_news(
        &self,
        ticker: Option<&str>,
        limit: usize,
    ) -> Result<Vec<Article>, NewsError> {
        let ticker_param = ticker
            .map(|t| format!("&ticker={}", t))
            .unwrap_or_default();
        let url = format!(
            "{}/v2/reference/news?limit={}{}&apiKey={}",
            self.base_url, limit, ticker_param, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| NewsError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NewsError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let news: PolygonNewsResponse = response
            .json()
            .await
            .map_err(|e| NewsError::ParseError(e.to_string()))?;

        info!("Polygon returned {} articles", news.results.len());

        Ok(news.results.into_iter().map(convert_result).collect())
    }
}

/// Normalize a Polygon article into the canonical Article shape
fn convert_result(result: PolygonResult) -> Article {
    let published_at = result
        .published_utc
        .as_deref()
        .and_then(|d| DateTime::parse_from_rfc3339(d).ok())
        .map(|d| d.with_timezone(&Utc));

    Article {
        title: result.title,
        description: result.description.unwrap_or_default(),
        url: result.article_url,
        source: result
            .publisher
            .and_then(|p| p.name)
            .unwrap_or_else(|| "Unknown".to_string()),
        age: None,
        published_at,
        tickers: result.tickers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_rejected() {
        assert!(matches!(
            PolygonClient::new(String::new()),
            Err(NewsError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_convert_parses_timestamp_and_tickers() {
        let json = r#"
        {
            "title": "Apple announces buyback",
            "description": "Board approves expanded program",
            "article_url": "https://example.com/apple-buyback",
            "publisher": { "name": "Benzinga" },
            "tickers": ["AAPL"],
            "published_utc": "2026-08-07T13:30:00Z"
        }
        "#;
        let result: PolygonResult = serde_json::from_str(json).unwrap();
        let article = convert_result(result);
        assert_eq!(article.source, "Benzinga");
        assert_eq!(article.tickers, vec!["AAPL".to_string()]);
        let published = article.published_at.unwrap();
        assert_eq!(published.to_rfc3339(), "2026-08-07T13:30:00+00:00");
    }

    #[test]
    fn test_convert_tolerates_missing_fields() {
        let json = r#"
        {
            "title": "Markets wrap",
            "article_url": "https://example.com/wrap",
            "published_utc": "not a timestamp"
        }
        "#;
        let result: PolygonResult = serde_json::from_str(json).unwrap();
        let article = convert_result(result);
        assert_eq!(article.source, "Unknown");
        assert_eq!(article.description, "");
        assert!(article.published_at.is_none());
        assert!(article.tickers.is_empty());
    }

    #[test]
    fn test_response_envelope_defaults_to_empty() {
        let response: PolygonNewsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.results.is_empty());
    }
}
