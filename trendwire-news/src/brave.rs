//! Brave Search API client
//!
//! Both the news vertical (`res/v1/news/search`) and general web search
//! (`res/v1/web/search`) go through one client. Results are normalized
//! into the canonical [`Article`] shape immediately after each fetch.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{info, instrument};

use trendwire_core::Article;

use crate::error::NewsError;
use crate::types::{BraveNewsResponse, BraveResult, BraveWebResponse};

/// Freshness window for Brave queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Results from the past day
    PastDay,
    /// Results from the past week
    PastWeek,
    /// Results from the past month
    PastMonth,
}

impl Freshness {
    fn as_param(self) -> &'static str {
        match self {
            Freshness::PastDay => "pd",
            Freshness::PastWeek => "pw",
            Freshness::PastMonth => "pm",
        }
    }
}

/// Brave Search API client
pub struct BraveClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl BraveClient {
    /// Create a new Brave client.
    ///
    /// An empty API key is rejected here so that a missing
    /// `BRAVE_SEARCH_API_KEY` short-circuits at startup instead of on
    /// the first scheduled query.
    pub fn new(api_key: String) -> Result<Self, NewsError> {
        if api_key.is_empty() {
            return Err(NewsError::InvalidConfig(
                "Brave API key is empty".to_string(),
            ));
        }
        Ok(Self {
            client: Client::new(),
            api_key,
            base_url: "https://api.search.brave.com".to_string(),
        })
    }

    /// Search the news vertical
    #[instrument(skip(self))]
    pub async fn search_news(
        &self,
        query: &str,
        count: usize,
        freshness: Freshness,
    ) -> Result<Vec<Article>, NewsError> {
        let url = format!(
            "{}/res/v1/news/search?q={}&count={}&freshness={}",
            self.base_url,
            urlencoding::encode(query),
            count,
            freshness.as_param()
        );

        let response: BraveNewsResponse = self.get_json(&url).await?;
        info!(
            "Brave news returned {} results for '{}'",
            response.results.len(),
            query
        );

        Ok(response.results.into_iter().map(convert_result).collect())
    }

    /// Search the general web index
    #[instrument(skip(self))]
    pub async fn search_web(
        &self,
        query: &str,
        count: usize,
        freshness: Freshness,
    ) -> Result<Vec<Article>, NewsError> {
        let url = format!(
            "{}/res/v1/web/search?q={}&count={}&freshness={}",
            self.base_url,
            urlencoding::encode(query),
            count,
            freshness.as_param()
        );

        let response: BraveWebResponse = self.get_json(&url).await?;
        let results = response.web.map(|w| w.results).unwrap_or_default();
        info!("Brave web returned {} results for '{}'", results.len(), query);

        Ok(results.into_iter().map(convert_result).collect())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, NewsError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .header("X-Subscription-Token", &self.api_key)
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

        response
            .json()
            .await
            .map_err(|e| NewsError::ParseError(e.to_string()))
    }
}

/// Normalize a Brave result into the canonical Article shape.
///
/// The news vertical names the publisher under `source.name`; the web
/// vertical only carries `meta_url.hostname`.
fn convert_result(result: BraveResult) -> Article {
    let source = result
        .source
        .and_then(|s| s.name)
        .or_else(|| result.meta_url.and_then(|m| m.hostname))
        .unwrap_or_else(|| "Unknown".to_string());

    Article {
        title: result.title,
        description: result.description,
        url: result.url,
        source,
        age: result.age,
        published_at: None,
        tickers: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_rejected() {
        assert!(matches!(
            BraveClient::new(String::new()),
            Err(NewsError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_convert_prefers_source_name() {
        let json = r#"
        {
            "title": "Nvidia beats earnings estimates",
            "description": "Record data center revenue",
            "url": "https://www.reuters.com/tech/nvidia",
            "age": "2 hours ago",
            "source": { "name": "Reuters" },
            "meta_url": { "hostname": "www.reuters.com" }
        }
        "#;
        let result: BraveResult = serde_json::from_str(json).unwrap();
        let article = convert_result(result);
        assert_eq!(article.source, "Reuters");
        assert_eq!(article.age.as_deref(), Some("2 hours ago"));
        assert!(article.tickers.is_empty());
    }

    #[test]
    fn test_convert_falls_back_to_hostname_then_unknown() {
        let json = r#"
        {
            "title": "Best dropshipping products this month",
            "description": "A roundup of trending products",
            "url": "https://blog.example.com/products",
            "meta_url": { "hostname": "blog.example.com" }
        }
        "#;
        let result: BraveResult = serde_json::from_str(json).unwrap();
        assert_eq!(convert_result(result).source, "blog.example.com");

        let bare = r#"
        {
            "title": "Untitled roundup post",
            "description": "",
            "url": "https://example.com/post"
        }
        "#;
        let result: BraveResult = serde_json::from_str(bare).unwrap();
        assert_eq!(convert_result(result).source, "Unknown");
    }

    #[test]
    fn test_news_response_parses_without_results() {
        let response: BraveNewsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_web_response_unwraps_nested_results() {
        let json = r#"
        {
            "web": {
                "results": [
                    {
                        "title": "High paying affiliate programs for 2026",
                        "description": "Recurring commission programs compared",
                        "url": "https://example.com/affiliate"
                    }
                ]
            }
        }
        "#;
        let response: BraveWebResponse = serde_json::from_str(json).unwrap();
        let results = response.web.map(|w| w.results).unwrap_or_default();
        assert_eq!(results.len(), 1);

        let empty: BraveWebResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.web.map(|w| w.results).unwrap_or_default().is_empty());
    }
}
