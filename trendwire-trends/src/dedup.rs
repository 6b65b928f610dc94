//! Batch deduplication by article title

use std::collections::HashSet;

use trendwire_core::Article;

/// Remove articles whose exact title was already seen, keeping the first
/// occurrence and preserving relative order.
///
/// Matching is exact string equality: near-duplicate titles that differ
/// in casing or whitespace stay distinct.
pub fn dedup_by_title(articles: Vec<Article>) -> Vec<Article> {
    let mut seen: HashSet<String> = HashSet::new();
    articles
        .into_iter()
        .filter(|article| seen.insert(article.title.clone()))
        .collect()
}
