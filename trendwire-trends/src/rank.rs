//! Threshold filtering and top-N ranking

use indexmap::IndexMap;

use trendwire_core::RankedTrend;

/// Maximum number of ranked entries returned
pub const MAX_RANKED: usize = 10;

/// Default minimum mention count for a subject to qualify as a trend
pub const DEFAULT_MIN_MENTIONS: u32 = 2;

/// Rank a frequency table: keep subjects with at least `min_mentions`
/// mentions, sort descending by count, cap at [`MAX_RANKED`].
///
/// The sort is stable, so subjects with equal counts keep the order in
/// which they were first encountered. Empty input yields empty output.
pub fn rank_trends(table: &IndexMap<String, u32>, min_mentions: u32) -> Vec<RankedTrend> {
    let mut ranked: Vec<RankedTrend> = table
        .iter()
        .filter(|(_, &count)| count >= min_mentions)
        .map(|(subject, &count)| RankedTrend {
            subject: subject.clone(),
            mentions: count,
        })
        .collect();

    ranked.sort_by(|a, b| b.mentions.cmp(&a.mentions));
    ranked.truncate(MAX_RANKED);
    ranked
}
