//! Shared skill context
//!
//! Everything a scheduled skill needs — clients, channel routing, pacing
//! policies — is built exactly once in the binary and passed by
//! reference into each invocation. No skill reads the process
//! environment itself.

use std::sync::Arc;

use trendwire_news::discord::{DiscordConfig, DiscordPoster};
use trendwire_news::{BraveClient, PolygonClient};
use trendwire_trends::{Pacer, TrendScanner, CATEGORY_INTERVAL_MS, QUERY_INTERVAL_MS};

/// Discord poster plus the channel routing loaded at startup
pub struct DiscordHandle {
    /// Posting client
    pub poster: DiscordPoster,
    /// Channel IDs per purpose
    pub channels: DiscordConfig,
}

/// Shared context for all scheduled skills
pub struct SkillContext {
    /// Brave-backed category scanner
    pub scanner: TrendScanner<Arc<BraveClient>>,
    /// Brave client for direct (non-scan) queries
    pub brave: Arc<BraveClient>,
    /// Polygon client, when POLYGON_API_KEY is configured
    pub polygon: Option<PolygonClient>,
    /// Discord posting, when a bot token is configured
    pub discord: Option<DiscordHandle>,
    /// Paces direct queries outside the scanner (opportunity fetches)
    pub query_pacer: Pacer,
    /// Paces category-sized units inside multi-section reports
    pub category_pacer: Pacer,
}

impl SkillContext {
    /// Build the shared context from the configured clients
    pub fn new(
        brave: BraveClient,
        polygon: Option<PolygonClient>,
        discord: Option<DiscordHandle>,
    ) -> Self {
        let brave = Arc::new(brave);
        Self {
            scanner: TrendScanner::new(Arc::clone(&brave)),
            brave,
            polygon,
            discord,
            query_pacer: Pacer::new(QUERY_INTERVAL_MS),
            category_pacer: Pacer::new(CATEGORY_INTERVAL_MS),
        }
    }
}
