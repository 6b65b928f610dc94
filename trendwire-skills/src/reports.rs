//! Scheduled trend reports posted to Discord
//!
//! Hourly trend updates, market open/close summaries, and breaking-news
//! alerts. Each runner resolves its channel, gathers data through the
//! crawler, formats a message, and posts it; a missing channel is a
//! descriptive short-circuit error (or a skip, where the original
//! behavior is to skip silently).

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::America::New_York;
use tracing::info;

use trendwire_core::{Article, CategoryTrendReport};
use trendwire_trends::{Category, Pacer};

use crate::context::SkillContext;
use crate::crawler;
use crate::error::SkillError;

/// Horizontal divider used in Discord messages
pub(crate) const DIVIDER: &str = "━━━━━━━━━━━━━━━━━━━━━━";

/// Minimum delay between section scans in the market close summary
const CLOSE_SECTION_INTERVAL_MS: u64 = 300;

/// What a scheduled invocation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillOutcome {
    /// A message was posted
    Posted,
    /// Nothing was posted, with the reason
    Skipped(String),
}

/// How urgent a manual breaking alert is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Urgency {
    #[default]
    Normal,
    High,
}

/// Bundle assembled for one hourly update
#[derive(Debug, Clone)]
pub struct HourlyTrends {
    /// When the bundle was generated
    pub timestamp: DateTime<Utc>,
    /// Category the update focused on
    pub category: Category,
    /// Trend scan for that category
    pub trends: CategoryTrendReport,
    /// Up to five breaking stories
    pub breaking: Vec<Article>,
}

/// Pick the category an hourly update focuses on, by New York hour
pub fn focus_category(hour: u32) -> Category {
    match hour {
        6..=8 => Category::Markets,   // Pre-market
        9..=15 => Category::Markets,  // Market hours
        16..=17 => Category::Markets, // After hours
        _ => Category::Tech,          // Evenings and nights are tech news
    }
}

/// Generate the hourly trend bundle
pub async fn hourly_trends(ctx: &SkillContext) -> HourlyTrends {
    let now = Utc::now();
    let hour = now.with_timezone(&New_York).hour();
    let category = focus_category(hour);

    let trends = crawler::trending_news(ctx, category).await;
    let mut breaking = crawler::breaking_market_news(ctx).await;
    breaking.truncate(5);

    HourlyTrends {
        timestamp: now,
        category,
        trends,
        breaking,
    }
}

/// Format the hourly bundle for Discord
pub fn format_hourly_update(data: &HourlyTrends) -> String {
    let time = data.timestamp.with_timezone(&New_York);
    let mut message = format!(
        "📊 **Hourly Trends Update** - {} ET\n{}\n\n",
        time.format("%I:%M %p"),
        DIVIDER
    );

    if !data.trends.topics.is_empty() {
        message.push_str("🔥 **Trending Topics:**\n");
        for topic in data.trends.topics.iter().take(5) {
            let bar = "█".repeat(topic.mentions.min(10) as usize);
            message.push_str(&format!("`{}` {} ({})\n", bar, topic.subject, topic.mentions));
        }
        message.push('\n');
    }

    if !data.trends.tickers.is_empty() {
        let tickers = data
            .trends
            .tickers
            .iter()
            .take(5)
            .map(|t| format!("**${}** ({})", t.subject, t.mentions))
            .collect::<Vec<_>>()
            .join(" • ");
        message.push_str("📈 **Hot Tickers:**\n");
        message.push_str(&tickers);
        message.push_str("\n\n");
    }

    if !data.breaking.is_empty() {
        message.push_str("⚡ **Breaking News:**\n");
        for article in data.breaking.iter().take(3) {
            message.push_str(&format!("• {}\n", article.title));
            if !article.tickers.is_empty() {
                let tickers = article
                    .tickers
                    .iter()
                    .take(3)
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ");
                message.push_str(&format!("  └ Tickers: {}\n", tickers));
            }
        }
        message.push('\n');
    }

    if !data.trends.top_articles.is_empty() {
        message.push_str("📰 **Top Stories:**\n");
        for article in data.trends.top_articles.iter().take(3) {
            message.push_str(&format!(
                "• [{}]({})\n",
                clamp_title(&article.title, 80),
                article.url
            ));
            message.push_str(&format!(
                "  └ *{}* - {}\n",
                article.source,
                article.age.as_deref().unwrap_or("recent")
            ));
        }
    }

    message.push_str(&format!("\n{}\n*Next update in 1 hour*", DIVIDER));
    message
}

/// Generate the hourly trend update and post it to the trends channel
pub async fn run_hourly_trend_update(ctx: &SkillContext) -> Result<SkillOutcome, SkillError> {
    info!("Starting hourly trend update");

    let discord = ctx.discord.as_ref().ok_or(SkillError::DiscordNotConfigured)?;
    let channel = discord
        .channels
        .trends_channel
        .ok_or(SkillError::MissingChannel("trends"))?;

    let data = hourly_trends(ctx).await;
    let message = format_hourly_update(&data);

    discord.poster.post(channel, &message).await?;
    info!("Posted hourly update for '{}'", data.category);
    Ok(SkillOutcome::Posted)
}

/// Post the market open summary (9:30 AM ET weekdays)
pub async fn run_market_open_summary(ctx: &SkillContext) -> Result<SkillOutcome, SkillError> {
    info!("Generating market open summary");

    let discord = ctx.discord.as_ref().ok_or(SkillError::DiscordNotConfigured)?;
    let channel = discord
        .channels
        .market_channel
        .or(discord.channels.trends_channel)
        .ok_or(SkillError::MissingChannel("market"))?;

    let trends = crawler::trending_news(ctx, Category::Markets).await;
    let breaking = crawler::breaking_market_news(ctx).await;

    let date = Utc::now().with_timezone(&New_York);
    let mut message = format!(
        "🔔 **Market Open Summary** - {}\n{}\n\n",
        date.format("%-m/%-d/%Y"),
        DIVIDER
    );
    message.push_str(&crawler::format_trend_report(&trends));

    if !breaking.is_empty() {
        message.push_str("\n⚡ **Pre-Market Headlines:**\n");
        for article in breaking.iter().take(5) {
            message.push_str(&format!("• {}\n", article.title));
        }
    }

    message.push_str("\n*Good luck trading today!* 📈");

    discord.poster.post(channel, &message).await?;
    Ok(SkillOutcome::Posted)
}

/// Post the market close summary (4:00 PM ET weekdays)
pub async fn run_market_close_summary(ctx: &SkillContext) -> Result<SkillOutcome, SkillError> {
    info!("Generating market close summary");

    let discord = ctx.discord.as_ref().ok_or(SkillError::DiscordNotConfigured)?;
    let channel = discord
        .channels
        .market_channel
        .or(discord.channels.trends_channel)
        .ok_or(SkillError::MissingChannel("market"))?;

    let date = Utc::now().with_timezone(&New_York);
    let mut message = format!(
        "🔔 **Market Close Summary** - {}\n{}\n\n",
        date.format("%-m/%-d/%Y"),
        DIVIDER
    );

    let pacer = Pacer::new(CLOSE_SECTION_INTERVAL_MS);
    for category in [Category::Markets, Category::Tech, Category::Options] {
        pacer.acquire().await;
        let trends = crawler::trending_news(ctx, category).await;
        if trends.topics.is_empty() {
            continue;
        }
        message.push_str(&format!("**{}:**\n", category.name().to_uppercase()));
        for topic in trends.topics.iter().take(3) {
            message.push_str(&format!("• {} ({})\n", topic.subject, topic.mentions));
        }
        message.push('\n');
    }

    message.push_str("*See you tomorrow!* 🌙");

    discord.poster.post(channel, &message).await?;
    Ok(SkillOutcome::Posted)
}

/// Post a manual breaking alert to the alerts channel (fallback: trends)
pub async fn post_breaking_alert(
    ctx: &SkillContext,
    headline: &str,
    tickers: &[String],
    urgency: Urgency,
) -> Result<SkillOutcome, SkillError> {
    info!("Posting breaking alert");

    let discord = ctx.discord.as_ref().ok_or(SkillError::DiscordNotConfigured)?;
    let channel = discord
        .channels
        .alerts_channel
        .or(discord.channels.trends_channel)
        .ok_or(SkillError::MissingChannel("alerts"))?;

    let emoji = match urgency {
        Urgency::High => "🚨",
        Urgency::Normal => "⚡",
    };

    let mut message = format!("{} **BREAKING** {}\n\n{}\n", emoji, emoji, headline);

    if !tickers.is_empty() {
        let tagged = tickers
            .iter()
            .map(|t| format!("${}", t))
            .collect::<Vec<_>>()
            .join(" ");
        message.push_str(&format!("\n📊 **Related Tickers:** {}\n", tagged));
    }

    let time = Utc::now().with_timezone(&New_York);
    message.push_str(&format!("\n*{} ET*", time.format("%I:%M:%S %p")));

    discord.poster.post(channel, &message).await?;
    Ok(SkillOutcome::Posted)
}

/// Check for breaking news and post the top story if anything is fresh.
///
/// Unlike the other runners this one skips quietly when no alerts
/// channel is configured — it fires every 15 minutes and a permanent
/// error would just be noise.
pub async fn check_and_post_alerts(ctx: &SkillContext) -> Result<SkillOutcome, SkillError> {
    info!("Checking for breaking news");

    let discord = ctx.discord.as_ref().ok_or(SkillError::DiscordNotConfigured)?;
    let Some(channel) = discord.channels.alerts_channel else {
        return Ok(SkillOutcome::Skipped(
            "No alerts channel configured".to_string(),
        ));
    };

    let breaking = crawler::breaking_market_news(ctx).await;
    let recent = filter_recent(&breaking, Utc::now());

    let Some(top) = recent.first() else {
        return Ok(SkillOutcome::Skipped("No breaking news".to_string()));
    };

    let mut message = format!("⚡ **Breaking News**\n\n**{}**\n*{}*\n", top.title, top.source);

    if !top.tickers.is_empty() {
        let tagged = top
            .tickers
            .iter()
            .take(5)
            .map(|t| format!("${}", t))
            .collect::<Vec<_>>()
            .join(" ");
        message.push_str(&format!("\n📊 {}", tagged));
    }

    if !top.url.is_empty() {
        message.push_str(&format!("\n\n[Read more]({})", top.url));
    }

    discord.poster.post(channel, &message).await?;
    Ok(SkillOutcome::Posted)
}

/// Articles published within the last 30 minutes, or whose age string
/// marks them as just-published.
pub fn filter_recent(articles: &[Article], now: DateTime<Utc>) -> Vec<Article> {
    articles
        .iter()
        .filter(|article| {
            if let Some(published) = article.published_at {
                now.signed_duration_since(published) < chrono::Duration::minutes(30)
            } else if let Some(age) = &article.age {
                age.contains("minute") || age.contains("Just now")
            } else {
                false
            }
        })
        .cloned()
        .collect()
}

fn clamp_title(title: &str, max_chars: usize) -> String {
    if title.chars().count() > max_chars {
        let clipped: String = title.chars().take(max_chars).collect();
        format!("{}...", clipped)
    } else {
        title.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use trendwire_core::RankedTrend;

    fn article(title: &str) -> Article {
        Article {
            title: title.to_string(),
            description: String::new(),
            url: "https://example.com/a".to_string(),
            source: "Example".to_string(),
            age: None,
            published_at: None,
            tickers: vec![],
        }
    }

    fn empty_report() -> CategoryTrendReport {
        CategoryTrendReport {
            category: "markets".to_string(),
            article_count: 0,
            topics: vec![],
            tickers: vec![],
            top_articles: vec![],
        }
    }

    #[test]
    fn test_focus_category_by_hour() {
        assert_eq!(focus_category(6), Category::Markets);
        assert_eq!(focus_category(9), Category::Markets);
        assert_eq!(focus_category(15), Category::Markets);
        assert_eq!(focus_category(17), Category::Markets);
        assert_eq!(focus_category(18), Category::Tech);
        assert_eq!(focus_category(23), Category::Tech);
        assert_eq!(focus_category(2), Category::Tech);
    }

    #[test]
    fn test_format_hourly_bar_clamps_at_ten() {
        let mut trends = empty_report();
        trends.topics = vec![RankedTrend {
            subject: "earnings".to_string(),
            mentions: 25,
        }];
        let data = HourlyTrends {
            timestamp: Utc::now(),
            category: Category::Markets,
            trends,
            breaking: vec![],
        };

        let message = format_hourly_update(&data);
        assert!(message.contains(&format!("`{}` earnings (25)", "█".repeat(10))));
        assert!(!message.contains(&"█".repeat(11)));
    }

    #[test]
    fn test_format_hourly_omits_empty_sections() {
        let data = HourlyTrends {
            timestamp: Utc::now(),
            category: Category::Tech,
            trends: empty_report(),
            breaking: vec![],
        };

        let message = format_hourly_update(&data);
        assert!(message.contains("Hourly Trends Update"));
        assert!(!message.contains("Trending Topics"));
        assert!(!message.contains("Hot Tickers"));
        assert!(!message.contains("Breaking News"));
        assert!(!message.contains("Top Stories"));
        assert!(message.contains("*Next update in 1 hour*"));
    }

    #[test]
    fn test_format_hourly_truncates_long_titles() {
        let long_title = "word ".repeat(40);
        let mut trends = empty_report();
        trends.top_articles = vec![article(long_title.trim())];
        let data = HourlyTrends {
            timestamp: Utc::now(),
            category: Category::Markets,
            trends,
            breaking: vec![],
        };

        let message = format_hourly_update(&data);
        let line = message
            .lines()
            .find(|l| l.starts_with("• ["))
            .expect("story line present");
        assert!(line.contains("..."));
        assert!(!line.contains(long_title.trim()));
    }

    #[test]
    fn test_filter_recent_by_timestamp() {
        let now = Utc.with_ymd_and_hms(2026, 8, 7, 15, 0, 0).unwrap();

        let mut fresh = article("Fresh");
        fresh.published_at = Some(now - chrono::Duration::minutes(10));
        let mut stale = article("Stale");
        stale.published_at = Some(now - chrono::Duration::hours(2));

        let recent = filter_recent(&[fresh, stale], now);
        let titles: Vec<&str> = recent.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Fresh"]);
    }

    #[test]
    fn test_filter_recent_by_age_string() {
        let now = Utc::now();

        let mut minutes = article("Minutes old");
        minutes.age = Some("5 minutes ago".to_string());
        let mut just_now = article("Just posted");
        just_now.age = Some("Just now".to_string());
        let mut hours = article("Hours old");
        hours.age = Some("3 hours ago".to_string());
        let unknown = article("No timing info");

        let recent = filter_recent(&[minutes, just_now, hours, unknown], now);
        let titles: Vec<&str> = recent.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Minutes old", "Just posted"]);
    }

    #[test]
    fn test_clamp_title() {
        assert_eq!(clamp_title("short", 80), "short");
        let long = "x".repeat(100);
        let clamped = clamp_title(&long, 80);
        assert_eq!(clamped.chars().count(), 83);
        assert!(clamped.ends_with("..."));
    }
}
