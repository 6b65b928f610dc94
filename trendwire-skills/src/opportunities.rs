//! Opportunity scouting
//!
//! Finds trending products, in-demand services, side hustles, digital
//! products, and affiliate programs via Brave web search, and posts a
//! daily rotating pick plus a weekly digest to the opportunities channel.

use chrono::{Datelike, Utc, Weekday};
use chrono_tz::America::New_York;
use tracing::{info, warn};

use trendwire_core::Article;
use trendwire_news::Freshness;

use crate::context::SkillContext;
use crate::error::SkillError;
use crate::reports::{SkillOutcome, DIVIDER};

/// Results requested per opportunity query
const RESULTS_PER_QUERY: usize = 8;

/// Queries actually issued per category fetch
const QUERIES_PER_FETCH: usize = 3;

/// Ideas kept per category report
const IDEAS_PER_REPORT: usize = 5;

/// A money-making opportunity category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpportunityCategory {
    Products,
    Services,
    SideHustles,
    Digital,
    Affiliate,
}

impl OpportunityCategory {
    /// Display title used in posts
    pub fn title(self) -> &'static str {
        match self {
            OpportunityCategory::Products => "Trending Products",
            OpportunityCategory::Services => "In-Demand Services",
            OpportunityCategory::SideHustles => "Side Hustles",
            OpportunityCategory::Digital => "Digital Products",
            OpportunityCategory::Affiliate => "Affiliate Marketing",
        }
    }

    /// Emoji used in post headers
    pub fn emoji(self) -> &'static str {
        match self {
            OpportunityCategory::Products => "🛍️",
            OpportunityCategory::Services => "💼",
            OpportunityCategory::SideHustles => "💰",
            OpportunityCategory::Digital => "💻",
            OpportunityCategory::Affiliate => "🔗",
        }
    }

    /// The fixed search queries for this category
    pub fn queries(self) -> &'static [&'static str] {
        match self {
            OpportunityCategory::Products => &[
                "trending products to sell 2026",
                "best dropshipping products",
                "viral TikTok products",
                "Amazon FBA trending products",
                "Etsy best sellers trending",
                "print on demand trending designs",
            ],
            OpportunityCategory::Services => &[
                "most in demand freelance services",
                "high paying service business ideas",
                "local services in high demand",
                "online services to offer",
                "B2B services small business need",
            ],
            OpportunityCategory::SideHustles => &[
                "best side hustles 2026",
                "passive income ideas",
                "weekend side hustle ideas",
                "work from home business ideas",
                "low startup cost business ideas",
            ],
            OpportunityCategory::Digital => &[
                "digital products to sell online",
                "best selling online courses topics",
                "SaaS ideas micro startup",
                "AI tools business opportunities",
                "newsletter business ideas",
            ],
            OpportunityCategory::Affiliate => &[
                "high paying affiliate programs",
                "trending affiliate niches",
                "best recurring commission programs",
                "software affiliate programs",
            ],
        }
    }

    /// Static advice appended to every post for this category
    pub fn tips(self) -> &'static [&'static str] {
        match self {
            OpportunityCategory::Products => &[
                "Check TikTok Shop for viral product validation",
                "Use Google Trends to verify demand",
                "Look for products with 3-5x markup potential",
                "Consider shipping costs and complexity",
            ],
            OpportunityCategory::Services => &[
                "Start with skills you already have",
                "Local services often have less competition",
                "Recurring revenue services are most valuable",
                "Package services for predictable pricing",
            ],
            OpportunityCategory::SideHustles => &[
                "Start small and validate before investing",
                "Focus on hustles that can scale",
                "Consider time vs money tradeoff",
                "Look for recurring income opportunities",
            ],
            OpportunityCategory::Digital => &[
                "Digital products have near-zero marginal cost",
                "Templates and tools sell well",
                "Courses need marketing but scale infinitely",
                "SaaS requires tech skills but has best margins",
            ],
            OpportunityCategory::Affiliate => &[
                "Recurring commissions beat one-time payouts",
                "Promote products you actually use",
                "Software/SaaS affiliates pay highest",
                "Build an audience first, monetize second",
            ],
        }
    }
}

/// An extracted opportunity idea
#[derive(Debug, Clone)]
pub struct Idea {
    pub title: String,
    pub description: String,
    pub url: String,
    pub source: String,
}

/// Report for one opportunity category
#[derive(Debug, Clone)]
pub struct OpportunityReport {
    pub category: OpportunityCategory,
    pub ideas: Vec<Idea>,
}

/// Fetch a category's opportunity report.
///
/// Only the first three queries are issued per fetch; a failed query
/// contributes nothing and the fetch continues.
pub async fn opportunity_report(
    ctx: &SkillContext,
    category: OpportunityCategory,
) -> OpportunityReport {
    let mut all = Vec::new();

    for query in category.queries().iter().take(QUERIES_PER_FETCH) {
        ctx.query_pacer.acquire().await;
        match ctx
            .brave
            .search_web(query, RESULTS_PER_QUERY, Freshness::PastMonth)
            .await
        {
            Ok(results) => all.extend(results),
            Err(e) => {
                warn!("Opportunity search for '{}' failed: {}", query, e);
            }
        }
    }

    OpportunityReport {
        category,
        ideas: extract_ideas(&all),
    }
}

/// Filter raw web results into usable ideas: drop spam and stubs, clamp
/// titles and descriptions to display lengths.
pub fn extract_ideas(results: &[Article]) -> Vec<Idea> {
    let mut ideas = Vec::new();

    for result in results {
        if result.title.chars().count() < 10 || result.description.chars().count() < 20 {
            continue;
        }
        if result.title.to_lowercase().contains("sponsored") {
            continue;
        }

        ideas.push(Idea {
            title: clamp(&result.title, 100),
            description: clamp(&result.description, 200),
            url: result.url.clone(),
            source: idea_source(result),
        });

        if ideas.len() == IDEAS_PER_REPORT {
            break;
        }
    }

    ideas
}

/// Publisher display name for an idea, falling back to the URL host
fn idea_source(result: &Article) -> String {
    if result.source != "Unknown" {
        return result.source.clone();
    }
    url::Url::parse(&result.url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| "Unknown".to_string())
}

fn clamp(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Format an opportunity report for Discord
pub fn format_opportunity_post(report: &OpportunityReport) -> String {
    let mut message = format!(
        "{} **{}**\n{}\n\n",
        report.category.emoji(),
        report.category.title(),
        DIVIDER
    );

    for (i, idea) in report.ideas.iter().enumerate() {
        message.push_str(&format!("**{}. {}**\n", i + 1, idea.title));
        message.push_str(&format!("{}\n", idea.description));
        message.push_str(&format!(
            "🔗 [Read more]({}) - *{}*\n\n",
            idea.url, idea.source
        ));
    }

    let tips = report.category.tips();
    if !tips.is_empty() {
        message.push_str("💡 **Pro Tips:**\n");
        for tip in tips {
            message.push_str(&format!("• {}\n", tip));
        }
    }

    message
}

/// The category a daily update features, rotating through the week
pub fn rotation_for(weekday: Weekday) -> OpportunityCategory {
    const ROTATION: [OpportunityCategory; 4] = [
        OpportunityCategory::Products,
        OpportunityCategory::Services,
        OpportunityCategory::SideHustles,
        OpportunityCategory::Digital,
    ];
    ROTATION[weekday.num_days_from_sunday() as usize % ROTATION.len()]
}

/// Post the daily opportunity update (8 AM ET)
pub async fn run_daily_opportunity_update(ctx: &SkillContext) -> Result<SkillOutcome, SkillError> {
    info!("Generating daily opportunity update");

    let discord = ctx.discord.as_ref().ok_or(SkillError::DiscordNotConfigured)?;
    let channel = discord
        .channels
        .opportunities_channel
        .ok_or(SkillError::MissingChannel("opportunities"))?;

    let today = Utc::now().with_timezone(&New_York);
    let category = rotation_for(today.weekday());
    let report = opportunity_report(ctx, category).await;

    let mut message = format!(
        "🌟 **Daily Money-Making Opportunity** 🌟\n*{}*\n\n",
        today.format("%A, %B %-d")
    );
    message.push_str(&format_opportunity_post(&report));
    message.push_str(&format!("\n{}\n*Ask me for more ideas anytime!*", DIVIDER));

    discord.poster.post(channel, &message).await?;
    Ok(SkillOutcome::Posted)
}

/// Post the weekly opportunity digest (10 AM ET Sundays)
pub async fn run_weekly_opportunity_report(
    ctx: &SkillContext,
) -> Result<SkillOutcome, SkillError> {
    info!("Generating weekly opportunity report");

    let discord = ctx.discord.as_ref().ok_or(SkillError::DiscordNotConfigured)?;
    let channel = discord
        .channels
        .opportunities_channel
        .ok_or(SkillError::MissingChannel("opportunities"))?;

    let today = Utc::now().with_timezone(&New_York);
    let mut message = format!(
        "📊 **Weekly Opportunity Report** 📊\n*Week of {}*\n{}\n\n",
        today.format("%-m/%-d/%Y"),
        DIVIDER
    );

    for category in [
        OpportunityCategory::Products,
        OpportunityCategory::Services,
        OpportunityCategory::Digital,
    ] {
        ctx.category_pacer.acquire().await;
        let report = opportunity_report(ctx, category).await;

        message.push_str(&format!("{} **{}**\n", category.emoji(), category.title()));
        for idea in report.ideas.iter().take(2) {
            message.push_str(&format!("• {}\n", idea.title));
        }
        message.push('\n');
    }

    message.push_str("*Reply to get detailed info on any category!*");

    discord.poster.post(channel, &message).await?;
    Ok(SkillOutcome::Posted)
}
