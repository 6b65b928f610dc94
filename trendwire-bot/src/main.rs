//! Trendwire bot
//!
//! Runs the scheduled skills: loads configuration once at startup,
//! builds the shared skill context, and drives one cron loop per
//! schedule entry. A failed invocation is logged and swallowed — the
//! process never crashes on a bad fetch or a rejected post.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use trendwire_news::discord::{DiscordConfig, DiscordPoster};
use trendwire_news::{BraveClient, PolygonClient};
use trendwire_skills::context::{DiscordHandle, SkillContext};
use trendwire_skills::schedule::{default_schedule, ScheduleEntry};
use trendwire_skills::SkillOutcome;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from a .env file, if present
    if let Err(e) = dotenvy::dotenv() {
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: failed to load .env: {}", e);
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,trendwire_bot=debug")),
        )
        .init();

    info!("Starting Trendwire bot");

    // Brave search is required - every skill fetches through it
    let brave_key = std::env::var("BRAVE_SEARCH_API_KEY")
        .or_else(|_| std::env::var("BRAVE_API_KEY"))
        .unwrap_or_default();
    let brave = BraveClient::new(brave_key)
        .map_err(|e| anyhow::anyhow!("BRAVE_SEARCH_API_KEY is required: {}", e))?;

    // Polygon is optional - breaking news falls back to Brave alone
    let polygon = match std::env::var("POLYGON_API_KEY") {
        Ok(key) if !key.is_empty() => match PolygonClient::new(key) {
            Ok(client) => {
                info!("Polygon financial news enabled");
                Some(client)
            }
            Err(e) => {
                warn!("Polygon client disabled: {}", e);
                None
            }
        },
        _ => {
            info!("No POLYGON_API_KEY set - breaking news uses Brave only");
            None
        }
    };

    // Discord posting is optional at startup; skills that need it will
    // report a descriptive error when they fire
    let discord = match DiscordConfig::from_env() {
        Ok(Some(config)) => {
            info!("Discord posting enabled");
            let poster = DiscordPoster::new(config.bot_token.clone());
            Some(DiscordHandle {
                poster,
                channels: config,
            })
        }
        Ok(None) => {
            info!("Discord posting not configured (DISCORD_BOT_TOKEN not set)");
            None
        }
        Err(e) => {
            warn!("Failed to load Discord configuration: {}. Posting disabled.", e);
            None
        }
    };

    let ctx = Arc::new(SkillContext::new(brave, polygon, discord));

    // An invalid cron expression is a programming error - fail startup
    let schedule = default_schedule();
    let mut loops = Vec::with_capacity(schedule.len());
    for entry in schedule {
        let cron = entry.cron()?;
        let ctx = Arc::clone(&ctx);
        loops.push(tokio::spawn(async move {
            run_entry_loop(entry, cron, ctx).await;
        }));
    }

    info!("All {} schedule loops running", loops.len());

    tokio::signal::ctrl_c().await?;
    info!("Shutting down");

    Ok(())
}

/// Sleep-until-next-fire loop for one schedule entry
async fn run_entry_loop(entry: ScheduleEntry, cron: croner::Cron, ctx: Arc<SkillContext>) {
    info!(job = %entry.job, schedule = entry.schedule, "Schedule loop started");

    loop {
        let now = Utc::now().with_timezone(&entry.timezone);
        let next = match cron.find_next_occurrence(&now, false) {
            Ok(next) => next,
            Err(e) => {
                error!(job = %entry.job, error = %e, "Failed to compute next fire time");
                tokio::time::sleep(std::time::Duration::from_secs(60)).await;
                continue;
            }
        };

        let wait = (next.clone() - now)
            .to_std()
            .unwrap_or(std::time::Duration::from_secs(1));
        info!(
            job = %entry.job,
            next = %next.format("%Y-%m-%d %H:%M %Z"),
            "Sleeping until next fire"
        );
        tokio::time::sleep(wait).await;

        // Guard against premature wake from sleep imprecision
        let now_after = Utc::now().with_timezone(&entry.timezone);
        if now_after < next {
            let remaining = (next.clone() - now_after).to_std().unwrap_or_default();
            tokio::time::sleep(remaining).await;
        }

        match entry.job.run(&ctx).await {
            Ok(SkillOutcome::Posted) => info!(job = %entry.job, "Posted update"),
            Ok(SkillOutcome::Skipped(reason)) => {
                info!(job = %entry.job, reason = %reason, "Skipped")
            }
            Err(e) => error!(job = %entry.job, error = %e, "Skill invocation failed"),
        }
    }
}
