//! Skill-level errors surfaced at the scheduled-task boundary

use thiserror::Error;

use trendwire_news::discord::PostError;

/// Errors a scheduled skill invocation can end with.
///
/// Upstream search failures are swallowed inside the skills (a failed
/// query becomes an empty result list); what reaches this level is
/// missing configuration and delivery failure.
#[derive(Debug, Error)]
pub enum SkillError {
    /// Discord posting is not configured at all
    #[error("Discord is not configured")]
    DiscordNotConfigured,

    /// The channel a skill posts to is not configured
    #[error("no {0} channel configured")]
    MissingChannel(&'static str),

    /// A cron expression in the schedule table failed to parse
    #[error("invalid cron expression '{expr}': {message}")]
    InvalidSchedule {
        expr: &'static str,
        message: String,
    },

    /// Posting the message failed
    #[error(transparent)]
    Post(#[from] PostError),
}
