//! Discord posting configuration

use std::env;

use twilight_model::id::{marker::ChannelMarker, Id};

/// Configuration for Discord posting
///
/// Loaded from the environment exactly once at startup and passed by
/// reference into each skill invocation. Every channel is optional; a
/// skill whose channel is absent short-circuits with a descriptive
/// error (or skips, where the original behavior is to skip).
#[derive(Debug, Clone)]
pub struct DiscordConfig {
    /// Discord bot token for authentication
    pub bot_token: String,
    /// Hourly trend updates
    pub trends_channel: Option<Id<ChannelMarker>>,
    /// Breaking news alerts
    pub alerts_channel: Option<Id<ChannelMarker>>,
    /// Market open/close summaries (falls back to the trends channel)
    pub market_channel: Option<Id<ChannelMarker>>,
    /// Money-making opportunity posts
    pub opportunities_channel: Option<Id<ChannelMarker>>,
}

impl DiscordConfig {
    /// Load Discord configuration from environment variables
    ///
    /// Expects:
    /// - DISCORD_BOT_TOKEN (fallback DISCORD_TOKEN): bot token
    /// - DISCORD_TRENDS_CHANNEL_ID, DISCORD_ALERTS_CHANNEL_ID,
    ///   DISCORD_MARKET_CHANNEL_ID, DISCORD_OPPORTUNITIES_CHANNEL_ID:
    ///   numeric channel IDs, each optional
    ///
    /// Returns `Ok(None)` when no token is set.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        let bot_token = match env::var("DISCORD_BOT_TOKEN").or_else(|_| env::var("DISCORD_TOKEN")) {
            Ok(token) if !token.is_empty() => token,
            _ => return Ok(None), // Not configured, return None
        };

        Ok(Some(Self {
            bot_token,
            trends_channel: channel_from_env("DISCORD_TRENDS_CHANNEL_ID")?,
            alerts_channel: channel_from_env("DISCORD_ALERTS_CHANNEL_ID")?,
            market_channel: channel_from_env("DISCORD_MARKET_CHANNEL_ID")?,
            opportunities_channel: channel_from_env("DISCORD_OPPORTUNITIES_CHANNEL_ID")?,
        }))
    }
}

fn channel_from_env(name: &'static str) -> Result<Option<Id<ChannelMarker>>, ConfigError> {
    match env::var(name) {
        Ok(raw) if !raw.is_empty() => parse_channel_id(name, &raw).map(Some),
        _ => Ok(None),
    }
}

/// Parse a raw channel ID string into a typed channel Id
fn parse_channel_id(field: &'static str, raw: &str) -> Result<Id<ChannelMarker>, ConfigError> {
    raw.parse::<u64>()
        .ok()
        .and_then(Id::new_checked)
        .ok_or_else(|| ConfigError::InvalidChannelId {
            field,
            value: raw.to_string(),
        })
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid channel ID in {field}: {value}")]
    InvalidChannelId { field: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_channel_id() {
        let id = parse_channel_id("DISCORD_TRENDS_CHANNEL_ID", "123456789012345678").unwrap();
        assert_eq!(id.get(), 123456789012345678);
    }

    #[test]
    fn test_parse_channel_id_rejects_garbage() {
        assert!(parse_channel_id("DISCORD_TRENDS_CHANNEL_ID", "not-a-number").is_err());
        assert!(parse_channel_id("DISCORD_TRENDS_CHANNEL_ID", "0").is_err());
        assert!(parse_channel_id("DISCORD_TRENDS_CHANNEL_ID", "-5").is_err());
    }
}
