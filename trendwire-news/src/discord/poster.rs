//! Discord message posting

use std::sync::Arc;

use tracing::info;
use twilight_http::error::ErrorType;
use twilight_http::Client as HttpClient;
use twilight_model::id::{marker::ChannelMarker, Id};

/// Discord messages are capped at 2000 characters of content
const MAX_CONTENT_CHARS: usize = 2000;

/// Posts skill output to Discord channels
pub struct DiscordPoster {
    http: Arc<HttpClient>,
}

impl DiscordPoster {
    /// Create a new poster from a bot token
    pub fn new(token: String) -> Self {
        Self {
            http: Arc::new(HttpClient::new(token)),
        }
    }

    /// Post a plain-content message to a channel
    ///
    /// Content longer than the Discord cap is truncated rather than
    /// rejected, so an unusually long report still ships.
    pub async fn post(
        &self,
        channel_id: Id<ChannelMarker>,
        content: &str,
    ) -> Result<(), PostError> {
        let content = clamp_content(content);

        self.http
            .create_message(channel_id)
            .content(&content)
            .await
            .map_err(PostError::from_twilight)?;

        info!("Posted {} chars to channel {}", content.chars().count(), channel_id);
        Ok(())
    }
}

fn clamp_content(content: &str) -> String {
    if content.chars().count() <= MAX_CONTENT_CHARS {
        content.to_string()
    } else {
        content.chars().take(MAX_CONTENT_CHARS).collect()
    }
}

/// Errors that can occur when posting to Discord
#[derive(Debug, thiserror::Error)]
pub enum PostError {
    /// Discord API rejected the message
    #[error("Discord API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Transport-level failure
    #[error("Discord request failed: {0}")]
    Request(String),
}

impl PostError {
    fn from_twilight(err: twilight_http::Error) -> Self {
        match err.kind() {
            ErrorType::Response { status, .. } => PostError::Api {
                status: status.get(),
                message: err.to_string(),
            },
            _ => PostError::Request(err.to_string()),
        }
    }
}
