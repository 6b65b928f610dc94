//! Discord posting integration
//!
//! Gated behind the `discord` feature. Provides the configuration loaded
//! once at startup and the client the skills post their reports through.

pub mod config;
pub mod poster;

pub use config::{ConfigError, DiscordConfig};
pub use poster::{DiscordPoster, PostError};
