//! Core types for Trendwire
//!
//! This crate defines the shared data structures used across the bot:
//! the canonical article shape every upstream client normalizes into,
//! and the ranked-trend report types the skills format for Discord.

pub mod article;
pub mod trend;

pub use article::Article;
pub use trend::{CategoryTrendReport, RankedTrend};
