//! Upstream search clients for Trendwire
//!
//! This crate provides clients for fetching article-like results from:
//! - Brave Search: web and news verticals (primary)
//! - Polygon.io: financial news with ticker annotations (optional)
//!
//! With the `discord` feature it also provides the posting integration
//! the scheduled skills deliver their reports through.

pub mod brave;
pub mod error;
pub mod polygon;
pub mod types;

#[cfg(feature = "discord")]
pub mod discord;

pub use brave::{BraveClient, Freshness};
pub use error::NewsError;
pub use polygon::PolygonClient;
