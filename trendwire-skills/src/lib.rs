//! Scheduled skills for Trendwire
//!
//! Three skills mirror the bot's duties: the news crawler (category
//! trend scans and breaking news), the scheduled trend reports posted to
//! Discord, and the opportunity scout. The schedule table wires them to
//! cron expressions; the bot binary drives the table.

pub mod context;
pub mod crawler;
pub mod error;
pub mod opportunities;
pub mod reports;
pub mod schedule;

pub use context::{DiscordHandle, SkillContext};
pub use error::SkillError;
pub use reports::{SkillOutcome, Urgency};
pub use schedule::{default_schedule, Job, ScheduleEntry};
