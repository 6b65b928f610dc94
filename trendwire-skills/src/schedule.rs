//! Cron schedule table for the scheduled skills
//!
//! Each entry pairs a skill with a five-field cron expression and the
//! timezone it is evaluated in. The bot binary parses every expression
//! at startup and runs one sleep-until-next-fire loop per entry.

use std::fmt;

use chrono_tz::Tz;
use croner::Cron;

use crate::context::SkillContext;
use crate::error::SkillError;
use crate::opportunities;
use crate::reports::{self, SkillOutcome};

/// A scheduled skill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    HourlyTrends,
    MarketOpen,
    MarketClose,
    BreakingAlerts,
    DailyOpportunity,
    WeeklyOpportunity,
}

impl Job {
    /// Stable name used in logs
    pub fn name(self) -> &'static str {
        match self {
            Job::HourlyTrends => "hourly-trends",
            Job::MarketOpen => "market-open",
            Job::MarketClose => "market-close",
            Job::BreakingAlerts => "breaking-alerts",
            Job::DailyOpportunity => "daily-opportunity",
            Job::WeeklyOpportunity => "weekly-opportunity",
        }
    }

    /// Run one invocation of this job
    pub async fn run(self, ctx: &SkillContext) -> Result<SkillOutcome, SkillError> {
        match self {
            Job::HourlyTrends => reports::run_hourly_trend_update(ctx).await,
            Job::MarketOpen => reports::run_market_open_summary(ctx).await,
            Job::MarketClose => reports::run_market_close_summary(ctx).await,
            Job::BreakingAlerts => reports::check_and_post_alerts(ctx).await,
            Job::DailyOpportunity => opportunities::run_daily_opportunity_update(ctx).await,
            Job::WeeklyOpportunity => opportunities::run_weekly_opportunity_report(ctx).await,
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the schedule table
#[derive(Debug, Clone)]
pub struct ScheduleEntry {
    /// The skill to run
    pub job: Job,
    /// Standard five-field cron expression
    pub schedule: &'static str,
    /// Timezone the expression is evaluated in
    pub timezone: Tz,
    /// Human-readable purpose
    pub description: &'static str,
}

impl ScheduleEntry {
    /// Parse the cron expression
    pub fn cron(&self) -> Result<Cron, SkillError> {
        Cron::new(self.schedule)
            .parse()
            .map_err(|e| SkillError::InvalidSchedule {
                expr: self.schedule,
                message: e.to_string(),
            })
    }
}

/// The default schedule, mirroring the per-skill cron tables
pub fn default_schedule() -> Vec<ScheduleEntry> {
    use chrono_tz::America::New_York;

    vec![
        ScheduleEntry {
            job: Job::HourlyTrends,
            schedule: "0 * * * *",
            timezone: New_York,
            description: "Post hourly trend update to #trends",
        },
        ScheduleEntry {
            job: Job::MarketOpen,
            schedule: "30 9 * * 1-5",
            timezone: New_York,
            description: "Market open summary to #market-open",
        },
        ScheduleEntry {
            job: Job::MarketClose,
            schedule: "0 16 * * 1-5",
            timezone: New_York,
            description: "Market close summary to #market-open",
        },
        ScheduleEntry {
            job: Job::BreakingAlerts,
            schedule: "*/15 * * * 1-5",
            timezone: New_York,
            description: "Check and post breaking news to #alerts",
        },
        ScheduleEntry {
            job: Job::DailyOpportunity,
            schedule: "0 8 * * *",
            timezone: New_York,
            description: "Daily money-making opportunity post",
        },
        ScheduleEntry {
            job: Job::WeeklyOpportunity,
            schedule: "0 10 * * 0",
            timezone: New_York,
            description: "Weekly comprehensive opportunity report",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike, Weekday};

    #[test]
    fn test_every_schedule_entry_parses() {
        let schedule = default_schedule();
        assert_eq!(schedule.len(), 6);
        for entry in &schedule {
            assert!(
                entry.cron().is_ok(),
                "{} has an invalid cron expression",
                entry.job
            );
        }
    }

    #[test]
    fn test_invalid_expression_is_rejected() {
        let entry = ScheduleEntry {
            job: Job::HourlyTrends,
            schedule: "not a cron",
            timezone: chrono_tz::America::New_York,
            description: "broken",
        };
        assert!(matches!(
            entry.cron(),
            Err(SkillError::InvalidSchedule { .. })
        ));
    }

    #[test]
    fn test_market_open_fires_on_weekday_mornings() {
        let entry = default_schedule()
            .into_iter()
            .find(|e| e.job == Job::MarketOpen)
            .unwrap();
        let cron = entry.cron().unwrap();

        // Friday 2026-08-07 09:00 ET -> next fire 09:30 the same day.
        let start = entry
            .timezone
            .with_ymd_and_hms(2026, 8, 7, 9, 0, 0)
            .unwrap();
        let next = cron.find_next_occurrence(&start, false).unwrap();

        assert_eq!(next.hour(), 9);
        assert_eq!(next.minute(), 30);
        assert_eq!(next.weekday(), Weekday::Fri);
    }

    #[test]
    fn test_job_names_are_unique() {
        let schedule = default_schedule();
        let mut names: Vec<&str> = schedule.iter().map(|e| e.job.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), schedule.len());
    }
}
