use crate::server::{
    error::AppError,
    service::{category::StudyCategoryService, stats::StudyStatsService},
    util::time::reporting_offset,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory};

mod get_last_7_days;

/// Wednesday 2026-03-11 12:00 in UTC+9.
fn wednesday_noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 11, 3, 0, 0).unwrap()
}
