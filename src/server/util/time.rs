//! Calendar helpers for reporting study time in a fixed local offset.
//!
//! Timestamps are stored in UTC. Statistics group them by the calendar of a configured
//! UTC offset, so "today" and "this week" follow the users' wall clock rather than UTC.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, Offset, Utc};

/// Builds the reporting offset from whole hours east of UTC.
///
/// Values outside chrono's accepted range (±24h) fall back to UTC.
pub fn reporting_offset(hours: i32) -> FixedOffset {
    hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix())
}

/// Calendar date of `time` in the given offset.
pub fn local_date(time: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    time.with_timezone(&offset).date_naive()
}

/// UTC instant of local midnight at the start of `date`.
pub fn start_of_date(date: NaiveDate, offset: FixedOffset) -> DateTime<Utc> {
    let local_midnight = date.and_time(NaiveTime::MIN);
    let utc = local_midnight - Duration::seconds(i64::from(offset.local_minus_utc()));

    DateTime::from_naive_utc_and_offset(utc, Utc)
}

/// UTC instant at which the local day containing `now` began.
pub fn start_of_day(now: DateTime<Utc>, offset: FixedOffset) -> DateTime<Utc> {
    start_of_date(local_date(now, offset), offset)
}

/// UTC instant at which the local week containing `now` began. Weeks start on Monday.
pub fn start_of_week(now: DateTime<Utc>, offset: FixedOffset) -> DateTime<Utc> {
    let today = local_date(now, offset);
    let monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));

    start_of_date(monday, offset)
}
