//! Elapsed-time computation and the minimum recordable duration.
//!
//! All functions are pure; the caller supplies `now` from the server clock.

use chrono::{DateTime, Utc};

/// Sessions shorter than this many seconds are closed without recording time.
pub const MIN_RECORDABLE_SECONDS: i64 = 5;

/// Whole seconds between `start_time` and `now`, truncated.
///
/// Clock skew that puts `now` before `start_time` yields 0.
pub fn compute_duration(start_time: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - start_time).num_seconds().max(0)
}

pub fn is_recordable(duration: i64) -> bool {
    duration >= MIN_RECORDABLE_SECONDS
}

/// Duration to persist on close: the elapsed seconds, or 0 when too short to record.
pub fn recorded_duration(duration: i64) -> i64 {
    if is_recordable(duration) {
        duration
    } else {
        0
    }
}

/// Whole minutes of focus, the unit experience is granted in.
pub fn whole_minutes(duration: i64) -> i64 {
    duration.max(0) / 60
}
