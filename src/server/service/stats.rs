//! Study time statistics.
//!
//! Sums recorded durations of closed sessions, bucketed by the calendar of the
//! configured reporting offset. A session counts toward the day it started on.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, FixedOffset, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::study_session::StudySessionRepository,
    error::AppError,
    model::stats::{StudyChart, StudySummary},
    util::time::{local_date, start_of_date, start_of_day, start_of_week},
};

/// Label for sessions without a category.
const UNCATEGORIZED: &str = "Uncategorized";

pub struct StudyStatsService<'a> {
    db: &'a DatabaseConnection,
    offset: FixedOffset,
}

impl<'a> StudyStatsService<'a> {
    pub fn new(db: &'a DatabaseConnection, offset: FixedOffset) -> Self {
        Self { db, offset }
    }

    /// Total seconds studied today and since Monday of the current week.
    pub async fn get_summary(
        &self,
        user_id: i32,
        now: DateTime<Utc>,
    ) -> Result<StudySummary, AppError> {
        let repo = StudySessionRepository::new(self.db);

        let day_start = start_of_day(now, self.offset);
        let week_start = start_of_week(now, self.offset);

        let sessions = repo.get_closed_since(user_id, week_start).await?;

        let summary = sessions
            .iter()
            .fold(StudySummary::default(), |mut summary, session| {
                let seconds = session.duration.unwrap_or(0);
                summary.week += seconds;
                if session.start_time >= day_start {
                    summary.today += seconds;
                }
                summary
            });

        Ok(summary)
    }

    /// Seconds studied today per category, ordered by category name.
    pub async fn get_today_by_category(
        &self,
        user_id: i32,
        now: DateTime<Utc>,
    ) -> Result<StudyChart, AppError> {
        let repo = StudySessionRepository::new(self.db);

        let rows = repo
            .get_closed_with_category_since(user_id, start_of_day(now, self.offset))
            .await?;

        let mut totals: BTreeMap<String, i64> = BTreeMap::new();
        for (session, category) in rows {
            let name = category
                .map(|c| c.name)
                .unwrap_or_else(|| UNCATEGORIZED.to_string());

            *totals.entry(name).or_insert(0) += session.duration.unwrap_or(0);
        }

        Ok(StudyChart::from_points(totals.into_iter().collect()))
    }

    /// Seconds studied on each of the last seven local days, oldest first.
    ///
    /// Days without sessions are reported as 0.
    pub async fn get_last_7_days(
        &self,
        user_id: i32,
        now: DateTime<Utc>,
    ) -> Result<StudyChart, AppError> {
        let repo = StudySessionRepository::new(self.db);

        let today = local_date(now, self.offset);
        let first_day = today - Duration::days(6);

        let mut totals: BTreeMap<_, i64> = (0..7)
            .map(|day| (first_day + Duration::days(day), 0))
            .collect();

        let sessions = repo
            .get_closed_since(user_id, start_of_date(first_day, self.offset))
            .await?;

        for session in sessions {
            let day = local_date(session.start_time, self.offset);
            if let Some(total) = totals.get_mut(&day) {
                *total += session.duration.unwrap_or(0);
            }
        }

        Ok(StudyChart::from_points(
            totals
                .into_iter()
                .map(|(day, seconds)| (day.format("%Y-%m-%d").to_string(), seconds))
                .collect(),
        ))
    }
}
