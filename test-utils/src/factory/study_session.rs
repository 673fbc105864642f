//! Study session factory for creating open or closed sessions.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating study sessions.
///
/// Sessions are open by default. Calling `closed_after` stamps an end time and duration and
/// clears the open marker the same way the server does on stop.
///
/// # Example
///
/// ```rust,ignore
/// // A finished 10 minute session that started an hour ago
/// let session = StudySessionFactory::new(&db, user.id)
///     .start_time(Utc::now() - Duration::hours(1))
///     .closed_after(600)
///     .build()
///     .await?;
/// ```
pub struct StudySessionFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    category_id: Option<i32>,
    start_time: DateTime<Utc>,
    duration: Option<i64>,
}

impl<'a> StudySessionFactory<'a> {
    /// Creates a factory for an open session starting now.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            category_id: None,
            start_time: Utc::now(),
            duration: None,
        }
    }

    pub fn category_id(mut self, category_id: Option<i32>) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    /// Marks the session as closed `duration` seconds after its start time.
    pub fn closed_after(mut self, duration: i64) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Builds and inserts the session.
    pub async fn build(self) -> Result<entity::study_session::Model, DbErr> {
        let (end_time, open_user_id) = match self.duration {
            Some(seconds) => (Some(self.start_time + Duration::seconds(seconds)), None),
            None => (None, Some(self.user_id)),
        };

        entity::study_session::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            category_id: ActiveValue::Set(self.category_id),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(end_time),
            duration: ActiveValue::Set(self.duration),
            open_user_id: ActiveValue::Set(open_user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open session for the user starting at `start_time`.
pub async fn create_open_session(
    db: &DatabaseConnection,
    user_id: i32,
    category_id: Option<i32>,
    start_time: DateTime<Utc>,
) -> Result<entity::study_session::Model, DbErr> {
    StudySessionFactory::new(db, user_id)
        .category_id(category_id)
        .start_time(start_time)
        .build()
        .await
}

/// Creates a closed session for the user lasting `duration` seconds.
pub async fn create_closed_session(
    db: &DatabaseConnection,
    user_id: i32,
    category_id: Option<i32>,
    start_time: DateTime<Utc>,
    duration: i64,
) -> Result<entity::study_session::Model, DbErr> {
    StudySessionFactory::new(db, user_id)
        .category_id(category_id)
        .start_time(start_time)
        .closed_after(duration)
        .build()
        .await
}
