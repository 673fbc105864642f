//! Study session repository.
//!
//! Persists the open/closed lifecycle of study sessions. Every method works on either a
//! plain connection or a transaction so the stop workflow can read and close a session
//! inside the same unit of work that updates character progress.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::{category::StudyCategory, study_session::StudySession};

pub struct StudySessionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudySessionRepository<'a, C> {
    /// Creates a new StudySessionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the user's open session, if any.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the session
    ///
    /// # Returns
    /// - `Ok(Some(StudySession))` - The user has an open session
    /// - `Ok(None)` - The user is idle
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_open_session(&self, user_id: i32) -> Result<Option<StudySession>, DbErr> {
        let entity = entity::prelude::StudySession::find()
            .filter(entity::study_session::Column::UserId.eq(user_id))
            .filter(entity::study_session::Column::EndTime.is_null())
            .one(self.db)
            .await?;

        Ok(entity.map(StudySession::from_entity))
    }

    /// Finds a specific session only if it is open and owned by the user.
    ///
    /// # Returns
    /// - `Ok(Some(StudySession))` - Session is open and belongs to `user_id`
    /// - `Ok(None)` - Session closed, foreign, or nonexistent
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_open_by_id(
        &self,
        session_id: i32,
        user_id: i32,
    ) -> Result<Option<StudySession>, DbErr> {
        let entity = entity::prelude::StudySession::find_by_id(session_id)
            .filter(entity::study_session::Column::UserId.eq(user_id))
            .filter(entity::study_session::Column::EndTime.is_null())
            .one(self.db)
            .await?;

        Ok(entity.map(StudySession::from_entity))
    }

    /// Inserts a new open session.
    ///
    /// The row carries `open_user_id = user_id`, so a second open session for the same
    /// user fails with a unique constraint violation.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the session
    /// - `category_id` - Category the session is filed under
    /// - `start_time` - Server time at which the session starts
    ///
    /// # Returns
    /// - `Ok(StudySession)` - Created open session
    /// - `Err(DbErr)` - Database error, including the unique violation described above
    pub async fn create(
        &self,
        user_id: i32,
        category_id: Option<i32>,
        start_time: DateTime<Utc>,
    ) -> Result<StudySession, DbErr> {
        let entity = entity::study_session::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            category_id: ActiveValue::Set(category_id),
            start_time: ActiveValue::Set(start_time),
            end_time: ActiveValue::Set(None),
            duration: ActiveValue::Set(None),
            open_user_id: ActiveValue::Set(Some(user_id)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(StudySession::from_entity(entity))
    }

    /// Closes an open session with compare-and-set semantics.
    ///
    /// Only a row matching the id, the owner, and `end_time IS NULL` is updated, so of
    /// two concurrent closers exactly one sees an affected row.
    ///
    /// # Arguments
    /// - `session_id` - Session to close
    /// - `user_id` - Expected owner
    /// - `end_time` - Server time of the stop
    /// - `duration` - Seconds to record
    ///
    /// # Returns
    /// - `Ok(true)` - Session closed by this call
    /// - `Ok(false)` - No open session with that id for the user
    /// - `Err(DbErr)` - Database error during update
    pub async fn close(
        &self,
        session_id: i32,
        user_id: i32,
        end_time: DateTime<Utc>,
        duration: i64,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::StudySession::update_many()
            .set(entity::study_session::ActiveModel {
                end_time: ActiveValue::Set(Some(end_time)),
                duration: ActiveValue::Set(Some(duration)),
                open_user_id: ActiveValue::Set(None),
                ..Default::default()
            })
            .filter(entity::study_session::Column::Id.eq(session_id))
            .filter(entity::study_session::Column::UserId.eq(user_id))
            .filter(entity::study_session::Column::EndTime.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Gets a session by id regardless of owner or state.
    #[cfg(test)]
    pub async fn get_by_id(&self, session_id: i32) -> Result<Option<StudySession>, DbErr> {
        let entity = entity::prelude::StudySession::find_by_id(session_id)
            .one(self.db)
            .await?;

        Ok(entity.map(StudySession::from_entity))
    }

    /// Gets the user's closed sessions that started at or after `since`, oldest first.
    pub async fn get_closed_since(
        &self,
        user_id: i32,
        since: DateTime<Utc>,
    ) -> Result<Vec<StudySession>, DbErr> {
        let entities = entity::prelude::StudySession::find()
            .filter(entity::study_session::Column::UserId.eq(user_id))
            .filter(entity::study_session::Column::EndTime.is_not_null())
            .filter(entity::study_session::Column::StartTime.gte(since))
            .order_by_asc(entity::study_session::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(StudySession::from_entity).collect())
    }

    /// Gets the user's closed sessions since `since` together with their categories.
    ///
    /// Sessions whose category was deleted or never set come back with `None`.
    pub async fn get_closed_with_category_since(
        &self,
        user_id: i32,
        since: DateTime<Utc>,
    ) -> Result<Vec<(StudySession, Option<StudyCategory>)>, DbErr> {
        let rows = entity::prelude::StudySession::find()
            .filter(entity::study_session::Column::UserId.eq(user_id))
            .filter(entity::study_session::Column::EndTime.is_not_null())
            .filter(entity::study_session::Column::StartTime.gte(since))
            .find_also_related(entity::prelude::StudyCategory)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(session, category)| {
                (
                    StudySession::from_entity(session),
                    category.map(StudyCategory::from_entity),
                )
            })
            .collect())
    }
}
