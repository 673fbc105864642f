//! Study session workflow.
//!
//! Each user is either idle or has exactly one open session. `start` moves an idle user
//! to active; `stop` closes the open session, records its duration and converts whole
//! minutes into character exp inside a single transaction. A level-up is announced
//! through the `Notifier` only after the transaction has committed.

pub mod duration;

use sea_orm::{DatabaseConnection, SqlErr, TransactionTrait};

use crate::server::{
    data::{category::StudyCategoryRepository, study_session::StudySessionRepository},
    error::AppError,
    model::{
        notification::NotificationKind,
        study_session::{StartStudyParams, StopStudyOutcome, StopStudyParams, StudySession},
    },
    service::{
        leveling::{LevelCurve, LevelingService},
        notification::Notifier,
    },
};

pub struct StudySessionService<'a> {
    db: &'a DatabaseConnection,
    curve: LevelCurve,
    notifier: &'a dyn Notifier,
}

impl<'a> StudySessionService<'a> {
    pub fn new(db: &'a DatabaseConnection, curve: LevelCurve, notifier: &'a dyn Notifier) -> Self {
        Self {
            db,
            curve,
            notifier,
        }
    }

    /// Starts a session for an idle user.
    ///
    /// # Arguments
    /// - `params` - Caller, category owned by the caller, and server time of the start
    ///
    /// # Returns
    /// - `Ok(StudySession)` - The new open session
    /// - `Err(AppError::BadRequest)` - Category missing or owned by another user
    /// - `Err(AppError::Conflict)` - The user already has an open session
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn start(&self, params: StartStudyParams) -> Result<StudySession, AppError> {
        let category = StudyCategoryRepository::new(self.db)
            .find_owned(params.category_id, params.user_id)
            .await?;
        if category.is_none() {
            return Err(AppError::BadRequest(format!(
                "Category {} does not exist",
                params.category_id
            )));
        }

        let txn = self.db.begin().await?;
        let repo = StudySessionRepository::new(&txn);

        if repo.find_open_session(params.user_id).await?.is_some() {
            return Err(already_active());
        }

        let session = repo
            .create(params.user_id, Some(params.category_id), params.now)
            .await
            .map_err(|e| match e.sql_err() {
                // Lost a race against a concurrent start for the same user
                Some(SqlErr::UniqueConstraintViolation(_)) => already_active(),
                _ => AppError::from(e),
            })?;

        txn.commit().await?;

        tracing::info!(
            "User {} started study session {}",
            params.user_id,
            session.id
        );

        Ok(session)
    }

    /// Stops the user's open session and applies experience.
    ///
    /// Inside one transaction the session is re-read, closed with a compare-and-set
    /// update, and, when at least one whole minute was recorded, the exp is applied. Any
    /// error rolls the whole stop back. Sessions shorter than the minimum recordable
    /// duration close with a duration of 0 and grant nothing.
    ///
    /// # Arguments
    /// - `params` - Caller, session to stop, and server time of the stop
    ///
    /// # Returns
    /// - `Ok(StopStudyOutcome)` - Persisted duration and the new level on level-up
    /// - `Err(AppError::NotFound)` - Session closed, foreign, or nonexistent
    /// - `Err(AppError::DbErr)` - Database error, nothing was persisted
    pub async fn stop(&self, params: StopStudyParams) -> Result<StopStudyOutcome, AppError> {
        let txn = self.db.begin().await?;
        let repo = StudySessionRepository::new(&txn);

        let Some(session) = repo
            .find_open_by_id(params.session_id, params.user_id)
            .await?
        else {
            return Err(session_not_found());
        };

        let elapsed = duration::compute_duration(session.start_time, params.now);
        let recorded = duration::recorded_duration(elapsed);

        if !repo
            .close(session.id, params.user_id, params.now, recorded)
            .await?
        {
            return Err(session_not_found());
        }

        let minutes = duration::whole_minutes(recorded);
        let mut new_level = None;

        if minutes > 0 {
            let gain = LevelingService::new(&txn, self.curve)
                .apply_experience(params.user_id, minutes)
                .await?;

            if gain.level_up_occurred {
                new_level = Some(gain.new_level);
            }
        }

        txn.commit().await?;

        if duration::is_recordable(elapsed) {
            tracing::info!(
                "User {} stopped study session {} after {}s",
                params.user_id,
                session.id,
                recorded
            );
        } else {
            tracing::debug!(
                "Discarded study session {} of user {}: {}s is below the minimum",
                session.id,
                params.user_id,
                elapsed
            );
        }

        if let Some(level) = new_level {
            tracing::info!("User {} reached level {}", params.user_id, level);

            self.notifier.notify(
                params.user_id,
                NotificationKind::LevelUp,
                "Level up!".to_string(),
                format!("Your character reached level {}.", level),
            );
        }

        Ok(StopStudyOutcome {
            session_id: session.id,
            duration_seconds: recorded,
            new_level,
        })
    }

    /// Gets the user's open session, if any.
    pub async fn get_current(&self, user_id: i32) -> Result<Option<StudySession>, AppError> {
        let repo = StudySessionRepository::new(self.db);

        Ok(repo.find_open_session(user_id).await?)
    }
}

fn already_active() -> AppError {
    AppError::Conflict("A study session is already in progress".to_string())
}

fn session_not_found() -> AppError {
    AppError::NotFound("No open study session with that id".to_string())
}

