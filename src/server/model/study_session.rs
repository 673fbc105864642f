//! Study session domain models and parameters.
//!
//! A study session is open while `end_time` is `None`. Closing sets `end_time` and
//! `duration` exactly once; closed sessions are never modified again.

use chrono::{DateTime, Utc};

use crate::model::study::{
    ActiveSessionDto, CurrentSessionDto, LevelUpDto, StartStudyResponseDto, StopStudyResponseDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct StudySession {
    pub id: i32,
    pub user_id: i32,
    pub category_id: Option<i32>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    /// Recorded seconds; `None` while open, `Some(0)` for discarded sessions.
    pub duration: Option<i64>,
}

impl StudySession {
    pub fn from_entity(entity: entity::study_session::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            category_id: entity.category_id,
            start_time: entity.start_time,
            end_time: entity.end_time,
            duration: entity.duration,
        }
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    pub fn into_start_dto(self) -> StartStudyResponseDto {
        StartStudyResponseDto {
            session_id: self.id,
        }
    }

    pub fn into_active_dto(self) -> ActiveSessionDto {
        ActiveSessionDto {
            session_id: self.id,
            category_id: self.category_id,
            start_time: self.start_time,
        }
    }
}

/// Converts the caller's open session, if any, into the current-session response.
pub fn current_session_dto(session: Option<StudySession>) -> CurrentSessionDto {
    CurrentSessionDto {
        active_session: session.map(StudySession::into_active_dto),
    }
}

/// Parameters for starting a study session.
#[derive(Debug, Clone)]
pub struct StartStudyParams {
    pub user_id: i32,
    pub category_id: i32,
    pub now: DateTime<Utc>,
}

/// Parameters for stopping a study session.
#[derive(Debug, Clone)]
pub struct StopStudyParams {
    pub user_id: i32,
    pub session_id: i32,
    pub now: DateTime<Utc>,
}

/// Outcome of a successful stop.
#[derive(Debug, Clone, PartialEq)]
pub struct StopStudyOutcome {
    pub session_id: i32,
    /// Persisted duration in seconds, 0 when the session was too short to record.
    pub duration_seconds: i64,
    /// New level when the stop caused a level-up.
    pub new_level: Option<i32>,
}

impl StopStudyOutcome {
    pub fn into_dto(self) -> StopStudyResponseDto {
        StopStudyResponseDto {
            duration_seconds: self.duration_seconds,
            level_up: self.new_level.map(|new_level| LevelUpDto { new_level }),
        }
    }
}
