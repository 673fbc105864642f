use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        study::{
            CurrentSessionDto, StartStudyDto, StartStudyResponseDto, StopStudyResponseDto,
            StudyChartDto, StudySummaryDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::study_session::{current_session_dto, StartStudyParams, StopStudyParams},
        service::{stats::StudyStatsService, study_session::StudySessionService},
        state::AppState,
    },
};

/// Tag for grouping study endpoints in OpenAPI documentation
pub static STUDY_TAG: &str = "study";

/// Start a study session.
///
/// Opens a new session for the caller in one of their categories, using the server
/// clock as the start time. A user can have at most one open session.
///
/// # Access Control
/// - Authenticated users start sessions for themselves only
///
/// # Returns
/// - `201 Created` - Session started
/// - `400 Bad Request` - Malformed body or category not owned by the caller
/// - `401 Unauthorized` - User not authenticated
/// - `409 Conflict` - Caller already has an open session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/study/start",
    tag = STUDY_TAG,
    request_body = StartStudyDto,
    responses(
        (status = 201, description = "Study session started", body = StartStudyResponseDto),
        (status = 400, description = "Invalid category", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 409, description = "A study session is already in progress", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start_study(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<StartStudyDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let service = StudySessionService::new(&state.db, state.level_curve, state.notifier.as_ref());

    let study_session = service
        .start(StartStudyParams {
            user_id: user.id,
            category_id: payload.category_id,
            now: Utc::now(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(study_session.into_start_dto())))
}

/// Stop a study session.
///
/// Closes the caller's open session, records the elapsed whole seconds and grants one
/// exp per whole minute. Sessions shorter than 5 seconds are recorded with a duration
/// of 0 and grant nothing.
///
/// # Returns
/// - `200 OK` - Recorded duration, with `levelUp` present when the character levelled up
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Session already closed, owned by another user, or nonexistent
/// - `500 Internal Server Error` - Database error, nothing was recorded
#[utoipa::path(
    put,
    path = "/api/study/stop/{session_id}",
    tag = STUDY_TAG,
    params(
        ("session_id" = i32, Path, description = "Study session ID")
    ),
    responses(
        (status = 200, description = "Study session stopped", body = StopStudyResponseDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "No open study session with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn stop_study(
    State(state): State<AppState>,
    session: Session,
    Path(session_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = StudySessionService::new(&state.db, state.level_curve, state.notifier.as_ref());

    let outcome = service
        .stop(StopStudyParams {
            user_id: user.id,
            session_id,
            now: Utc::now(),
        })
        .await?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}

/// Get the caller's open study session.
///
/// # Returns
/// - `200 OK` - `activeSession` is null when the caller is idle
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/study/current",
    tag = STUDY_TAG,
    responses(
        (status = 200, description = "Current study session", body = CurrentSessionDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_session(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = StudySessionService::new(&state.db, state.level_curve, state.notifier.as_ref());

    let current = service.get_current(user.id).await?;

    Ok((StatusCode::OK, Json(current_session_dto(current))))
}

/// Get seconds studied today and this week.
///
/// Days and weeks follow the configured reporting offset; weeks start on Monday.
#[utoipa::path(
    get,
    path = "/api/study/summary",
    tag = STUDY_TAG,
    responses(
        (status = 200, description = "Study time summary", body = StudySummaryDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_summary(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = StudyStatsService::new(&state.db, state.stats_offset);

    let summary = service.get_summary(user.id, Utc::now()).await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// Get today's study time per category, ordered by category name.
#[utoipa::path(
    get,
    path = "/api/study/stats/today",
    tag = STUDY_TAG,
    responses(
        (status = 200, description = "Today's study time by category", body = StudyChartDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_today_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = StudyStatsService::new(&state.db, state.stats_offset);

    let chart = service.get_today_by_category(user.id, Utc::now()).await?;

    Ok((StatusCode::OK, Json(chart.into_dto())))
}

/// Get study time for each of the last seven days, oldest first.
#[utoipa::path(
    get,
    path = "/api/study/stats/last7",
    tag = STUDY_TAG,
    responses(
        (status = 200, description = "Daily study time for the last seven days", body = StudyChartDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_last7_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = StudyStatsService::new(&state.db, state.stats_offset);

    let chart = service.get_last_7_days(user.id, Utc::now()).await?;

    Ok((StatusCode::OK, Json(chart.into_dto())))
}
