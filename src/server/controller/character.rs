use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        character::{CharacterDto, RankingEntryDto, RenameCharacterDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::character::{RankingEntry, RenameCharacterParams},
        service::character::CharacterService,
        state::AppState,
    },
};

/// Tag for grouping character endpoints in OpenAPI documentation
pub static CHARACTER_TAG: &str = "character";

/// Get the caller's character.
///
/// Users who have not yet earned exp get a level 1 character with no exp.
///
/// # Returns
/// - `200 OK` - Level, exp within the level and the exp needed for the next level
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/character",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved character", body = CharacterDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = CharacterService::new(&state.db, state.level_curve);

    let character = service.get_for_user(user.id).await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

/// Rename the caller's character.
///
/// The name is trimmed and must be 2 to 10 characters long.
///
/// # Returns
/// - `200 OK` - Character with the new name
/// - `400 Bad Request` - Malformed body or invalid name length
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/character/name",
    tag = CHARACTER_TAG,
    request_body = RenameCharacterDto,
    responses(
        (status = 200, description = "Successfully renamed character", body = CharacterDto),
        (status = 400, description = "Invalid character name", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn rename_character(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<RenameCharacterDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let service = CharacterService::new(&state.db, state.level_curve);

    let character = service
        .rename(RenameCharacterParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

/// Get the public leaderboard.
///
/// # Access Control
/// - Public, no authentication required
///
/// # Returns
/// - `200 OK` - Top 100 characters by level, then exp
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/ranking",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved ranking", body = Vec<RankingEntryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ranking(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CharacterService::new(&state.db, state.level_curve);

    let ranking = service.get_ranking().await?;

    Ok((
        StatusCode::OK,
        Json(
            ranking
                .into_iter()
                .map(RankingEntry::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}
