use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        category::{CreateStudyCategoryDto, StudyCategoryDto, UpdateStudyCategoryDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::category::{CreateStudyCategoryParams, StudyCategory, UpdateStudyCategoryParams},
        service::category::StudyCategoryService,
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// Get the caller's study categories.
///
/// # Access Control
/// - Authenticated users see only their own categories
///
/// # Returns
/// - `200 OK` - Categories, most recently created first
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved categories", body = Vec<StudyCategoryDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = StudyCategoryService::new(&state.db);

    let categories = service.get_for_user(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(
            categories
                .into_iter()
                .map(StudyCategory::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a study category.
///
/// The name is trimmed and must not be empty.
///
/// # Returns
/// - `201 Created` - Category created
/// - `400 Bad Request` - Malformed body or blank name
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    request_body = CreateStudyCategoryDto,
    responses(
        (status = 201, description = "Successfully created category", body = StudyCategoryDto),
        (status = 400, description = "Invalid category name", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<CreateStudyCategoryDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let service = StudyCategoryService::new(&state.db);

    let params = CreateStudyCategoryParams::from_dto(user.id, payload);
    let category = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(category.into_dto())))
}

/// Rename a study category.
///
/// # Returns
/// - `200 OK` - Category renamed
/// - `400 Bad Request` - Malformed body or blank name
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Category missing or owned by another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/categories/{category_id}",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i32, Path, description = "Study category ID")
    ),
    request_body = UpdateStudyCategoryDto,
    responses(
        (status = 200, description = "Successfully renamed category", body = StudyCategoryDto),
        (status = 400, description = "Invalid category name", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    session: Session,
    Path(category_id): Path<i32>,
    payload: Result<Json<UpdateStudyCategoryDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let service = StudyCategoryService::new(&state.db);

    let params = UpdateStudyCategoryParams::from_dto(category_id, user.id, payload);
    let category = service.rename(params).await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Delete a study category.
///
/// Sessions recorded under the category are kept and reported as uncategorized.
///
/// # Returns
/// - `204 No Content` - Category deleted
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Category missing or owned by another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/categories/{category_id}",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i32, Path, description = "Study category ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted category"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    session: Session,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = StudyCategoryService::new(&state.db);

    service.delete(category_id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
