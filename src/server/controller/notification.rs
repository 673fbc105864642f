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
        notification::{CreateNotificationDto, NotificationDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::notification::{CreateNotificationParams, Notification},
        service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// Get the caller's notifications.
///
/// # Returns
/// - `200 OK` - Notifications, newest first
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Successfully retrieved notifications", body = Vec<NotificationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = NotificationService::new(&state.db);

    let notifications = service.get_for_user(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(
            notifications
                .into_iter()
                .map(Notification::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Mark one of the caller's notifications as read.
///
/// # Returns
/// - `204 No Content` - Notification marked as read
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Notification missing or owned by another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/notifications/{notification_id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("notification_id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 204, description = "Notification marked as read"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    session: Session,
    Path(notification_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = NotificationService::new(&state.db);

    service.mark_read(notification_id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Mark all of the caller's notifications as read.
///
/// # Returns
/// - `204 No Content` - Notifications marked as read
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/notifications/read-all",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 204, description = "Notifications marked as read"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_all_notifications_read(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = NotificationService::new(&state.db);

    service.mark_all_read(user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete one of the caller's notifications.
///
/// # Returns
/// - `204 No Content` - Notification deleted
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Notification missing or owned by another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/notifications/{notification_id}",
    tag = NOTIFICATION_TAG,
    params(
        ("notification_id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 204, description = "Notification deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    session: Session,
    Path(notification_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = NotificationService::new(&state.db);

    service.delete(notification_id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Send a notification to a user.
///
/// # Access Control
/// - `Admin` - Only admins can send notifications
///
/// # Returns
/// - `201 Created` - Notification stored
/// - `400 Bad Request` - Malformed body, unknown kind or blank title
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error, e.g. unknown recipient
#[utoipa::path(
    post,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    request_body = CreateNotificationDto,
    responses(
        (status = 201, description = "Successfully created notification", body = NotificationDto),
        (status = 400, description = "Invalid notification data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_notification(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<CreateNotificationDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let service = NotificationService::new(&state.db);

    let params = CreateNotificationParams::from_dto(payload)?;
    let notification = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(notification.into_dto())))
}
