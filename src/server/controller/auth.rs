use axum::{http::StatusCode, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    model::api::ErrorDto,
    server::{error::AppError, middleware::session::AuthSession},
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log out the current user.
///
/// Clears all data from the server session. Succeeds whether or not a user was
/// logged in.
///
/// # Returns
/// - `204 No Content` - Session cleared
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session cleared"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}
