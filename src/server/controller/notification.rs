use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        notification::NotificationDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// List a user's notifications, newest first.
///
/// # Access Control
/// - `Owner` - Only the user themself
#[utoipa::path(
    get,
    path = "/api/notifications/{id}/",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Notifications of the user", body = Vec<NotificationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the notification owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner(user_id)])
        .await?;

    let notifications = NotificationService::new(&state.db)
        .get_notifications(user_id)
        .await?;
    let dtos: Vec<NotificationDto> = notifications.into_iter().map(|n| n.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Mark one of the session user's notifications as read.
///
/// # Access Control
/// - Any logged in user, for notifications they own
///
/// # Returns
/// - `200 OK` - Marked as read
/// - `403 Forbidden` - Notification belongs to another user
/// - `404 Not Found` - Notification does not exist
#[utoipa::path(
    post,
    path = "/api/notifications/{id}/read/",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification marked as read", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Notification of another user", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn read_notification(
    State(state): State<AppState>,
    session: Session,
    Path(notification_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    NotificationService::new(&state.db)
        .mark_read(user.id, notification_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Notification marked as read")),
    ))
}
