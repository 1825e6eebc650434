use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthSession,
        },
        model::user::UpdateUserParam,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get a user's profile.
///
/// # Access Control
/// - `Owner` - Only the user themself
///
/// # Returns
/// - `200 OK` - Profile including the resolved level
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Session user is not `user_id`
/// - `404 Not Found` - User does not exist
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the profile owner", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner(user_id)])
        .await?;

    let profile = UserService::new(&state.db).get_profile(user_id).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Update a user's phone number and/or profile picture.
///
/// Absent fields keep their stored value.
///
/// # Access Control
/// - `Owner` - Only the user themself
///
/// # Returns
/// - `200 OK` - Profile updated
/// - `400 Bad Request` - Invalid value, or phone number already used by another user
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Session user is not `user_id`
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/update/",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Profile updated", body = MessageDto),
        (status = 400, description = "Invalid or conflicting value", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the profile owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    payload: Result<Json<UpdateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner(user_id)])
        .await?;

    UserService::new(&state.db)
        .update(UpdateUserParam {
            user_id,
            phone_number: payload.phone_number,
            profile_picture: payload.profile_picture,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Profile updated successfully")),
    ))
}

/// Delete a user and everything they own, then end the session.
///
/// Routed for both `POST` and `DELETE`.
///
/// # Access Control
/// - `Owner` - Only the user themself
///
/// # Returns
/// - `200 OK` - User deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Session user is not `user_id`
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}/delete/",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the profile owner", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner(user_id)])
        .await?;

    let user = UserService::new(&state.db).delete(user_id).await?;

    AuthSession::new(&session).clear().await;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!(
            "User {} deleted successfully",
            user.name
        ))),
    ))
}
